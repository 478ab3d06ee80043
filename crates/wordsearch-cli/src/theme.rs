use crossterm::style::Color;

/// Colors used when printing a puzzle with its answers highlighted
#[derive(Debug, Clone)]
pub struct Theme {
    /// Filler letters
    pub filler: Color,
    /// Letters belonging to a placed word
    pub answer: Color,
    /// Background behind answer letters
    pub answer_bg: Color,
    /// Word list heading and entries
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark terminal theme (default)
    pub fn dark() -> Self {
        Self {
            filler: Color::Rgb { r: 110, g: 115, b: 135 },
            answer: Color::Rgb { r: 255, g: 255, b: 255 },
            answer_bg: Color::Rgb { r: 40, g: 90, b: 160 },
            info: Color::Rgb { r: 130, g: 200, b: 130 },
        }
    }
}
