use serde::Serialize;

/// Colour of a status or severity label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Green,
    Red,
    Orange,
    Purple,
    Blue,
    Gray,
}

impl LabelColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelColor::Green => "green",
            LabelColor::Red => "red",
            LabelColor::Orange => "orange",
            LabelColor::Purple => "purple",
            LabelColor::Blue => "blue",
            LabelColor::Gray => "gray",
        }
    }
}

/// A short coloured label shown next to a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub text: String,
    pub color: LabelColor,
}

impl Label {
    pub fn new(text: impl Into<String>, color: LabelColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}
