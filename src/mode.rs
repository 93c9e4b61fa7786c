//!

use crate::width::DisplayWidth;

/// How the stored text is echoed back on screen. Never affects the text itself.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EchoMode {
    /// Display the text as is.
    #[default]
    Normal,
    /// Display one mask character per occupied column, e.g. for passwords.
    Masked,
    /// Display nothing at all, like a password prompt on the command line.
    Hidden,
}

impl EchoMode {
    pub fn transform<M>(self, chars: &[char], mask: char, columns: &M) -> String
    where
        M: DisplayWidth + ?Sized,
    {
        match self {
            Self::Normal => chars.iter().collect(),
            Self::Masked => std::iter::repeat(mask)
                .take(columns.str_width(chars))
                .collect(),
            Self::Hidden => String::new(),
        }
    }

    /// Masked and hidden text must not leak word boundaries.
    pub fn reveals_words(self) -> bool {
        match self {
            Self::Normal => true,
            Self::Masked | Self::Hidden => false,
        }
    }
}

/// The behavior of the cursor.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[derive(serde::Deserialize, serde::Serialize)]
#[derive(displaydoc::Display)]
#[serde(rename_all = "lowercase")]
pub enum CursorMode {
    /// blink
    #[default]
    Blink,
    /// static
    Static,
    /// hidden
    Hidden,
}
