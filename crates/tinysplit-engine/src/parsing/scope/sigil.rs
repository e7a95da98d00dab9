use serde::Serialize;

/// The first non-blank character of a line, which selects the line's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sigil {
    /// `(` opens a block.
    Open,
    /// `)` closes the nearest open block.
    Close,
    /// `:` declares an attribute under the nearest scope.
    Attribute,
    /// `@` opens, replaces or ends a section.
    Section,
    /// Anything else: inert payload text.
    Text(char),
}

impl Sigil {
    pub const OPEN: char = '(';
    pub const CLOSE: char = ')';
    pub const ATTRIBUTE: char = ':';
    pub const SECTION: char = '@';

    pub fn from_char(c: char) -> Self {
        match c {
            Self::OPEN => Sigil::Open,
            Self::CLOSE => Sigil::Close,
            Self::ATTRIBUTE => Sigil::Attribute,
            Self::SECTION => Sigil::Section,
            other => Sigil::Text(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Sigil::Open => Self::OPEN,
            Sigil::Close => Self::CLOSE,
            Sigil::Attribute => Self::ATTRIBUTE,
            Sigil::Section => Self::SECTION,
            Sigil::Text(c) => c,
        }
    }

    /// Splits a trimmed, non-empty line into its sigil and payload.
    pub fn split(trimmed: &str) -> Option<(Sigil, &str)> {
        let mut chars = trimmed.chars();
        let first = chars.next()?;
        Some((Sigil::from_char(first), chars.as_str()))
    }

    pub fn is_structural(self) -> bool {
        !matches!(self, Sigil::Text(_))
    }
}

impl std::fmt::Display for Sigil {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
