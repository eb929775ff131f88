use crate::FieldKind;

/// A raw value coming from an input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text from a text box, radio button or select.
    Text(String),

    /// Checked state of a checkbox.
    Checked(bool),
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as a checkbox state.
    pub fn as_checked(&self) -> Option<bool> {
        match self {
            Self::Checked(b) => Some(*b),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Checked(_) => FieldKind::Checkbox,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Checked(b)
    }
}
