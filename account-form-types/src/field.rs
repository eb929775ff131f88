use std::fmt;
use std::str::FromStr;

use crate::FormError;

/// One of the four inputs of the registration form.
///
/// Variants are declared in form order, so ordered collections keyed by
/// `Field` iterate the way the form renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    FavLanguage,
    FavFood,
    Agreement,
}

/// The kind of value a field holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, radio or select values.
    Text,
    /// A checkbox.
    Checkbox,
}

impl FieldKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Checkbox => "Checked",
        }
    }
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Field; 4] = [
        Field::Username,
        Field::FavLanguage,
        Field::FavFood,
        Field::Agreement,
    ];

    /// The name used by the presentation layer, e.g. `"favLanguage"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::FavLanguage => "favLanguage",
            Self::FavFood => "favFood",
            Self::Agreement => "agreement",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Agreement => FieldKind::Checkbox,
            _ => FieldKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_wire_names() {
        assert_eq!("username".parse::<Field>().unwrap(), Field::Username);
        assert_eq!("favLanguage".parse::<Field>().unwrap(), Field::FavLanguage);
        assert_eq!("favFood".parse::<Field>().unwrap(), Field::FavFood);
        assert_eq!("agreement".parse::<Field>().unwrap(), Field::Agreement);
    }

    #[test]
    fn parse_is_case_sensitive() {
        let result = "FavFood".parse::<Field>();
        assert!(matches!(result, Err(FormError::UnknownField(name)) if name == "FavFood"));
    }

    #[test]
    fn display_matches_wire_name() {
        for field in Field::ALL {
            assert_eq!(field.to_string(), field.as_str());
        }
    }

    #[test]
    fn only_agreement_is_a_checkbox() {
        let checkboxes: Vec<_> = Field::ALL
            .into_iter()
            .filter(|f| f.kind() == FieldKind::Checkbox)
            .collect();
        assert_eq!(checkboxes, vec![Field::Agreement]);
    }
}
