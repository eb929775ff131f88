use std::collections::BTreeMap;

use crate::Field;

/// A single inline message shown next to a failing field.
///
/// The `Display` output is the user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("username is required")]
    UsernameRequired,

    #[error("username must be at least 3 characters")]
    UsernameMin,

    #[error("username cannot exceed 20 characters")]
    UsernameMax,

    #[error("favLanguage is required")]
    FavLanguageRequired,

    #[error("favLanguage must be either javascript or rust")]
    FavLanguageOptions,

    #[error("favFood is required")]
    FavFoodRequired,

    #[error("favFood must be either broccoli, spaghetti, or pizza")]
    FavFoodOptions,

    #[error("agreement is required")]
    AgreementRequired,

    #[error("agreement must be accepted")]
    AgreementOptions,
}

impl ValidationError {
    /// Stable camelCase key of this message, e.g. `"usernameMin"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::UsernameRequired => "usernameRequired",
            Self::UsernameMin => "usernameMin",
            Self::UsernameMax => "usernameMax",
            Self::FavLanguageRequired => "favLanguageRequired",
            Self::FavLanguageOptions => "favLanguageOptions",
            Self::FavFoodRequired => "favFoodRequired",
            Self::FavFoodOptions => "favFoodOptions",
            Self::AgreementRequired => "agreementRequired",
            Self::AgreementOptions => "agreementOptions",
        }
    }
}

/// The active error for every currently failing field.
///
/// A field without an entry is valid. An empty collection means the whole
/// form is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<Field, ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the error for a field, replacing any previous one.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }

    /// Field name to message text, the shape a presentation layer renders.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(field, error)| (field.as_str(), error.to_string()))
            .collect()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl FromIterator<(Field, ValidationError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (Field, ValidationError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = (&'a Field, &'a ValidationError);
    type IntoIter = std::collections::btree_map::Iter<'a, Field, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
