use std::fmt;
use std::str::FromStr;

use crate::{Field, FieldValue, FormError};

/// Favourite language choices offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Rust,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::Rust];

    /// Accepted raw values, in the order the form offers them.
    pub const CHOICES: &'static [&'static str] = &["javascript", "rust"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Rust => "rust",
        }
    }
}

/// Favourite food choices offered by the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Food {
    Broccoli,
    Spaghetti,
    Pizza,
}

impl Food {
    pub const ALL: [Food; 3] = [Food::Broccoli, Food::Spaghetti, Food::Pizza];

    /// Accepted raw values, in the order the form offers them.
    pub const CHOICES: &'static [&'static str] = &["broccoli", "spaghetti", "pizza"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Broccoli => "broccoli",
            Self::Spaghetti => "spaghetti",
            Self::Pizza => "pizza",
        }
    }
}

macro_rules! choice_str_impls {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::ALL.into_iter().find(|c| c.as_str() == s).ok_or(())
            }
        }
    };
}

choice_str_impls!(Language);
choice_str_impls!(Food);

/// Snapshot of every value entered into the registration form.
///
/// All four fields are always present. Selections are kept as raw text so
/// that an empty or unknown choice can still be represented and reported by
/// the validator; use [`FormState::language`] and [`FormState::food`] for the
/// parsed values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub username: String,
    pub fav_language: String,
    pub fav_food: String,
    pub agreement: bool,
}

impl FormState {
    /// The empty form shown at mount and after a successful submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value of a field.
    pub fn get(&self, field: Field) -> FieldValue {
        match field {
            Field::Username => FieldValue::Text(self.username.clone()),
            Field::FavLanguage => FieldValue::Text(self.fav_language.clone()),
            Field::FavFood => FieldValue::Text(self.fav_food.clone()),
            Field::Agreement => FieldValue::Checked(self.agreement),
        }
    }

    /// Get the text of a text field. Returns `None` for the checkbox.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => Some(&self.username),
            Field::FavLanguage => Some(&self.fav_language),
            Field::FavFood => Some(&self.fav_food),
            Field::Agreement => None,
        }
    }

    /// Return a copy of this state with `value` merged into `field`.
    ///
    /// `self` is left untouched, including when the value has the wrong kind.
    pub fn with(&self, field: Field, value: FieldValue) -> Result<Self, FormError> {
        let mut next = self.clone();
        next.set(field, value)?;
        Ok(next)
    }

    /// Replace the value of a field in place.
    pub fn set(&mut self, field: Field, value: FieldValue) -> Result<(), FormError> {
        match (field, value) {
            (Field::Username, FieldValue::Text(text)) => self.username = text,
            (Field::FavLanguage, FieldValue::Text(text)) => self.fav_language = text,
            (Field::FavFood, FieldValue::Text(text)) => self.fav_food = text,
            (Field::Agreement, FieldValue::Checked(checked)) => self.agreement = checked,
            (field, value) => {
                return Err(FormError::TypeMismatch {
                    field,
                    expected: field.kind().name(),
                    actual: value.type_name(),
                });
            }
        }
        Ok(())
    }

    /// The chosen language, if the raw value is one of the offered choices.
    pub fn language(&self) -> Option<Language> {
        self.fav_language.parse().ok()
    }

    /// The chosen food, if the raw value is one of the offered choices.
    pub fn food(&self) -> Option<Food> {
        self.fav_food.parse().ok()
    }

    /// Check if every field still holds its initial value.
    pub fn is_pristine(&self) -> bool {
        self == &Self::default()
    }
}
