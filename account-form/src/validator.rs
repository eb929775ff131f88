use std::sync::LazyLock;

use crate::{FormState, Schema, ValidationErrors};

static REGISTRATION: LazyLock<Schema> = LazyLock::new(Schema::registration);

/// Validate a form against the registration schema.
///
/// Pure and deterministic: every field is checked and each failing field
/// reports its first violated rule. An empty result means the form is valid.
///
/// ```
/// use account_form::{Field, FormState, ValidationError, validate};
///
/// let state = FormState {
///     username: "ab".to_string(),
///     fav_food: "pizza".to_string(),
///     agreement: true,
///     ..FormState::default()
/// };
///
/// let errors = validate(&state);
/// assert_eq!(errors.get(Field::Username), Some(ValidationError::UsernameMin));
/// assert_eq!(errors.get(Field::FavLanguage), Some(ValidationError::FavLanguageRequired));
/// assert_eq!(errors.len(), 2);
/// ```
pub fn validate(state: &FormState) -> ValidationErrors {
    REGISTRATION.validate(state)
}

/// The registration schema shared by [`validate`].
pub fn registration_schema() -> &'static Schema {
    &REGISTRATION
}
