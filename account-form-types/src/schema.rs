use crate::{Field, FieldValue, Food, FormState, Language, ValidationError, ValidationErrors};

/// Maximum username length accepted by the registration schema.
pub const USERNAME_MAX: usize = 20;

/// Minimum username length accepted by the registration schema.
pub const USERNAME_MIN: usize = 3;

/// A single constraint on a field value.
///
/// Each rule carries the error it reports. Lengths count characters, not
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-empty.
    Required(ValidationError),

    /// Text must have at least this many characters.
    MinLength(usize, ValidationError),

    /// Text must have at most this many characters.
    MaxLength(usize, ValidationError),

    /// Text must equal one of the choices.
    OneOf(&'static [&'static str], ValidationError),

    /// Checkbox must be checked.
    Accepted(ValidationError),
}

impl Rule {
    pub fn error(&self) -> ValidationError {
        match self {
            Self::Required(error)
            | Self::MinLength(_, error)
            | Self::MaxLength(_, error)
            | Self::OneOf(_, error)
            | Self::Accepted(error) => *error,
        }
    }

    /// Check a value, returning the rule's error if it is violated.
    ///
    /// A value of a kind the rule does not apply to passes.
    pub fn check(&self, value: &FieldValue) -> Option<ValidationError> {
        let passes = match (self, value) {
            (Self::Required(_), FieldValue::Text(text)) => !text.is_empty(),
            (Self::Required(_), FieldValue::Checked(_)) => true,
            (Self::MinLength(min, _), FieldValue::Text(text)) => text.chars().count() >= *min,
            (Self::MaxLength(max, _), FieldValue::Text(text)) => text.chars().count() <= *max,
            (Self::OneOf(choices, _), FieldValue::Text(text)) => choices.contains(&text.as_str()),
            (Self::Accepted(_), FieldValue::Checked(checked)) => *checked,
            _ => true,
        };

        (!passes).then(|| self.error())
    }
}

/// The ordered rule chain of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub field: Field,
    pub rules: Vec<Rule>,
}

impl FieldRules {
    /// The first violated rule, in declared order.
    ///
    /// A value of the wrong kind for the field counts as missing and is
    /// reported with the chain's first error, the field's "required" message.
    pub fn check(&self, value: &FieldValue) -> Option<ValidationError> {
        if value.kind() != self.field.kind() {
            return self.rules.first().map(Rule::error);
        }
        self.rules.iter().find_map(|rule| rule.check(value))
    }
}

/// A declarative validation schema: rule chains per field.
///
/// Every field is checked, and each failing field reports only its first
/// violated rule.
///
/// ```
/// use account_form_types::{Field, FormState, Rule, Schema, ValidationError};
///
/// let schema = Schema::new().field(
///     Field::Username,
///     [Rule::Required(ValidationError::UsernameRequired)],
/// );
///
/// let errors = schema.validate(&FormState::default());
/// assert_eq!(errors.get(Field::Username), Some(ValidationError::UsernameRequired));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    /// Create an empty schema that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// The schema of the "Create an Account" form.
    pub fn registration() -> Self {
        use ValidationError::*;

        Self::new()
            .field(
                Field::Username,
                [
                    Rule::Required(UsernameRequired),
                    Rule::MinLength(USERNAME_MIN, UsernameMin),
                    Rule::MaxLength(USERNAME_MAX, UsernameMax),
                ],
            )
            .field(
                Field::FavLanguage,
                [
                    Rule::Required(FavLanguageRequired),
                    Rule::OneOf(Language::CHOICES, FavLanguageOptions),
                ],
            )
            .field(
                Field::FavFood,
                [
                    Rule::Required(FavFoodRequired),
                    Rule::OneOf(Food::CHOICES, FavFoodOptions),
                ],
            )
            .field(
                Field::Agreement,
                [Rule::Required(AgreementRequired), Rule::Accepted(AgreementOptions)],
            )
    }

    /// Append rules for a field. Rules for a field already in the schema are
    /// added to the end of its chain.
    pub fn field(mut self, field: Field, rules: impl IntoIterator<Item = Rule>) -> Self {
        match self.fields.iter_mut().find(|entry| entry.field == field) {
            Some(entry) => entry.rules.extend(rules),
            None => self.fields.push(FieldRules {
                field,
                rules: rules.into_iter().collect(),
            }),
        }
        self
    }

    /// Get the rule chains, in declared order.
    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Get the rule chain of one field.
    pub fn rules_for(&self, field: Field) -> Option<&FieldRules> {
        self.fields.iter().find(|entry| entry.field == field)
    }

    /// Check a single value against the rules of its field.
    pub fn validate_field(&self, field: Field, value: &FieldValue) -> Result<(), ValidationError> {
        match self.rules_for(field).and_then(|rules| rules.check(value)) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Validate a whole form.
    pub fn validate(&self, state: &FormState) -> ValidationErrors {
        self.fields
            .iter()
            .filter_map(|rules| {
                rules
                    .check(&state.get(rules.field))
                    .map(|error| (rules.field, error))
            })
            .collect()
    }
}
