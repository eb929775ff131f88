//! Core types for the account-form crate.
//!
//! This crate provides the foundational types of the registration form:
//! - `FormState`, `Field` and `FieldValue` - Entered data and input events
//! - `Schema` and `Rule` - Declarative per-field validation
//! - `ValidationError` and `ValidationErrors` - Inline messages per field
//! - `Submitter` - The collaborator that creates the account

mod field;
pub use field::{Field, FieldKind};

mod field_value;
pub use field_value::FieldValue;

mod form_state;
pub use form_state::{Food, FormState, Language};

mod validation;
pub use validation::{ValidationError, ValidationErrors};

mod schema;
pub use schema::{FieldRules, Rule, Schema, USERNAME_MAX, USERNAME_MIN};

mod status;
pub use status::SubmissionStatus;

mod error;
pub use error::{FormError, SubmissionError};

mod traits;
pub use traits::{SubmissionResult, Submitter, Welcome};
