//! # account-form
//!
//! Registration form state, validation and submission. Presentation-agnostic.
//!
//! The form has four fields: `username`, `favLanguage`, `favFood` and
//! `agreement`. A [`FormController`] owns the entered values, revalidates
//! them after every input event and runs the submission through a
//! [`Submitter`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use account_form::{Field, FormController, SimulatedSubmitter};
//!
//! let mut form = FormController::new(SimulatedSubmitter::new());
//!
//! form.on_input("username", "bob")?;
//! form.on_input("favLanguage", "rust")?;
//! form.on_input("favFood", "pizza")?;
//! form.on_input("agreement", true)?;
//!
//! // Render form.errors() next to each field and enable the submit
//! // button only while form.can_submit() holds.
//! if form.can_submit() {
//!     let welcome = form.submit().await?;
//!     println!("{welcome}");
//! }
//! ```
//!
//! ## Validation rules
//!
//! - `username` - required, 3 to 20 characters
//! - `favLanguage` - required, `javascript` or `rust`
//! - `favFood` - required, `broccoli`, `spaghetti` or `pizza`
//! - `agreement` - must be checked
//!
//! Each failing field reports only its first violated rule.
//!
//! ## Submitters
//!
//! - [`SimulatedSubmitter`] - waits one second, then accepts
//! - [`TestSubmitter`] - scripted outcomes for tests
//!
//! Anything implementing [`Submitter`] (e.g. a real HTTP client) can be used
//! instead without changing the controller.

// Re-export all types from account-form-types
pub use account_form_types::*;

mod validator;
pub use validator::{registration_schema, validate};

mod controller;
pub use controller::{FormController, FormSnapshot, PendingSubmission};

mod simulated;
pub use simulated::SimulatedSubmitter;

// Test submitter for running forms without a server
mod test_submitter;
pub use test_submitter::TestSubmitter;
