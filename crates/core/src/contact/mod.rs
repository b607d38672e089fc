#![allow(missing_docs)]

//! Contact form: validation, message composition and the submit lifecycle.

pub mod form;
pub mod message;
pub mod validate;

pub use form::{ContactForm, FormPhase, ResetTimer, DEFAULT_RESET_DELAY};
pub use message::{format_message, DeepLink, Submission, DEFAULT_MESSAGING_BASE, NOT_PROVIDED};
pub use validate::{
    subject_label, validate, ContactFormInput, ContactPayload, Field, FormErrors,
    ValidationResult, SUBJECTS,
};
