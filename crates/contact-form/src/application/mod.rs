pub mod api;
pub mod form;

pub use api::{ContactApi, SubmitError};
pub use form::{ContactForm, FormStatus, Notice};
