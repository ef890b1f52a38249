//! Model and validation wrappers for RESTful validation responses.
//!
//! A handler wraps its domain object in a [`ViewModel`], records one
//! [`ValidatedField`] per checked field and hands the result to
//! [`Response`], which serializes it and picks the HTTP status code.

pub mod error;
pub mod field;
pub mod response;
pub mod status;
pub mod view_model;

pub use error::ResponseError;
pub use field::ValidatedField;
pub use response::{JsonResponse, Response};
pub use status::{ParseStatusError, ValidationStatus};
pub use view_model::ViewModel;
