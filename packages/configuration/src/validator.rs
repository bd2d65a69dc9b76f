//! Trait to validate semantic errors.
//!
//! Errors could involve more than one configuration option. Serde already
//! rejects values of the wrong type, this catches values that are well typed
//! but unusable.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SemanticValidationError {
    #[error("The refresh interval of the countup for `{selector}` must be a positive number of milliseconds.")]
    ZeroRefreshInterval { selector: String },

    #[error("Every countup needs a non-empty selector to find its targets.")]
    EmptySelector,
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
