use crate::core::domain::error::{DashboardResult, ValidationError};
use std::fmt::Display;

/// A trait representing a domain value object with built-in validation.
///
/// Implementors hold an immutable, already-validated value. Construction
/// goes through [`ValueObject::new`], which runs [`ValueObject::validate`]
/// against the type's validation configuration first.
///
/// # Type Parameters
///
/// * `Value`: The underlying type of the value object
pub trait ValueObject: Sized {
    /// The underlying type of the value
    type Value: Clone + Display;

    /// The configuration type for validation
    type ValidationConfig;

    /// Returns a reference to the wrapped value
    fn value(&self) -> &Self::Value;

    /// Returns the validation configuration for the value object
    fn validation_config() -> Self::ValidationConfig;

    /// Validates the value according to domain rules
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation passes
    /// * `Err(ValidationError)` if validation fails
    fn validate(value: &Self::Value, config: &Self::ValidationConfig)
    -> Result<(), ValidationError>;

    /// Wraps a value without validating it
    fn create(value: Self::Value) -> Self;

    /// Creates a new validated instance
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` if validation succeeds
    /// * `Err(DashboardError::Validation)` otherwise
    fn new(value: Self::Value) -> DashboardResult<Self> {
        let config = Self::validation_config();
        Self::validate(&value, &config)?;
        Ok(Self::create(value))
    }
}
