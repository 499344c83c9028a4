use thiserror::Error;

/// The main error type for dashboard operations.
///
/// Every failure an action can hit falls in one of these buckets. The
/// controller logs them and abandons the action; none is fatal.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Network failure or a non-2xx response from the backend
    ///
    /// # Fields
    /// * `0` - A description of the failed exchange
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response body that could not be decoded into the expected shape
    ///
    /// # Fields
    /// * `0` - A description of the decoding failure
    #[error("Decoding error: {0}")]
    Decode(String),

    /// An element the action needs is not present in the document
    ///
    /// # Fields
    /// * `0` - The identifier of the missing element
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Represents validation failures with detailed context
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Specialized error type for validation failures.
///
/// This enum provides detailed context about why a validation
/// failed, including field-specific errors and format violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Represents a validation failure for a specific field
    ///
    /// # Fields
    /// * `field` - The name of the field that failed validation
    /// * `message` - A detailed message about why validation failed
    #[error("Field '{field}' validation failed: {message}")]
    Field { field: String, message: String },

    /// Represents format/syntax validation failures
    #[error("Format error: {0}")]
    Format(String),

    /// Represents violations of domain constraints
    #[error("Domain constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Type alias for Results that may fail with a DashboardError
pub type DashboardResult<T> = Result<T, DashboardError>;
