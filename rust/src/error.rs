//! Error handling and result types for BTree operations.
//!
//! Looking up or removing a missing value is not an error; those operations
//! report absence through `bool` or `Option`. The errors here cover bad
//! construction parameters, bad buffer arguments, and integrity failures
//! reported by the validation helpers.

/// Error type for B-tree operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BTreeError {
    /// Invalid order specified at construction.
    InvalidOrder(String),
    /// An argument failed its precondition.
    InvalidArgument(String),
    /// Internal data structure integrity violation.
    DataIntegrityError(String),
}

impl BTreeError {
    /// Create an InvalidOrder error with context
    pub fn invalid_order(order: usize, min_required: usize) -> Self {
        Self::InvalidOrder(format!(
            "Order {} is invalid (minimum required: {})",
            order, min_required
        ))
    }

    /// Create an InvalidArgument error naming the offending parameter
    pub fn invalid_argument(parameter: &str, details: &str) -> Self {
        Self::InvalidArgument(format!("{}: {}", parameter, details))
    }

    /// Create a DataIntegrityError with context
    pub fn data_integrity(context: &str, details: &str) -> Self {
        Self::DataIntegrityError(format!("{}: {}", context, details))
    }

    /// Check if this error is an order error
    pub fn is_order_error(&self) -> bool {
        matches!(self, Self::InvalidOrder(_))
    }

    /// Check if this error is an argument error
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl std::fmt::Display for BTreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BTreeError::InvalidOrder(msg) => write!(f, "Invalid order: {}", msg),
            BTreeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            BTreeError::DataIntegrityError(msg) => write!(f, "Data integrity error: {}", msg),
        }
    }
}

impl std::error::Error for BTreeError {}

/// Public result type for tree operations that may fail
pub type BTreeResult<T> = Result<T, BTreeError>;

/// Result type for tree construction
pub type InitResult<T> = BTreeResult<T>;
