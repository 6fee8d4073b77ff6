//! Error types for the toolkit functions.

/// Result type alias for toolkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while evaluating toolkit functions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A value could not be used as a length (not numeric, zero, or `auto`).
    #[error("Invalid value '{value}': {message}")]
    InvalidValue { value: String, message: String },

    /// The effective base pixel size was zero.
    #[error("Division by zero: base pixel size must be non-zero")]
    DivisionByZero,

    /// A function argument had the wrong node shape.
    #[error("Invalid argument to '{function}': {message}")]
    InvalidArgument { function: String, message: String },

    /// No function is registered under this name.
    #[error("Unknown function '{0}'")]
    UnknownFunction(String),

    /// A function was called with the wrong number of arguments.
    #[error("Function '{name}' expects {expected} argument(s), found {found}")]
    Arity {
        name: String,
        expected: String,
        found: usize,
    },

    /// A configuration option could not be applied.
    #[error("Invalid option '{option}': {message}")]
    InvalidOption { option: String, message: String },
}

impl Error {
    /// Create a value error.
    pub fn invalid_value(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create an argument error.
    pub fn invalid_argument(function: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function: function.into(),
            message: message.into(),
        }
    }

    /// Create an option error.
    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }
}
