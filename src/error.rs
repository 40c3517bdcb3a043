use std::fmt;

/// Errors that can occur when measuring encoded input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// Input bytes are not valid UTF-8
    InvalidUtf8 {
        /// Length of the valid prefix, in bytes
        valid_up_to: usize,
    },
}

impl fmt::Display for WidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthError::InvalidUtf8 { valid_up_to } => {
                write!(f, "Invalid UTF-8 after {} bytes", valid_up_to)
            }
        }
    }
}

impl std::error::Error for WidthError {}
