//! Helper functions for creating specific error types

use super::types::HomeserveError;

impl HomeserveError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn parsing<S: Into<String>>(message: S) -> Self {
        Self::Parsing(message.into())
    }

    /// Whether the error was caused by bad input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::Parsing(_)
                | Self::NotFound(_)
                | Self::Serialization(_)
                | Self::Yaml(_)
        )
    }
}
