use girder_core::GeomError;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Error, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordError {
    /// The supplied direction vectors cannot define a local frame:
    /// a direction is zero, or the two directions are parallel.
    #[error("Degenerate frame direction: {message}")]
    DegenerateDirection { message: String },
}

impl CoordError {
    pub fn degenerate_direction(message: impl Into<String>) -> Self {
        Self::DegenerateDirection {
            message: message.into(),
        }
    }
}

impl From<GeomError> for CoordError {
    fn from(error: GeomError) -> Self {
        match error {
            GeomError::DegenerateVector { message, .. } => {
                Self::DegenerateDirection { message }
            }
        }
    }
}
