//! Playground error types

use thiserror::Error;

/// Errors surfaced by the playground engine.
///
/// Only `NotEnoughPoints` can happen during normal interaction; the rest
/// guard settings that arrive from JSON or from the host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlaygroundError {
    /// Custom boundary with too few vertices
    #[error("need at least {need} points to create a boundary, got {got}")]
    NotEnoughPoints {
        /// Points collected
        got: usize,
        /// Points required
        need: usize,
    },

    /// Boundary finish requested outside drawing mode
    #[error("boundary drawing is not active")]
    NotDrawing,

    /// A shape or physics value outside its allowed range
    #[error("invalid setting {name} = {value}: {reason}")]
    InvalidSetting {
        name: &'static str,
        value: f32,
        reason: &'static str,
    },

    /// Color that is not `#RRGGBB` or `#RGB`
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Settings document failed to parse
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlaygroundError>;

impl From<serde_json::Error> for PlaygroundError {
    fn from(err: serde_json::Error) -> Self {
        PlaygroundError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_enough_points_message_is_user_readable() {
        let err = PlaygroundError::NotEnoughPoints { got: 2, need: 3 };
        assert_eq!(
            err.to_string(),
            "need at least 3 points to create a boundary, got 2"
        );
    }

    #[test]
    fn json_errors_become_config_errors() {
        let err: PlaygroundError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, PlaygroundError::Config(_)));
    }
}
