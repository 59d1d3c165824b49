//! Error types for body calculations.
//!
//! The aggregators themselves are infallible over well-formed inputs; errors
//! come from wiring (missing collaborators, bad configuration) and from the
//! shape provider.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    /// Configuration failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A required collaborator was never supplied
    #[error("Missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    /// The shape provider could not produce a body
    #[error("Shape generation failed: {0}")]
    ShapeGeneration(String),

    /// Rotation speed of zero has no user-facing representation
    #[error("Rotation speed {0} cannot be converted to a readable value")]
    UndefinedRotationSpeed(f32),

    /// Layout references an organelle the registry does not know
    #[error("Unknown organelle: {0}")]
    UnknownOrganelle(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<CalcError>,
    },
}

/// Result type alias for calculation operations.
pub type Result<T> = std::result::Result<T, CalcError>;

impl CalcError {
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    #[must_use]
    pub fn shape_generation<S: Into<String>>(msg: S) -> Self {
        Self::ShapeGeneration(msg.into())
    }

    #[must_use]
    pub fn unknown_organelle<S: Into<String>>(id: S) -> Self {
        Self::UnknownOrganelle(id.into())
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<anyhow::Error> for CalcError {
    fn from(err: anyhow::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CalcError::MissingCollaborator("shape provider");
        assert_eq!(err.to_string(), "Missing collaborator: shape provider");
    }

    #[test]
    fn test_error_context() {
        let err = CalcError::shape_generation("empty polygon").with_context("building body");
        assert!(err.to_string().contains("building body"));
        assert!(err.to_string().contains("empty polygon"));
    }

    #[test]
    fn test_unknown_organelle() {
        let err = CalcError::unknown_organelle("thylakoid");
        assert_eq!(err.to_string(), "Unknown organelle: thylakoid");
    }

    #[test]
    fn test_from_anyhow() {
        let err: CalcError = anyhow::anyhow!("bad value").into();
        assert!(matches!(err, CalcError::InvalidConfig(_)));
    }
}
