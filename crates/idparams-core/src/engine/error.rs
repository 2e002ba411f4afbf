use std::fmt;
use thiserror::Error;

use crate::core::models::general::ConfigError;
use crate::core::options::raw::ConversionError;
use crate::core::options::validators::ValidationError;

/// Classification of a refused invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No output path, no database path, or no options at all.
    MissingMandatoryOption,
    /// An enzyme or modification name the catalogs do not know.
    UnresolvableReference,
    /// A value that does not parse as the expected integer, double or flag.
    TypeMismatch,
    /// A well-formed value outside its numeric bounds or allowed set.
    OutOfRange,
    /// A database path that does not exist.
    FileNotFound,
}

/// The validation pass that refused the options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    General,
    Modifications,
    Options,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::General => f.write_str("general settings"),
            Stage::Modifications => f.write_str("modifications"),
            Stage::Options => f.write_str("option values"),
        }
    }
}

/// One human-readable finding, tied to the option it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub kind: ErrorKind,
    pub option: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, option: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            option: option.into(),
            message: message.into(),
        }
    }
}

impl From<ValidationError> for Diagnostic {
    fn from(error: ValidationError) -> Self {
        let kind = if error.violation.is_type_mismatch() {
            ErrorKind::TypeMismatch
        } else {
            ErrorKind::OutOfRange
        };
        let message = error.to_string();
        Self {
            kind,
            option: error.option,
            message,
        }
    }
}

/// The refusal of a whole invocation. Holds at least one diagnostic; more only
/// when every option failure is being collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    stage: Stage,
    diagnostics: Vec<Diagnostic>,
}

impl Rejection {
    pub(crate) fn single(stage: Stage, diagnostic: Diagnostic) -> Self {
        Self {
            stage,
            diagnostics: vec![diagnostic],
        }
    }

    /// Returns `None` when there is nothing to reject.
    pub(crate) fn collect(stage: Stage, diagnostics: Vec<Diagnostic>) -> Option<Self> {
        if diagnostics.is_empty() {
            None
        } else {
            Some(Self { stage, diagnostics })
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The kind of the first diagnostic.
    pub fn kind(&self) -> ErrorKind {
        self.first().kind
    }

    pub fn first(&self) -> &Diagnostic {
        &self.diagnostics[0]
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, diagnostic) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", diagnostic)?;
        }
        Ok(())
    }
}

impl std::error::Error for Rejection {}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{0}")]
    Rejected(#[from] Rejection),

    #[error("Binding failed for a validated option: {0}")]
    Binding(#[from] ConversionError),

    #[error("Incomplete general parameters: {0}")]
    Model(#[from] ConfigError),

    #[error("Internal logic error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            EngineError::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::options::validators::Violation;

    #[test]
    fn validation_errors_map_to_taxonomy() {
        let mismatch: Diagnostic = ValidationError::new("mc", Violation::NotAnInteger).into();
        assert_eq!(mismatch.kind, ErrorKind::TypeMismatch);
        assert_eq!(mismatch.message, "Error parsing the mc option: Not an integer value!");

        let range: Diagnostic = ValidationError::new("mc", Violation::Negative).into();
        assert_eq!(range.kind, ErrorKind::OutOfRange);
        assert_eq!(range.option, "mc");
    }

    #[test]
    fn rejection_displays_every_diagnostic_on_its_own_line() {
        let rejection = Rejection::collect(
            Stage::Options,
            vec![
                Diagnostic::new(ErrorKind::OutOfRange, "a", "first"),
                Diagnostic::new(ErrorKind::TypeMismatch, "b", "second"),
            ],
        )
        .unwrap();
        assert_eq!(rejection.to_string(), "first\nsecond");
        assert_eq!(rejection.kind(), ErrorKind::OutOfRange);
        assert!(Rejection::collect(Stage::Options, Vec::new()).is_none());
    }
}
