use thiserror::Error;

/// Result type alias using DifferError
pub type Result<T> = std::result::Result<T, DifferError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// The comparison operations themselves are total; these kinds classify the
/// failures of the surrounding surface (property-bag ingestion and
/// serialization). Each kind maps to a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Input bytes are not valid UTF-8 or not valid JSON
    InvalidInput,
    /// A value could not be serialized
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation
/// and message for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Failures of the property-bag surface
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DifferError {
    #[error("Input is not valid UTF-8: {reason}")]
    InvalidUtf8 { reason: String },

    #[error("Input is not valid JSON: {reason}")]
    InvalidJson { reason: String },

    #[error("Failed to serialize props: {reason}")]
    Serialization { reason: String },
}

impl DifferError {
    pub fn kind(&self) -> ExErrorKind {
        match self {
            DifferError::InvalidUtf8 { .. } | DifferError::InvalidJson { .. } => {
                ExErrorKind::InvalidInput
            }
            DifferError::Serialization { .. } => ExErrorKind::Serialization,
        }
    }
}

impl From<DifferError> for ExError {
    fn from(err: DifferError) -> Self {
        ExError::new(err.kind()).with_message(err.to_string())
    }
}
