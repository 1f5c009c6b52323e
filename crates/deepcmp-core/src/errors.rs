use thiserror::Error;

/// Result type alias using the canonical structured error
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Comparison itself never fails. These kinds cover the boundaries around
/// it: turning JSON into comparable values, building regex values, reading
/// configuration and files. Each kind maps to a stable error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Conversion boundary
    /// A tagged JSON value or literal could not be turned into a comparable value
    InvalidInput,
    /// Regex flags are unknown or repeated
    InvalidRegex,

    // Integration/IO
    Serialization,
    Io,
    Config,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidRegex => "ERR_INVALID_REGEX",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Config => "ERR_CONFIG",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional
/// context: the operation that failed and the value path it failed at.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add value path context (where in the input the failure sits)
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the value path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
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
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised at the conversion and configuration boundaries
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeepCmpError {
    /// Regex flags contain an unknown or repeated flag
    #[error("Invalid regular expression flags '{flags}'")]
    InvalidRegexFlags { flags: String },

    /// A bigint literal is not a base-10 integer in range
    #[error("Invalid bigint literal '{literal}'")]
    InvalidBigInt { literal: String },

    /// A `$`-tagged JSON object has the wrong shape
    #[error("Malformed {tag} value at {path}: {reason}")]
    MalformedTag {
        tag: String,
        path: String,
        reason: String,
    },

    /// Input text is not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A configuration or input file could not be read
    #[error("Failed to read {path}: {message}")]
    FileRead { path: String, message: String },

    /// Configuration text is not valid
    #[error("Invalid configuration: {message}")]
    ConfigParse { message: String },
}

impl From<DeepCmpError> for ExError {
    fn from(err: DeepCmpError) -> Self {
        let message = err.to_string();
        match err {
            DeepCmpError::InvalidRegexFlags { .. } => ExError::new(ExErrorKind::InvalidRegex)
                .with_op("regex_new")
                .with_message(message),

            DeepCmpError::InvalidBigInt { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("bigint_parse")
                .with_message(message),

            DeepCmpError::MalformedTag { path, .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("from_json")
                .with_path(path)
                .with_message(message),

            DeepCmpError::Json { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("parse_json")
                .with_message(message),

            DeepCmpError::FileRead { .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_file")
                .with_message(message),

            DeepCmpError::ConfigParse { .. } => ExError::new(ExErrorKind::Config)
                .with_op("load_config")
                .with_message(message),
        }
    }
}
