use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Rejected before contacting the provider.
    InvalidInput,
    ProviderError,
    EmptyResponse,
}

/// Result of one gateway call. Failures carry a message that is safe to show
/// to end users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success { text: String },
    Failure { kind: FailureKind, message: String },
}

impl GenerationOutcome {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success { text: text.into() }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            kind,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InvalidInput => "invalid_input",
            Self::ProviderError => "provider_error",
            Self::EmptyResponse => "empty_response",
        };
        f.write_str(name)
    }
}
