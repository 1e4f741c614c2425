//! Error types for the Translator

use thiserror::Error;

/// Errors that can occur while orchestrating a translation
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// A context completion was requested before any assistant reply exists
    #[error("nothing to complete yet")]
    NothingToComplete,

    /// The last assistant reply is not valid JSON
    #[error("assistant reply is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Completion client failure, surfaced with the original error as source
    #[error("transport error")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_from_serde() {
        let parse_failure = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error: TranslatorError = parse_failure.into();
        assert!(matches!(error, TranslatorError::Parse(_)));
    }

    #[test]
    fn test_transport_preserves_source() {
        let source = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer hung up");
        let error = TranslatorError::Transport(Box::new(source));

        let source = std::error::Error::source(&error).expect("source must be preserved");
        assert!(source.to_string().contains("peer hung up"));
    }
}
