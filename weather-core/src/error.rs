use thiserror::Error;

/// Rejected `lat`/`lon` input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("lat and lon arguments are required")]
    ArgsRequired,

    #[error("lat and lon arguments need to be valid float32s")]
    ArgsInvalidFloat,
}

/// Failure talking to the weather provider.
///
/// Variants that wrap a lower level error keep it reachable through
/// [`std::error::Error::source`].
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("building request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("making request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("reading response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    /// The provider answered with an error body it could describe.
    #[error("from weather API: {0}")]
    Upstream(String),

    /// The provider answered with an error body we could not decode. The raw
    /// body is deliberately not included.
    #[error("unable to decode the error message from a non-200 response")]
    UndecodableError,

    #[error("decoding API response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ProviderError {
    /// True when the outbound call gave up because of the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            ProviderError::Transport(e) | ProviderError::ReadBody(e) => e.is_timeout(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn validation_messages_are_stable() {
        assert_eq!(
            ValidationError::ArgsRequired.to_string(),
            "lat and lon arguments are required"
        );
        assert_eq!(
            ValidationError::ArgsInvalidFloat.to_string(),
            "lat and lon arguments need to be valid float32s"
        );
    }

    #[test]
    fn upstream_error_embeds_provider_message() {
        let err = ProviderError::Upstream("city not found".into());
        assert_eq!(err.to_string(), "from weather API: city not found");
        assert!(err.source().is_none());
    }

    #[test]
    fn decode_error_keeps_its_source() {
        let inner = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ProviderError::Decode(inner);

        assert!(err.to_string().starts_with("decoding API response: "));
        let source = err.source().expect("source must be kept");
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
        assert!(!err.is_timeout());
    }
}
