use thiserror::Error;

/// Errors raised by the fallible helpers around [`ResultEnvelope`].
///
/// Constructing an envelope never fails; only lookups, the JSON wire helpers
/// and [`ResultEnvelope::into_result`] return this type.
///
/// [`ResultEnvelope`]: crate::domain::ResultEnvelope
/// [`ResultEnvelope::into_result`]: crate::domain::ResultEnvelope::into_result
#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("unknown status code={0}")]
    UnknownStatusCode(i32),

    #[error("encode envelope: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("decode envelope: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("envelope reported failure code={code}: {message}")]
    Failure { code: i32, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_display_includes_code_and_message() {
        let e = EnvelopeError::Failure {
            code: 404,
            message: "not found".to_string(),
        };
        assert_eq!(e.to_string(), "envelope reported failure code=404: not found");
    }

    #[test]
    fn unknown_status_display() {
        assert_eq!(EnvelopeError::UnknownStatusCode(7).to_string(), "unknown status code=7");
    }

    #[test]
    fn decode_error_keeps_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let e = EnvelopeError::Decode(source);
        assert!(e.to_string().starts_with("decode envelope: "));
        assert!(e.source().is_some());
    }
}
