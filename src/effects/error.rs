//! Composition errors
//!
//! Both composition errors are local and recoverable: the failed operation
//! leaves pipeline state exactly as it was, and the caller corrects its
//! request and re-invokes. Runtime adapter failures pass through untouched
//! and are not retried.

use super::adapter::AdapterError;

/// Error type for pipeline composition
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    /// The requested kind is not in the effect catalog
    #[error("unknown effect kind: {id}")]
    UnknownEffectKind { id: String },
    /// The operation requires at least one staged effect
    ///
    /// The display text doubles as the user-visible notice shown when a
    /// caller inspects an empty pipeline.
    #[error("empty effect chain")]
    EmptyPipeline,
    /// The runtime adapter reported a failure
    #[error(transparent)]
    Adapter(#[from] AdapterError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EffectError::UnknownEffectKind {
            id: "not_a_real_effect".to_string(),
        };
        assert_eq!(err.to_string(), "unknown effect kind: not_a_real_effect");
        assert_eq!(EffectError::EmptyPipeline.to_string(), "empty effect chain");
    }

    #[test]
    fn test_adapter_error_converts() {
        let err: EffectError = AdapterError::new("pipeline rejected").into();
        assert_eq!(err.to_string(), "runtime adapter failure: pipeline rejected");
    }
}
