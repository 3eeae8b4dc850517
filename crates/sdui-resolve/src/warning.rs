//! Non-fatal resolution diagnostics.
//!
//! A missing context key is graceful degradation, never a hard error: the
//! resolver falls back to the literal or to an empty result and records
//! what happened. Warnings are aggregated in document order and also
//! emitted as structured `tracing` events for diagnostics pipelines.

use std::fmt;

/// A recoverable problem observed during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// A binding or collection key was not found in the context.
    MissingContextKey {
        /// The key that failed to resolve.
        key: String,
    },
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingContextKey { key } => write!(f, "missing context key `{key}`"),
        }
    }
}

/// Collects warnings during a resolution pass.
///
/// Logging can be suppressed (bench runs, callers with their own
/// diagnostics) without affecting aggregation.
#[derive(Debug)]
pub(crate) struct Sink<'w> {
    warnings: &'w mut Vec<ResolutionWarning>,
    log: bool,
}

impl<'w> Sink<'w> {
    pub(crate) fn new(warnings: &'w mut Vec<ResolutionWarning>, log: bool) -> Self {
        Self { warnings, log }
    }

    pub(crate) fn missing_key(&mut self, key: &str) {
        if self.log {
            tracing::warn!(key = %key, "missing context key");
        }
        self.warnings.push(ResolutionWarning::MissingContextKey {
            key: key.to_owned(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_key() {
        let warning = ResolutionWarning::MissingContextKey {
            key: "greeting".into(),
        };
        assert_eq!(warning.to_string(), "missing context key `greeting`");
    }

    #[test]
    fn sink_aggregates_in_order() {
        let mut warnings = Vec::new();
        let mut sink = Sink::new(&mut warnings, false);
        sink.missing_key("a");
        sink.missing_key("b");
        assert_eq!(
            warnings,
            vec![
                ResolutionWarning::MissingContextKey { key: "a".into() },
                ResolutionWarning::MissingContextKey { key: "b".into() },
            ]
        );
    }
}
