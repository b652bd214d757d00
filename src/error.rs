//! Error taxonomy.
//!
//! Only two interactions fail hard: an uncontrolled input change without a
//! target, and a multi-select whose value is not a collection. Everything else
//! is development-time misuse, reported through [`warn_misuse`] and otherwise
//! ignored.

use thiserror::Error;

/// Errors surfaced by sui-tui.
#[derive(Debug, Error)]
pub enum SuiError {
    /// An uncontrolled input received a change without a resolvable target.
    #[error("expected a valid input target; a custom input component must forward its target")]
    MissingInputTarget,

    /// `multiple` select whose value is a single value.
    #[error("the value of select{} must be a collection when `multiple` is set", name_suffix(.name))]
    MultipleValueNotArray { name: Option<String> },

    /// Terminal I/O failure.
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
}

fn name_suffix(name: &Option<String>) -> String {
    match name {
        Some(name) => format!(" (name=\"{name}\")"),
        None => String::new(),
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SuiError>;

/// Report a development-time misuse (bad child, out-of-range value).
pub fn warn_misuse(component: &str, message: &str) {
    tracing::warn!(component, "{message}");
}

/// Run `f` under a warn-level subscriber and return what it logged.
#[cfg(test)]
pub(crate) fn capture_warnings<R>(f: impl FnOnce() -> R) -> (R, String) {
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("poisoned log buffer"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("warn"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();

    let result = tracing::subscriber::with_default(subscriber, f);
    let logged = captured
        .0
        .lock()
        .map(|buf| String::from_utf8_lossy(&buf).into_owned())
        .unwrap_or_default();
    (result, logged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SuiError::MultipleValueNotArray { name: Some("fruit".into()) };
        assert_eq!(
            err.to_string(),
            "the value of select (name=\"fruit\") must be a collection when `multiple` is set"
        );

        let err = SuiError::MultipleValueNotArray { name: None };
        assert_eq!(
            err.to_string(),
            "the value of select must be a collection when `multiple` is set"
        );
    }

    #[test]
    fn test_warn_misuse_names_component() {
        let ((), logged) = capture_warnings(|| warn_misuse("Select", "bad value"));
        assert!(logged.contains("WARN"));
        assert!(logged.contains("bad value"));
        assert!(logged.contains("component") && logged.contains("Select"));

        let ((), quiet) = capture_warnings(|| tracing::debug!("not captured"));
        assert!(quiet.is_empty());
    }

    #[test]
    fn test_io_from() {
        let err: SuiError = std::io::Error::other("boom").into();
        assert!(matches!(err, SuiError::Io(_)));
    }
}
