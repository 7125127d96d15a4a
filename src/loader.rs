//! Fetch-or-fallback resolution for the content document.
//!
//! The network side lives in the wasm layer; this module owns the parse
//! boundary and the failover decision so both are testable on the host. From
//! the caller's perspective resolution never fails: any transport, status or
//! parse problem degrades to the embedded fallback with a warning.

use thiserror::Error;
use tracing::warn;

use crate::content::{fallback_document, ContentDocument};

/// Well-known relative location of the networked content document.
pub const CONTENT_URL: &str = "content.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport: {0}")]
    Transport(String),
    #[error("unexpected response status {0}")]
    Status(u16),
    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a raw response body, validating the document shape at the fetch
/// boundary. A body that does not match the typed model fails over to the
/// fallback the same way a transport error does.
pub fn parse_document(raw: &str) -> Result<ContentDocument, LoadError> {
    Ok(serde_json::from_str(raw)?)
}

/// Collapses a fetch outcome into a usable document. Binary decision: the
/// fetched document on success, the embedded fallback on any failure.
pub fn resolve(fetched: Result<ContentDocument, LoadError>) -> ContentDocument {
    match fetched {
        Ok(doc) => doc,
        Err(e) => {
            warn!("Failed to fetch {}, using embedded fallback: {}", CONTENT_URL, e);
            fallback_document()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_passes_through_a_fetched_document() {
        let mut doc = fallback_document();
        doc.global.copyright_year = "2031".to_string();
        let resolved = resolve(Ok(doc.clone()));
        assert_eq!(resolved, doc);
    }

    #[test]
    fn resolve_never_fails_and_substitutes_the_fallback() {
        for err in [
            LoadError::Transport("connection refused".to_string()),
            LoadError::Status(404),
            LoadError::Status(500),
        ] {
            let resolved = resolve(Err(err));
            assert_eq!(resolved, fallback_document());
        }
    }

    #[test]
    fn parse_failure_also_falls_back() {
        let fetched = parse_document("{ not json");
        assert!(matches!(&fetched, Err(LoadError::Parse(_))));
        assert_eq!(resolve(fetched), fallback_document());
    }

    #[test]
    fn parse_rejects_wrong_shape() {
        // Valid JSON, wrong shape: validation failure is a failover condition
        // too, not just transport errors.
        let fetched = parse_document(r#"{"global": {"instituteName": 7}}"#);
        assert!(matches!(fetched, Err(LoadError::Parse(_))));
    }

    #[test]
    fn fallback_round_trips_through_the_parse_boundary() {
        let doc = fallback_document();
        let raw = serde_json::to_string(&doc).expect("fallback serializes");
        let reparsed = parse_document(&raw).expect("fallback reparses");
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn fallback_warning_is_emitted_exactly_once() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Capture(Arc<Mutex<Vec<u8>>>);

        impl Write for Capture {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                self.0.lock().unwrap().extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for Capture {
            type Writer = Capture;
            fn make_writer(&'a self) -> Self::Writer {
                self.clone()
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .without_time()
            .with_ansi(false)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = resolve(Err(LoadError::Status(500)));
        });

        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged.matches("using embedded fallback").count(), 1);
    }

    #[test]
    fn load_error_messages_name_the_cause() {
        assert_eq!(
            LoadError::Status(503).to_string(),
            "unexpected response status 503"
        );
        assert!(LoadError::Transport("dns".to_string())
            .to_string()
            .contains("dns"));
    }
}
