use crate::Exception;

/// Operator-facing channel for exceptions no handler claimed
///
/// Injected into the dispatcher so the fallback path can be observed
/// without touching process-wide logging state.
pub trait DiagnosticSink: Send + Sync {
    fn unmatched(&self, exception: &Exception);
}

/// Logs unmatched exceptions through `tracing` with the full error chain
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn unmatched(&self, exception: &Exception) {
        tracing::error!(error = ?exception, "unhandled error reached the dispatcher");
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::ErrorDispatcher;

    /// Collects formatted log lines in memory
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        captured.contents()
    }

    #[test]
    fn logs_full_chain_at_error_level() {
        let exception = anyhow::anyhow!("connection refused").context("loading user");

        let output = capture(|| TracingSink.unmatched(&exception));

        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("unhandled error reached the dispatcher"), "{output}");
        assert!(output.contains("loading user"), "{output}");
        assert!(output.contains("connection refused"), "{output}");
    }

    #[test]
    fn dispatcher_defaults_to_tracing_sink() {
        let dispatcher = ErrorDispatcher::builder().build();
        let exception = anyhow::anyhow!("boom");

        let output = capture(|| {
            let record = dispatcher.get_error(&exception);
            assert_eq!(record.message, "boom");
        });

        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("boom"), "{output}");
    }
}
