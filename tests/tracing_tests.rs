//! Tests for the tracing events emitted by UniqueList.

use std::io;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use tracing_subscriber::EnvFilter;
use unique_list::{ListMode, UniqueList};

#[derive(Clone, Default)]
struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

impl CapturedOutput {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(filter: &str, body: F) -> String {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, body);
    output.contents()
}

#[rstest]
fn test_strict_rejection_logs_at_debug() {
    let logs = capture("unique_list=debug", || {
        let mut list = UniqueList::try_from_iter([1, 2], ListMode::strict()).unwrap();
        assert!(list.push(1).is_err());
    });
    assert!(logs.contains("rejecting duplicate value"), "{logs}");
    assert!(logs.contains("operation=\"push\""), "{logs}");
}

#[rstest]
fn test_lenient_drop_logs_at_trace_only() {
    let push_duplicate = || {
        let mut list: UniqueList<i32> = vec![1, 2].into();
        assert_eq!(list.push(1), Ok(false));
    };

    let debug_logs = capture("unique_list=debug", push_duplicate);
    assert!(!debug_logs.contains("dropping duplicate value"), "{debug_logs}");

    let trace_logs = capture("unique_list=trace", push_duplicate);
    assert!(trace_logs.contains("dropping duplicate value"), "{trace_logs}");
}

#[rstest]
fn test_fixed_length_rejection_logs() {
    let logs = capture("unique_list=debug", || {
        let mut list: UniqueList<i32> = UniqueList::empty();
        assert!(list.push(1).is_err());
    });
    assert!(logs.contains("fixed-length"), "{logs}");
}
