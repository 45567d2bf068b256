use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;

/// Writer that appends formatted log lines to a shared buffer
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` under a fmt subscriber and return everything it logged
pub(crate) fn capture_logs(f: impl FnOnce()) -> String {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, f);

    let bytes = buf.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
