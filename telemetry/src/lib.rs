mod environment;
mod tracing;

pub use crate::environment::Environment;
pub use crate::tracing::{LogFlusher, TracingError, init_test_tracing, init_tracing};
