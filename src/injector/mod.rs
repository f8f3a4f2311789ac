mod inject;
pub(in crate::injector) mod record_pattern;

pub use inject::{InjectError, InjectReport, inject};
