//! Inference orchestration: represent → classify → explain → assemble.

mod engine;

pub use engine::{InferenceResult, InferenceService, TextVerdict, UrlVerdict};
