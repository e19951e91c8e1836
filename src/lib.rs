//! Phishing detector: classifies URLs and message text as phishing or
//! legitimate and attaches rule-based explanations.
//!
//! Modular structure:
//! - [`features`] - URL lexical/structural feature extraction
//! - [`model`] - Pre-fitted classifiers and TF-IDF vectorizer
//! - [`explain`] - Rule-based explanation engines
//! - [`service`] - Inference orchestration
//! - [`api`] - HTTP routes
//! - [`logging`] - Structured logging

pub mod api;
pub mod config;
pub mod error;
pub mod explain;
pub mod features;
pub mod logging;
pub mod model;
pub mod service;

pub use config::ServiceConfig;
pub use error::{ConfigError, ModelError, ServiceError};
pub use explain::{explain_text, explain_url, TextReason, UrlReason};
pub use features::{extract_url_features, ParsedUrl, UrlFeatureVector};
pub use logging::StructuredLogger;
pub use model::{Classifier, Label, ModelBundle};
pub use service::{InferenceResult, InferenceService};
