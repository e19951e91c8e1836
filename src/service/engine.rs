//! Runs the URL and text pipelines against a shared, read-only model bundle.
//! The two pipelines share nothing but the bundle; each request is stateless.

use crate::error::ServiceError;
use crate::explain::{explain_text, explain_url, render};
use crate::features::extract_url_features;
use crate::model::{Label, ModelBundle};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Verdict for one input. `explanation` is never empty and is derived from
/// the input alone, so it says nothing about `prediction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceResult {
    pub input: String,
    pub prediction: Label,
    pub explanation: Vec<String>,
}

/// Wire shape of a URL verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlVerdict {
    pub url: String,
    pub prediction: Label,
    pub explanation: Vec<String>,
}

/// Wire shape of a text verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextVerdict {
    pub text: String,
    pub prediction: Label,
    pub explanation: Vec<String>,
}

impl From<InferenceResult> for UrlVerdict {
    fn from(r: InferenceResult) -> Self {
        Self {
            url: r.input,
            prediction: r.prediction,
            explanation: r.explanation,
        }
    }
}

impl From<InferenceResult> for TextVerdict {
    fn from(r: InferenceResult) -> Self {
        Self {
            text: r.input,
            prediction: r.prediction,
            explanation: r.explanation,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InferenceService {
    models: Arc<ModelBundle>,
}

impl InferenceService {
    pub fn new(models: Arc<ModelBundle>) -> Self {
        Self { models }
    }

    pub fn models(&self) -> &ModelBundle {
        &self.models
    }

    /// Classify a URL. The input is echoed verbatim; only feature extraction trims it.
    pub fn check_url(&self, url: &str) -> Result<InferenceResult, ServiceError> {
        let features = extract_url_features(url);
        let class = self.models.url_classifier().predict(features.as_slice())?;
        let prediction = Label::from_class(class);
        let reasons = explain_url(url);
        debug!(prediction = prediction.as_str(), reasons = reasons.len(), "url checked");
        Ok(InferenceResult {
            input: url.to_string(),
            prediction,
            explanation: render(&reasons),
        })
    }

    /// Classify a message body.
    pub fn check_text(&self, text: &str) -> Result<InferenceResult, ServiceError> {
        let row = self.models.vectorizer().transform(text);
        let class = self.models.text_classifier().predict(&row)?;
        let prediction = Label::from_class(class);
        let reasons = explain_text(text);
        debug!(
            prediction = prediction.as_str(),
            terms = row.nnz(),
            reasons = reasons.len(),
            "text checked"
        );
        Ok(InferenceResult {
            input: text.to_string(),
            prediction,
            explanation: render(&reasons),
        })
    }
}
