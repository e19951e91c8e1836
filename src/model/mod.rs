//! Pre-fitted classifiers and the text vectorizer, loaded from JSON artifacts
//! produced by the offline training step.

mod bundle;
mod forest;
mod logistic;
mod tfidf;

pub use bundle::{
    ModelBundle, TextClassifier, UrlClassifier, TEXT_MODEL_FILE, TEXT_VECTORIZER_FILE,
    URL_MODEL_FILE,
};
pub use forest::{DecisionTree, RandomForest};
pub use logistic::LogisticRegression;
pub use tfidf::{Norm, SparseVector, TfidfVectorizer};

use crate::error::ModelError;
use serde::{Deserialize, Serialize};

/// A frozen binary classifier over representation `R`. Returns the class
/// label: 1 for phishing, 0 for legitimate.
pub trait Classifier<R: ?Sized>: Send + Sync {
    fn predict(&self, representation: &R) -> Result<u8, ModelError>;
}

/// Verdict derived from the classifier label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    Legitimate,
    Phishing,
}

impl Label {
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Label::Phishing
        } else {
            Label::Legitimate
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Legitimate => "legitimate",
            Label::Phishing => "phishing",
        }
    }
}

fn default_classes() -> Vec<u8> {
    vec![0, 1]
}

fn check_classes(classes: &[u8], n: usize) -> Result<(), ModelError> {
    if classes.len() != n {
        return Err(ModelError::Invalid(format!(
            "expected {} classes, found {}",
            n,
            classes.len()
        )));
    }
    if let Some(c) = classes.iter().find(|c| **c > 1) {
        return Err(ModelError::Invalid(format!("class label {} is not binary", c)));
    }
    Ok(())
}

fn check_width(expected: usize, got: usize) -> Result<(), ModelError> {
    if expected != got {
        return Err(ModelError::FeatureMismatch { expected, got });
    }
    Ok(())
}
