//! Loads the three serving artifacts once at startup. Any missing or invalid
//! artifact is fatal; there is no degraded mode.

use super::{Classifier, LogisticRegression, RandomForest, SparseVector, TfidfVectorizer};
use crate::error::ModelError;
use crate::features::URL_FEATURE_DIM;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use std::path::Path;
use tracing::info;

pub const URL_MODEL_FILE: &str = "url_model.json";
pub const TEXT_MODEL_FILE: &str = "text_model.json";
pub const TEXT_VECTORIZER_FILE: &str = "text_vectorizer.json";

/// URL model families, tagged by `"kind"` in the artifact.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UrlClassifier {
    RandomForest(RandomForest),
    LogisticRegression(LogisticRegression),
}

impl UrlClassifier {
    pub fn n_features(&self) -> usize {
        match self {
            UrlClassifier::RandomForest(m) => m.n_features(),
            UrlClassifier::LogisticRegression(m) => m.n_features(),
        }
    }
}

impl Classifier<[f64]> for UrlClassifier {
    fn predict(&self, x: &[f64]) -> Result<u8, ModelError> {
        match self {
            UrlClassifier::RandomForest(m) => m.predict(x),
            UrlClassifier::LogisticRegression(m) => Classifier::<[f64]>::predict(m, x),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextClassifier {
    LogisticRegression(LogisticRegression),
}

impl TextClassifier {
    pub fn n_features(&self) -> usize {
        match self {
            TextClassifier::LogisticRegression(m) => m.n_features(),
        }
    }
}

impl Classifier<SparseVector> for TextClassifier {
    fn predict(&self, x: &SparseVector) -> Result<u8, ModelError> {
        match self {
            TextClassifier::LogisticRegression(m) => Classifier::<SparseVector>::predict(m, x),
        }
    }
}

/// Read-only serving context, built once and shared by every request.
pub struct ModelBundle {
    url: Box<dyn Classifier<[f64]>>,
    text: Box<dyn Classifier<SparseVector>>,
    vectorizer: TfidfVectorizer,
}

impl std::fmt::Debug for ModelBundle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelBundle")
            .field("text_dim", &self.vectorizer.dim())
            .finish_non_exhaustive()
    }
}

fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let artifact = serde_json::from_slice(&bytes).map_err(|source| ModelError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let digest = Sha256::digest(&bytes);
    info!(path = %path.display(), sha256 = %format!("{:x}", digest), "model artifact loaded");
    Ok(artifact)
}

impl ModelBundle {
    /// Load url_model.json, text_model.json and text_vectorizer.json from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ModelError> {
        let url: UrlClassifier = load_artifact(&dir.join(URL_MODEL_FILE))?;
        let text: TextClassifier = load_artifact(&dir.join(TEXT_MODEL_FILE))?;
        let vectorizer: TfidfVectorizer = load_artifact(&dir.join(TEXT_VECTORIZER_FILE))?;

        if url.n_features() != URL_FEATURE_DIM {
            return Err(ModelError::Invalid(format!(
                "url model expects {} features, extractor produces {}",
                url.n_features(),
                URL_FEATURE_DIM
            )));
        }
        if text.n_features() != vectorizer.dim() {
            return Err(ModelError::Invalid(format!(
                "text model expects {} features, vectorizer produces {}",
                text.n_features(),
                vectorizer.dim()
            )));
        }

        Ok(Self::from_parts(url, text, vectorizer))
    }

    /// Assemble from already constructed parts (no width checks).
    pub fn from_parts(
        url: impl Classifier<[f64]> + 'static,
        text: impl Classifier<SparseVector> + 'static,
        vectorizer: TfidfVectorizer,
    ) -> Self {
        Self {
            url: Box::new(url),
            text: Box::new(text),
            vectorizer,
        }
    }

    pub fn url_classifier(&self) -> &dyn Classifier<[f64]> {
        self.url.as_ref()
    }

    pub fn text_classifier(&self) -> &dyn Classifier<SparseVector> {
        self.text.as_ref()
    }

    pub fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }
}
