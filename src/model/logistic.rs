//! Binary logistic regression. Works on dense vectors (URL features) and on
//! sparse TF-IDF rows.

use super::{check_classes, check_width, default_classes, Classifier, SparseVector};
use crate::error::ModelError;
use ndarray::{Array1, ArrayView1};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct LogisticArtifact {
    coef: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_classes")]
    classes: Vec<u8>,
    #[serde(default)]
    n_features: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "LogisticArtifact")]
pub struct LogisticRegression {
    coef: Array1<f64>,
    intercept: f64,
    classes: Vec<u8>,
}

impl TryFrom<LogisticArtifact> for LogisticRegression {
    type Error = ModelError;

    fn try_from(a: LogisticArtifact) -> Result<Self, Self::Error> {
        if let Some(n) = a.n_features {
            if n != a.coef.len() {
                return Err(ModelError::Invalid(format!(
                    "n_features is {} but coef has {} entries",
                    n,
                    a.coef.len()
                )));
            }
        }
        LogisticRegression::new(a.coef, a.intercept, a.classes)
    }
}

impl LogisticRegression {
    pub fn new(coef: Vec<f64>, intercept: f64, classes: Vec<u8>) -> Result<Self, ModelError> {
        check_classes(&classes, 2)?;
        if coef.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
            return Err(ModelError::Invalid("non-finite coefficient".into()));
        }
        Ok(Self {
            coef: Array1::from(coef),
            intercept,
            classes,
        })
    }

    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    pub fn decision_dense(&self, x: &[f64]) -> Result<f64, ModelError> {
        check_width(self.coef.len(), x.len())?;
        Ok(self.coef.dot(&ArrayView1::from(x)) + self.intercept)
    }

    pub fn decision_sparse(&self, x: &SparseVector) -> Result<f64, ModelError> {
        check_width(self.coef.len(), x.dim())?;
        let dot: f64 = x.iter().map(|(i, v)| self.coef[i] * v).sum();
        Ok(dot + self.intercept)
    }

    fn class_for(&self, decision: f64) -> u8 {
        if decision > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}

impl Classifier<[f64]> for LogisticRegression {
    fn predict(&self, x: &[f64]) -> Result<u8, ModelError> {
        Ok(self.class_for(self.decision_dense(x)?))
    }
}

impl Classifier<SparseVector> for LogisticRegression {
    fn predict(&self, x: &SparseVector) -> Result<u8, ModelError> {
        Ok(self.class_for(self.decision_sparse(x)?))
    }
}
