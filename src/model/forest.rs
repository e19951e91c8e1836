//! Random forest of CART trees, stored as parallel node arrays.

use super::{check_classes, check_width, default_classes, Classifier};
use crate::error::ModelError;
use ndarray::{Array1, Array2, ArrayView1};
use serde::Deserialize;

const LEAF: i64 = -1;

#[derive(Debug, Clone, Deserialize)]
struct TreeArtifact {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<i64>,
    threshold: Vec<f64>,
    /// Per-node class counts (or fractions)
    value: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Deserialize)]
struct ForestArtifact {
    n_features: usize,
    #[serde(default = "default_classes")]
    classes: Vec<u8>,
    trees: Vec<TreeArtifact>,
}

#[derive(Debug, Clone)]
pub struct DecisionTree {
    children_left: Vec<i64>,
    children_right: Vec<i64>,
    feature: Vec<usize>,
    threshold: Vec<f64>,
    /// Normalised class distribution per node, shape (nodes, classes)
    proba: Array2<f64>,
    n_features: usize,
}

impl DecisionTree {
    /// Build from node arrays, validating shape and indices.
    pub fn new(
        children_left: Vec<i64>,
        children_right: Vec<i64>,
        feature: Vec<i64>,
        threshold: Vec<f64>,
        value: Vec<Vec<f64>>,
        n_features: usize,
        n_classes: usize,
    ) -> Result<Self, ModelError> {
        let n = children_left.len();
        if n == 0 {
            return Err(ModelError::Invalid("tree has no nodes".into()));
        }
        if children_right.len() != n || feature.len() != n || threshold.len() != n || value.len() != n
        {
            return Err(ModelError::Invalid("tree node arrays differ in length".into()));
        }

        let mut features = Vec::with_capacity(n);
        for i in 0..n {
            let (l, r) = (children_left[i], children_right[i]);
            if l == LEAF || r == LEAF {
                if l != r {
                    return Err(ModelError::Invalid(format!("node {} has one child", i)));
                }
                features.push(0);
                continue;
            }
            if l < 0 || r < 0 || l as usize >= n || r as usize >= n {
                return Err(ModelError::Invalid(format!("node {} child out of range", i)));
            }
            let f = feature[i];
            if f < 0 || f as usize >= n_features {
                return Err(ModelError::Invalid(format!(
                    "node {} splits on feature {} of {}",
                    i, f, n_features
                )));
            }
            features.push(f as usize);
        }

        let mut proba = Array2::<f64>::zeros((n, n_classes));
        for (i, row) in value.iter().enumerate() {
            if row.len() != n_classes {
                return Err(ModelError::Invalid(format!(
                    "node {} has {} class values, expected {}",
                    i,
                    row.len(),
                    n_classes
                )));
            }
            let total: f64 = row.iter().sum();
            for (j, v) in row.iter().enumerate() {
                proba[[i, j]] = if total > 0.0 {
                    v / total
                } else {
                    1.0 / n_classes as f64
                };
            }
        }

        Ok(Self {
            children_left,
            children_right,
            feature: features,
            threshold,
            proba,
            n_features,
        })
    }

    fn leaf(&self, x: &[f64]) -> Result<usize, ModelError> {
        let mut node = 0usize;
        // A well-formed tree reaches a leaf in fewer steps than it has nodes.
        for _ in 0..self.children_left.len() {
            if self.children_left[node] == LEAF {
                return Ok(node);
            }
            // Splits were learned on float32 inputs against float64 thresholds.
            node = if (x[self.feature[node]] as f32) as f64 <= self.threshold[node] {
                self.children_left[node] as usize
            } else {
                self.children_right[node] as usize
            };
        }
        Err(ModelError::Invalid("tree contains a cycle".into()))
    }

    fn predict_proba(&self, x: &[f64]) -> Result<ArrayView1<'_, f64>, ModelError> {
        let leaf = self.leaf(x)?;
        Ok(self.proba.row(leaf))
    }
}

/// Averages per-tree class probabilities; ties go to the lower class index.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "ForestArtifact")]
pub struct RandomForest {
    n_features: usize,
    classes: Vec<u8>,
    trees: Vec<DecisionTree>,
}

impl TryFrom<ForestArtifact> for RandomForest {
    type Error = ModelError;

    fn try_from(a: ForestArtifact) -> Result<Self, Self::Error> {
        let n_classes = a.classes.len();
        let trees = a
            .trees
            .into_iter()
            .map(|t| {
                DecisionTree::new(
                    t.children_left,
                    t.children_right,
                    t.feature,
                    t.threshold,
                    t.value,
                    a.n_features,
                    n_classes,
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        RandomForest::new(a.n_features, a.classes, trees)
    }
}

impl RandomForest {
    pub fn new(
        n_features: usize,
        classes: Vec<u8>,
        trees: Vec<DecisionTree>,
    ) -> Result<Self, ModelError> {
        check_classes(&classes, 2)?;
        if trees.is_empty() {
            return Err(ModelError::Invalid("forest has no trees".into()));
        }
        if let Some(t) = trees.iter().find(|t| t.proba.ncols() != classes.len()) {
            return Err(ModelError::Invalid(format!(
                "tree has {} classes, forest has {}",
                t.proba.ncols(),
                classes.len()
            )));
        }
        if let Some(t) = trees.iter().find(|t| t.n_features != n_features) {
            return Err(ModelError::Invalid(format!(
                "tree expects {} features, forest has {}",
                t.n_features, n_features
            )));
        }
        Ok(Self {
            n_features,
            classes,
            trees,
        })
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn predict_proba(&self, x: &[f64]) -> Result<Array1<f64>, ModelError> {
        check_width(self.n_features, x.len())?;
        let mut acc = Array1::<f64>::zeros(self.classes.len());
        for tree in &self.trees {
            acc += &tree.predict_proba(x)?;
        }
        acc /= self.trees.len() as f64;
        Ok(acc)
    }
}

impl Classifier<[f64]> for RandomForest {
    fn predict(&self, x: &[f64]) -> Result<u8, ModelError> {
        let proba = self.predict_proba(x)?;
        let mut best = 0;
        for (i, p) in proba.iter().enumerate() {
            if *p > proba[best] {
                best = i;
            }
        }
        Ok(self.classes[best])
    }
}
