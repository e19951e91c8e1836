//! Frozen TF-IDF vectorizer: text → sparse row over a fixed vocabulary.

use crate::error::ModelError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

static TOKEN: OnceLock<Regex> = OnceLock::new();

fn token_pattern() -> &'static Regex {
    TOKEN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("token pattern"))
}

/// Sparse row; columns strictly ascending.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparseVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Entries are sorted and columns `>= dim` dropped.
    pub fn new(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.retain(|(i, _)| *i < dim);
        entries.sort_by_key(|(i, _)| *i);
        entries.dedup_by_key(|(i, _)| *i);
        Self { dim, entries }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut out = vec![0.0; self.dim];
        for (i, v) in self.iter() {
            out[i] = v;
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

fn default_true() -> bool {
    true
}

fn default_ngram() -> (usize, usize) {
    (1, 1)
}

#[derive(Debug, Clone, Deserialize)]
struct VectorizerArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default = "default_true")]
    lowercase: bool,
    #[serde(default)]
    stop_words: Vec<String>,
    #[serde(default = "default_ngram")]
    ngram_range: (usize, usize),
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default)]
    norm: Norm,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "VectorizerArtifact")]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    lowercase: bool,
    stop_words: HashSet<String>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Norm,
}

impl TryFrom<VectorizerArtifact> for TfidfVectorizer {
    type Error = ModelError;

    fn try_from(a: VectorizerArtifact) -> Result<Self, Self::Error> {
        let (lo, hi) = a.ngram_range;
        if lo == 0 || lo > hi {
            return Err(ModelError::Invalid(format!("bad ngram_range ({}, {})", lo, hi)));
        }
        let mut v = TfidfVectorizer::new(a.vocabulary, a.idf)?;
        v.lowercase = a.lowercase;
        v.stop_words = a.stop_words.into_iter().collect();
        v.ngram_range = a.ngram_range;
        v.sublinear_tf = a.sublinear_tf;
        v.norm = a.norm;
        Ok(v)
    }
}

impl TfidfVectorizer {
    /// Unigram, lower-casing, l2-normalised vectorizer over `vocabulary`.
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self, ModelError> {
        if let Some((term, col)) = vocabulary.iter().find(|(_, c)| **c >= idf.len()) {
            return Err(ModelError::Invalid(format!(
                "term {:?} maps to column {} but idf has {} entries",
                term,
                col,
                idf.len()
            )));
        }
        if idf.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::Invalid("non-finite idf weight".into()));
        }
        Ok(Self {
            vocabulary,
            idf,
            lowercase: true,
            stop_words: HashSet::new(),
            ngram_range: (1, 1),
            sublinear_tf: false,
            norm: Norm::L2,
        })
    }

    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    fn terms(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens: Vec<&str> = token_pattern()
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|t| !self.stop_words.contains(*t))
            .collect();

        let (lo, hi) = self.ngram_range;
        let mut out = Vec::new();
        for n in lo..=hi {
            if n > tokens.len() {
                break;
            }
            out.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        out
    }

    /// Terms outside the vocabulary contribute nothing.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for term in self.terms(text) {
            if let Some(&col) = self.vocabulary.get(&term) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(col, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (col, tf * self.idf[col])
            })
            .collect();

        let norm = match self.norm {
            Norm::L2 => entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt(),
            Norm::L1 => entries.iter().map(|(_, v)| v.abs()).sum::<f64>(),
            Norm::None => 1.0,
        };
        if norm > 0.0 {
            for (_, v) in entries.iter_mut() {
                *v /= norm;
            }
        }
        SparseVector {
            dim: self.idf.len(),
            entries,
        }
    }
}
