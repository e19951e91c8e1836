//! Inference benchmark: raw input → verdict with in-memory models.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phishing_detector::features::URL_FEATURE_DIM;
use phishing_detector::model::{DecisionTree, LogisticRegression, ModelBundle, RandomForest, TfidfVectorizer};
use phishing_detector::service::InferenceService;
use std::collections::HashMap;
use std::sync::Arc;

fn forest(n_trees: usize) -> RandomForest {
    let trees = (0..n_trees)
        .map(|i| {
            DecisionTree::new(
                vec![1, -1, -1],
                vec![2, -1, -1],
                vec![(i % URL_FEATURE_DIM) as i64, -2, -2],
                vec![1.0, -2.0, -2.0],
                vec![vec![5.0, 5.0], vec![4.0, 1.0], vec![1.0, 4.0]],
                URL_FEATURE_DIM,
                2,
            )
            .unwrap()
        })
        .collect();
    RandomForest::new(URL_FEATURE_DIM, vec![0, 1], trees).unwrap()
}

fn service(n_trees: usize) -> InferenceService {
    let words = ["verify", "account", "password", "urgent", "bank", "lunch", "meeting", "invoice"];
    let vocab: HashMap<String, usize> = words
        .iter()
        .enumerate()
        .map(|(i, w)| (w.to_string(), i))
        .collect();
    let vectorizer = TfidfVectorizer::new(vocab, vec![1.5; words.len()]).unwrap();
    let text = LogisticRegression::new(vec![0.8, 0.6, 1.2, 0.9, 0.3, -1.0, -0.8, -0.2], -0.1, vec![0, 1]).unwrap();
    InferenceService::new(Arc::new(ModelBundle::from_parts(forest(n_trees), text, vectorizer)))
}

fn bench_check_url(c: &mut Criterion) {
    let url = "http://secure-login.example-bank.com.192.168.10.4.nip.io/account/verify?id=12345";
    let mut g = c.benchmark_group("check_url_by_trees");
    for n in [10, 100, 200] {
        let svc = service(n);
        g.bench_function(format!("trees_{}", n).as_str(), |b| {
            b.iter(|| svc.check_url(black_box(url)).unwrap())
        });
    }
    g.finish();
}

fn bench_check_text(c: &mut Criterion) {
    let svc = service(10);
    let text = "URGENT: your bank account will be suspended within 24 hours. \
                Verify your password immediately using the link below.";
    c.bench_function("check_text", |b| b.iter(|| svc.check_text(black_box(text)).unwrap()));
}

criterion_group!(benches, bench_check_url, bench_check_text);
criterion_main!(benches);
