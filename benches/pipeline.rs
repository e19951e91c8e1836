//! Pipeline benchmark: feature extraction and explanation on their own.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phishing_detector::explain::{explain_text, explain_url};
use phishing_detector::features::extract_url_features;

const URLS: [&str; 4] = [
    "https://www.example.com/",
    "http://192.168.0.1:8080/login.php?user=admin",
    "http://user@paypal.com.verify-account.example.ru/secure/update?session=8f3a9c",
    "not a url at all",
];

fn bench_extract(c: &mut Criterion) {
    c.bench_function("extract_url_features_4", |b| {
        b.iter(|| {
            for u in URLS {
                black_box(extract_url_features(black_box(u)));
            }
        })
    });
}

fn bench_explain(c: &mut Criterion) {
    c.bench_function("explain_url_4", |b| {
        b.iter(|| {
            for u in URLS {
                black_box(explain_url(black_box(u)));
            }
        })
    });
    let text = "Please update your PIN within 24 hours or your account will be locked.";
    c.bench_function("explain_text", |b| b.iter(|| explain_text(black_box(text))));
}

criterion_group!(benches, bench_extract, bench_explain);
criterion_main!(benches);
