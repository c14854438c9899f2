use criterion::{criterion_group, criterion_main, Criterion};
use mask_speller::prelude::*;

static WORDS: &str = "the of and to in is you that it he was for on are as with his they at be \
    this have from or one had by word but not what all were we when your can said there use an \
    each which she do how their if will up other about out many then them these so some her \
    would make like him into time has look two more write go see number no way could people my \
    than first water been call who oil its now find long down day did get come made may part \
    rain zoom main mainly sample brain train grain drain";

fn checker(chunk_size: usize, workers: usize) -> SpellChecker {
    let mut checker =
        SpellChecker::new_with_config(Config::new_with_params(chunk_size, workers)).unwrap();
    checker.add_words(WORDS.split_whitespace()).unwrap();
    checker
}

fn bench_base(c: &mut Criterion) {
    let service = checker(usize::MAX, 0);

    c.bench_function("check_spelling: 'tets' inline", |b| {
        b.iter(|| service.check_spelling("tets"))
    });
}

fn bench_chunked(c: &mut Criterion) {
    let service = checker(10, 4);

    c.bench_function("check_spelling: 'tets' chunked", |b| {
        b.iter(|| service.check_spelling("tets"))
    });

    c.bench_function("check_spelling: 'wahtabout' chunked", |b| {
        b.iter(|| service.check_spelling("wahtabout"))
    });
}

criterion_group!(benches, bench_base, bench_chunked);
criterion_main!(benches);
