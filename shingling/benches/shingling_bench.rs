use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::distributions::Alphanumeric;
use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use shingling::minhash::{compute_minhash_similarity, estimate_jaccard, HashFamily, HasherKind, MinHasher};
use shingling::text::{build_shingles, filter_stopwords, tokenize, StopwordSet};
use shingling::{Corpus, ShinglingConfig};

static TEXT: &str = "In computer science and data mining, MinHash (or the min-wise independent permutations locality sensitive hashing scheme) is a technique for quickly estimating how similar two sets are. ";

fn random_documents(count: usize, words: usize) -> Vec<String> {
    let seed = [1,0,0,0, 23,0,0,0, 200,1,0,0, 210,30,0,0,
        0,0,0,0, 0,0,0,0, 0,0,0,0, 0,0,0,0];
    let mut rng = StdRng::from_seed(seed);
    (0..count)
        .map(|_| {
            (0..words)
                .map(|_| {
                    Alphanumeric
                        .sample_iter(&mut rng)
                        .take(2)
                        .map(char::from)
                        .collect::<String>()
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_shingle_text(c: &mut Criterion) {
    let stopwords = StopwordSet::from_lines("and\nor\nthe\nis\na\nfor\nhow");
    let mut group = c.benchmark_group("bench_shingle_text");
    group.throughput(Throughput::Elements(1));
    group.bench_function("tokenize_filter_shingle", |b| b.iter(|| {
        let tokens = filter_stopwords(&tokenize(black_box(TEXT)), &stopwords);
        black_box(build_shingles(&tokens, 3).unwrap());
    }));
    group.finish();
}

fn bench_create_signature(c: &mut Criterion) {
    let shingles = build_shingles(&tokenize(TEXT), 3).unwrap();
    let mut group = c.benchmark_group("bench_create_signature");
    group.throughput(Throughput::Elements(1));
    for kind in [HasherKind::Sha1, HasherKind::Sip, HasherKind::Sea, HasherKind::Fnv] {
        let family = HashFamily::with_hasher(256, 1, kind).unwrap();
        group.bench_function(format!("create_signature_{}", kind), |b| b.iter(|| {
            black_box(family.create_set_signature(&shingles));
        }));
    }
    group.finish();
}

fn bench_similarity(c: &mut Criterion) {
    let a = build_shingles(&tokenize(TEXT), 2).unwrap();
    let b = build_shingles(&tokenize("MinHash is a technique for quickly estimating how similar two documents are."), 2).unwrap();
    let family = HashFamily::new(256, 1).unwrap();
    let signature_a = family.create_set_signature(&a);
    let signature_b = family.create_set_signature(&b);

    let mut group = c.benchmark_group("bench_similarity");
    group.throughput(Throughput::Elements(1));
    group.bench_function("compute_minhash_similarity", |bench| bench.iter(|| {
        black_box(compute_minhash_similarity(signature_a.values(), signature_b.values()));
    }));
    group.bench_function("estimate_jaccard_500", |bench| bench.iter(|| {
        black_box(estimate_jaccard(&a, &b, 500, 1).unwrap());
    }));
    group.finish();
}

fn bench_corpus_build(c: &mut Criterion) {
    let documents = random_documents(2_000, 200);
    let stopwords = StopwordSet::new();
    let mut group = c.benchmark_group("bench_corpus_build");
    group.sample_size(10);
    group.throughput(Throughput::Elements(documents.len() as u64));
    for parallel in [false, true] {
        let config = ShinglingConfig { parallel, ..Default::default() };
        group.bench_function(format!("build_parallel_{}", parallel), |b| b.iter(|| {
            black_box(Corpus::build(&documents, &stopwords, config.clone()).unwrap());
        }));
    }
    group.finish();
}


criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_shingle_text, bench_create_signature, bench_similarity, bench_corpus_build
}


criterion_main!(benches);
