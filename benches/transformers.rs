use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tabular_transformers::dataset::{InMemoryDataset, Sample, Value};
use tabular_transformers::kernels::distance::{Distance, Hamming};
use tabular_transformers::preprocessing::{
    OneHotEncoder, PolynomialExpander, Stateful, Transformer, VarianceThresholdFilter,
};

const LABELS: [&str; 5] = ["red", "green", "blue", "cyan", "magenta"];

fn mixed_dataset(n: usize) -> InMemoryDataset {
    let samples = (0..n)
        .map(|i| {
            Sample::from_values([
                Value::from(LABELS[i % LABELS.len()]),
                Value::from(i as f64 * 0.1),
                Value::from(LABELS[(i / 3) % LABELS.len()]),
                Value::from(1.0),
            ])
        })
        .collect();
    InMemoryDataset::from_samples(samples).unwrap()
}

fn bench_one_hot(c: &mut Criterion) {
    for size in [100, 1000, 10000].iter() {
        let dataset = mixed_dataset(*size);
        let mut encoder = OneHotEncoder::new();
        encoder.fit(&dataset).unwrap();
        let samples = dataset.into_samples();

        c.bench_with_input(BenchmarkId::new("one_hot_transform", size), &samples, |b, s| {
            b.iter(|| black_box(encoder.transform(black_box(s)).unwrap()));
        });
    }
}

fn bench_variance_threshold(c: &mut Criterion) {
    for size in [100, 1000, 10000].iter() {
        let dataset = mixed_dataset(*size);

        c.bench_with_input(BenchmarkId::new("variance_threshold_fit", size), &dataset, |b, d| {
            b.iter(|| {
                let mut filter = VarianceThresholdFilter::default();
                filter.fit(black_box(d)).unwrap();
                black_box(filter);
            });
        });
    }
}

fn bench_polynomial(c: &mut Criterion) {
    for degree in [2usize, 4, 8].iter() {
        let expander = PolynomialExpander::new(*degree).unwrap();
        let samples: Vec<Sample> = (0..1000)
            .map(|i| Sample::from_values((0..10).map(|j| (i * j) as f64 * 0.01)))
            .collect();

        c.bench_with_input(BenchmarkId::new("polynomial_transform", degree), &samples, |b, s| {
            b.iter(|| black_box(expander.transform(black_box(s)).unwrap()));
        });
    }
}

fn bench_hamming(c: &mut Criterion) {
    for width in [8usize, 64, 512].iter() {
        let a = Sample::from_values((0..*width).map(|i| (i % 3) as f64));
        let b = Sample::from_values((0..*width).map(|i| (i % 4) as f64));

        c.bench_with_input(BenchmarkId::new("hamming", width), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(Hamming.compute(black_box(a), black_box(b)).unwrap()));
        });
    }
}

criterion_group!(
    benches,
    bench_one_hot,
    bench_variance_threshold,
    bench_polynomial,
    bench_hamming
);
criterion_main!(benches);
