use criterion::{criterion_group, criterion_main};

use priors::{bench_prior_set, bench_secondary_eclipse};

criterion_group!(benches_priors, bench_prior_set, bench_secondary_eclipse);
criterion_main!(benches_priors);
