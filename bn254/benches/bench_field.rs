use std::hint::black_box;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use pt8_bn254::{Bn254, InjectiveMonomial};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

type F = Bn254;

const REPS: usize = 100;

fn random_pair(rng: &mut SmallRng) -> ([F; REPS], [F; REPS]) {
    (rng.random(), rng.random())
}

fn bench_field(c: &mut Criterion) {
    let name = "BN254";
    let mut rng = SmallRng::seed_from_u64(1);

    c.bench_function(&format!("{name} add throughput/{REPS}"), |b| {
        b.iter_batched(
            || random_pair(&mut rng),
            |(xs, ys)| {
                let mut out = [F::ZERO; REPS];
                for i in 0..REPS {
                    out[i] = xs[i] + ys[i];
                }
                black_box(out)
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function(&format!("{name} mul latency/{REPS}"), |b| {
        b.iter_batched(
            || random_pair(&mut rng),
            |(xs, _)| xs.iter().fold(F::ONE, |acc, &x| acc * x),
            BatchSize::SmallInput,
        )
    });

    c.bench_function(&format!("{name} x^7/{REPS}"), |b| {
        b.iter_batched(
            || random_pair(&mut rng),
            |(xs, _)| xs.map(|x| <F as InjectiveMonomial<7>>::injective_exp_n(&x)),
            BatchSize::SmallInput,
        )
    });

    c.bench_function(&format!("{name} to_be_bytes"), |b| {
        let x: F = rng.random();
        b.iter(|| black_box(x).to_be_bytes())
    });
}

criterion_group!(bn254_arithmetic, bench_field);
criterion_main!(bn254_arithmetic);
