use std::hint::black_box;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use pt8_bn254::Bn254;
use pt8_poseidon2::{
    BN254_T8_SCHEDULE, Permutation, Poseidon2, Poseidon2HashT8, RoundSchedule,
    default_poseidon2_bn254_t8,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bench_poseidon2(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let perm = default_poseidon2_bn254_t8().unwrap();

    c.bench_function("poseidon2::<Bn254, 8, 7> permute", |b| {
        let input: [Bn254; 8] = rng.random();
        b.iter(|| perm.permute(black_box(input)))
    });

    c.bench_function("poseidon2::<Bn254, 8, 7> permute_with_trace", |b| {
        let input: [Bn254; 8] = rng.random();
        b.iter(|| perm.permute_with_trace(black_box(input)))
    });

    poseidon2_random::<12, 5>(c, RoundSchedule::new(8, 56));
    poseidon2_random::<8, 7>(c, BN254_T8_SCHEDULE);
}

fn poseidon2_random<const WIDTH: usize, const D: u64>(c: &mut Criterion, schedule: RoundSchedule)
where
    Bn254: pt8_bn254::InjectiveMonomial<D>,
{
    let mut rng = SmallRng::seed_from_u64(2);
    let perm = Poseidon2::<WIDTH, D>::new_from_rng(schedule, &mut rng).unwrap();
    let input: [Bn254; WIDTH] = rng.random();
    let id = BenchmarkId::new(
        format!("poseidon2::<Bn254, {}, {}> random constants", WIDTH, D),
        schedule.total_rounds(),
    );
    c.bench_with_input(id, &input, |b, &input| b.iter(|| perm.permute(input)));
}

fn bench_hash(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(3);
    let hasher = Poseidon2HashT8::from_default().unwrap();

    c.bench_function("hash_elements", |b| {
        let inputs: [Bn254; 7] = rng.random();
        b.iter(|| hasher.hash_elements(black_box(inputs)))
    });

    let mut group = c.benchmark_group("hash_many");
    for count in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter_batched(
                || (0..count).map(|_| rng.random()).collect::<Vec<[Bn254; 7]>>(),
                |inputs| hasher.hash_many(&inputs),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_poseidon2, bench_hash);
criterion_main!(benches);
