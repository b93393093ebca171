use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use se23_core::{Layout, Matrix, SplitMix64};
use se23_geo::{Cov99, ImuPreint, Pose23, ZImuEst};

fn bench_myfunction(c: &mut Criterion) {
    let inputs = [1.25f64, -0.5, 0.0, 0.0];
    let mut out = [0.0f64; 3];
    c.bench_function("myfunction", |b| {
        b.iter(|| se23_sym::myfunction(black_box(&inputs), Some(&mut out)));
    });
}

fn bench_myfunc(c: &mut Criterion) {
    let mut rng = SplitMix64::new(1);
    let mut pose = [0.0f64; 10];
    pose[..4].copy_from_slice(&rng.next_unit_quaternion::<f64>());
    let mut out = [0.0f64; 9];
    c.bench_function("myfunc", |b| {
        b.iter(|| se23_sym::myfunc(black_box(&pose), Some(&mut out)));
    });
}

fn bench_preintegrate(c: &mut Criterion) {
    let mut group = c.benchmark_group("preintegrate");
    let noise = [1e-4f64, 1e-4, 1e-4, 1e-2, 1e-2, 1e-2];
    for &steps in &[1usize, 100, 1000] {
        let mut rng = SplitMix64::new(steps as u64);
        let samples: Vec<[f64; 6]> = (0..steps)
            .map(|_| {
                ZImuEst::new(rng.next_vector3(-1.0, 1.0), rng.next_vector3(-9.0, 9.0))
                    .to_storage()
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &_n| {
            b.iter(|| {
                let mut prev = ImuPreint::<f64>::identity().to_storage();
                let mut upsilon = [0.0f64; 10];
                let mut cov = [0.0f64; 81];
                for z in &samples {
                    let (u, p) = (Some(&mut upsilon), Some(&mut cov));
                    se23_sym::preintegrate(&noise, &prev, z, 0.005, u, p);
                    let next = ImuPreint::new(
                        Pose23::from_storage(&upsilon),
                        Cov99::from_matrix(Matrix::from_flat(Layout::ColMajor, &cov)),
                    );
                    prev = next.to_storage();
                }
                black_box(prev)
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_myfunction, bench_myfunc, bench_preintegrate);
criterion_main!(benches);
