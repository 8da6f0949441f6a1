use criterion::{Criterion, black_box, criterion_group, criterion_main};
use impact_linalg::{Matrix4, Vector4, random};

pub fn bench_matrix4_product(c: &mut Criterion) {
    let mut rng = random::seeded_rng(0);
    let a = Matrix4::<f32>::random_in(&mut rng, -1.0, 1.0);
    let b = Matrix4::<f32>::random_in(&mut rng, -1.0, 1.0);
    c.bench_function("matrix4_product", |bencher| {
        bencher.iter(|| black_box(&a) * black_box(&b));
    });
}

pub fn bench_vector4_matrix4_product(c: &mut Criterion) {
    let mut rng = random::seeded_rng(1);
    let m = Matrix4::<f32>::random_in(&mut rng, -1.0, 1.0);
    let v = Vector4::<f32>::random_in(&mut rng, -1.0, 1.0);
    c.bench_function("vector4_matrix4_product", |bencher| {
        bencher.iter(|| black_box(&v) * black_box(&m));
    });
}

pub fn bench_matrix4_inverse(c: &mut Criterion) {
    let mut rng = random::seeded_rng(2);
    let matrices: Vec<_> = (0..1000)
        .map(|_| Matrix4::<f64>::random_in(&mut rng, 0.1, 100.0))
        .collect();
    c.bench_function("matrix4_inverse", |bencher| {
        bencher.iter(|| {
            for m in &matrices {
                black_box(m.inverse());
            }
        });
    });
}

pub fn bench_matrix4_determinant(c: &mut Criterion) {
    let mut rng = random::seeded_rng(3);
    let m = Matrix4::<f64>::random_in(&mut rng, 0.1, 100.0);
    c.bench_function("matrix4_determinant", |bencher| {
        bencher.iter(|| black_box(&m).determinant());
    });
}

criterion_group!(
    benches,
    bench_matrix4_product,
    bench_vector4_matrix4_product,
    bench_matrix4_inverse,
    bench_matrix4_determinant
);
criterion_main!(benches);
