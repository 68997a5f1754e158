use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geometry_core::{Convertor2, Convertor3, Matrix2x2, Matrix3x3, Vector2, Vector3};

const BATCH_SIZE: usize = 1_000;

fn sample_matrix3() -> Matrix3x3 {
    Matrix3x3::new(0.9, -0.1, 0.2, 0.1, 0.95, -0.3, -0.2, 0.3, 0.9)
}

fn bench_matrix_products(c: &mut Criterion) {
    let a2 = Matrix2x2::new(0.8, -0.6, 0.6, 0.8);
    let b2 = Matrix2x2::new(1.0, 0.5, -0.5, 1.0);
    c.bench_function("matrix2x2 × matrix2x2 × 1000", |bencher| {
        bencher.iter(|| {
            let mut acc = a2;
            for _ in 0..BATCH_SIZE {
                acc = black_box(&a2).multiply_by_matrix(black_box(&b2));
            }
            black_box(acc)
        })
    });

    let a3 = sample_matrix3();
    let b3 = sample_matrix3().multiply_by_scalar(0.5);
    c.bench_function("matrix3x3 × matrix3x3 × 1000", |bencher| {
        bencher.iter(|| {
            let mut acc = a3;
            for _ in 0..BATCH_SIZE {
                acc = black_box(&a3).multiply_by_matrix(black_box(&b3));
            }
            black_box(acc)
        })
    });

    c.bench_function("matrix3x3 determinant", |bencher| {
        bencher.iter(|| black_box(&a3).determinant())
    });
}

fn bench_matrix_vector(c: &mut Criterion) {
    let m = sample_matrix3();
    let v = Vector3::new(1.0, -2.0, 3.0);
    c.bench_function("matrix3x3 × vector3", |bencher| {
        bencher.iter(|| black_box(&m).multiply_by_vector(black_box(&v)))
    });

    let v = Vector3::new(0.3, 0.4, 1.2);
    c.bench_function("vector3 cross product", |bencher| {
        bencher.iter(|| black_box(&v).vector_multiply(black_box(&Vector3::x_axis())))
    });
}

fn bench_convert_vector(c: &mut Criterion) {
    let c2 = Convertor2::new(Matrix2x2::new(0.0, -1.0, 1.0, 0.0), Vector2::new(5.0, 5.0));
    let p2 = Vector2::new(1.0, 1.0);
    c.bench_function("convertor2 convert_vector", |bencher| {
        bencher.iter(|| black_box(&c2).convert_vector(black_box(&p2)))
    });

    let c3 = Convertor3::new(sample_matrix3(), Vector3::new(5.0, 5.0, 5.0));
    let p3 = Vector3::new(1.0, 1.0, 1.0);
    c.bench_function("convertor3 convert_vector", |bencher| {
        bencher.iter(|| black_box(&c3).convert_vector(black_box(&p3)))
    });
}

criterion_group!(
    benches,
    bench_matrix_products,
    bench_matrix_vector,
    bench_convert_vector
);
criterion_main!(benches);
