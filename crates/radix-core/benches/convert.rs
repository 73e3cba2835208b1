use criterion::{black_box, criterion_group, criterion_main, Criterion};
use radix_core::{convert_number, convert_to_all_systems};

fn bench_convert(c: &mut Criterion) {
    let short = "DEADBEEF";
    let long_binary = "10".repeat(512);

    c.bench_function("hex_to_binary_short", |b| {
        b.iter(|| convert_number(black_box(short), 16, 2))
    });

    c.bench_function("binary_1024_digits_to_decimal", |b| {
        b.iter(|| convert_number(black_box(&long_binary), 2, 10))
    });

    c.bench_function("all_systems_1024_digits", |b| {
        b.iter(|| convert_to_all_systems(black_box(&long_binary), 2))
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
