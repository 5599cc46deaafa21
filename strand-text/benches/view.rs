use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strand_text::{case::FoldCase, TextView};

pub fn criterion_benchmark(c: &mut Criterion) {
    let text = TextView::new("12345678901234567890ｗ😀 pyssEverything");
    assert_eq!(text.code_point_at(21), Some('😀'));
    c.bench_function("code_point_at/astral", |b| {
        b.iter(|| black_box(&text).code_point_at(black_box(21)))
    });
    c.bench_function("chars", |b| b.iter(|| black_box(&text).chars().count()));

    let prefix: Vec<u16> = "pyss".encode_utf16().collect();
    assert!(text.starts_with_at(24, &prefix));
    c.bench_function("starts_with_at", |b| {
        b.iter(|| black_box(&text).starts_with_at(black_box(24), &prefix))
    });

    assert_eq!('Σ'.fold_case(), 'σ');
    c.bench_function("fold_case/uni_hit", |b| {
        b.iter(|| black_box('Σ').fold_case())
    });

    #[cfg(feature = "category")]
    {
        use strand_text::category::{CategorySet, GeneralCategory};

        let letters = CategorySet::new([GeneralCategory::Letter]).unwrap();
        c.bench_function("category/letter", |b| {
            b.iter(|| black_box(&letters).contains(black_box('ж')))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
