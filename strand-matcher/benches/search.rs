use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use strand_matcher::{
    matcher::{CodePoint, Literal, Matcher, Repeat},
    search::Finder,
    text::TextView,
};

const KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use", "where",
    "while",
];

pub fn criterion_benchmark(c: &mut Criterion) {
    let haystack = TextView::new(&"12345678901234567890 pyssEverything ".repeat(20));

    {
        let literal = Literal::from_strings(KEYWORDS);
        let nav_text = TextView::new("struct Foo");
        assert!(literal.match_view(&nav_text).unwrap().is_some());
        c.bench_function("literal/match", |b| {
            b.iter(|| literal.match_view(black_box(&nav_text)).unwrap())
        });
    }

    {
        let finder = Finder::literals("keyword", KEYWORDS).unwrap();
        c.bench_function("find_all/literals", |b| {
            b.iter(|| finder.find_all(black_box(&haystack)).unwrap().len())
        });

        let finder = Finder::with_literals("keyword", KEYWORDS)
            .case_insensitive(true)
            .call()
            .unwrap();
        c.bench_function("find_all/literals_case_insensitive", |b| {
            b.iter(|| finder.find_all(black_box(&haystack)).unwrap().len())
        });
    }

    {
        let finder = Finder::matcher("number", Repeat::one_or_more(CodePoint::range('0', '9')));
        c.bench_function("find_all/matcher", |b| {
            b.iter(|| finder.find_all(black_box(&haystack)).unwrap().len())
        });
    }

    {
        let digits = Repeat::between(1, 64, CodePoint::range('0', '9'));
        let text = TextView::new("12345678901234567890");
        c.bench_function("repeat/greedy", |b| {
            b.iter(|| digits.match_view(black_box(&text)).unwrap())
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
