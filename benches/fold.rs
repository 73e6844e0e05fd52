//! Folding and unfolding performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use yaml_fold::{
    BlockStyle, FoldConfig, FoldMode, fold, parse_block_scalar, render_block_scalar, scan,
};

fn prose(words: usize) -> String {
    const WORDS: [&str; 8] = [
        "lorem",
        "ipsum",
        "dolor",
        "sit",
        "amet",
        "consectetur",
        "adipiscing",
        "elit",
    ];
    (0..words)
        .map(|i| WORDS[i % WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn scanning(c: &mut Criterion) {
    let text = prose(2_000);

    c.bench_function("scan_plain_2k_words", |b| {
        b.iter(|| scan(black_box(&text), FoldMode::Plain));
    });

    let quoted = format!("\"{}\"", text.replace(' ', "\\t "));
    c.bench_function("scan_quoted_escapes", |b| {
        b.iter(|| scan(black_box(&quoted), FoldMode::Quoted));
    });
}

fn folding(c: &mut Criterion) {
    let config = FoldConfig::new("  ");

    c.bench_function("fold_short_pass_through", |b| {
        b.iter(|| fold(black_box("short scalar"), &config));
    });

    let text = prose(2_000);
    c.bench_function("fold_plain_2k_words", |b| {
        b.iter(|| fold(black_box(&text), &config));
    });

    let quoted_config = config.mode(FoldMode::Quoted);
    let unbroken = format!("\"{}\"", "x".repeat(10_000));
    c.bench_function("fold_quoted_unbroken_10k", |b| {
        b.iter(|| fold(black_box(&unbroken), &quoted_config));
    });
}

fn block_scalars(c: &mut Criterion) {
    let paragraph = prose(200);
    let value = format!("{paragraph}\n\n  indented code\n{paragraph}\n").repeat(20);
    let config = FoldConfig::new("  ");

    c.bench_function("render_folded_block", |b| {
        b.iter(|| render_block_scalar(black_box(&value), BlockStyle::Folded, &config));
    });

    let rendered = render_block_scalar(&value, BlockStyle::Folded, &config).unwrap_or_default();
    c.bench_function("parse_folded_block", |b| {
        b.iter(|| parse_block_scalar(black_box(&rendered)));
    });
}

criterion_group!(benches, scanning, folding, block_scalars);
criterion_main!(benches);
