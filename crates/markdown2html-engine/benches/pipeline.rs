use criterion::{Criterion, criterion_group, criterion_main};
use markdown2html_engine::{MarkdownEngine, lex_list_block, resolve_emphasis};
use pulldown_cmark::{Parser, html};
mod common;

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(10);

    let content = common::generate_markdown_content(100);
    let engine = MarkdownEngine::standard();
    group.bench_function("markdown2html", |b| {
        b.iter(|| {
            let html = engine.markdown_to_html(std::hint::black_box(&content));
            std::hint::black_box(html);
        });
    });

    group.bench_function("pulldown_cmark", |b| {
        b.iter(|| {
            let parser = Parser::new(std::hint::black_box(&content));
            let mut out = String::new();
            html::push_html(&mut out, parser);
            std::hint::black_box(out);
        });
    });

    let large = common::generate_large_document();
    group.bench_function("markdown2html_large", |b| {
        b.iter(|| {
            let html = engine.markdown_to_html(std::hint::black_box(&large));
            std::hint::black_box(html);
        });
    });

    group.finish();
}

fn bench_core(c: &mut Criterion) {
    let mut group = c.benchmark_group("core");

    let line = common::generate_emphasis_heavy_line(200);
    group.bench_function("resolve_emphasis", |b| {
        b.iter(|| std::hint::black_box(resolve_emphasis(std::hint::black_box(&line))));
    });

    let list = "- item\nlazy\n\n  more\n".repeat(200);
    group.bench_function("lex_list_block", |b| {
        b.iter(|| {
            let block = lex_list_block(std::hint::black_box(&list));
            std::hint::black_box(block.map(|block| block.consumed));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_core);
criterion_main!(benches);
