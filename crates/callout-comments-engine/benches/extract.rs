use callout_comments_engine::{CommentIndex, extract_comments, reconcile};
use criterion::{Criterion, criterion_group, criterion_main};
use relative_path::RelativePath;
use std::hint::black_box;

fn generate_document(threads: usize, depth: usize) -> String {
    let mut doc = String::new();
    for t in 0..threads {
        doc.push_str(&format!("## Section {t}\n\nA paragraph worth commenting on.\n"));
        for level in 1..=depth {
            let prefix = ">".repeat(level);
            doc.push_str(&format!(
                "{prefix} [!comment] Reviewer {level} | [[2025-07-05]] 14:30\n"
            ));
            doc.push_str(&format!("{prefix} Point number {level} about section {t}.\n"));
        }
        doc.push('\n');
    }
    doc
}

fn bench_extract(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.sample_size(20);

    for (name, doc) in [
        ("flat_200", generate_document(200, 1)),
        ("nested_50x6", generate_document(50, 6)),
    ] {
        group.bench_function(name, |b| b.iter(|| extract_comments(black_box(&doc))));
    }
    group.finish();
}

fn bench_reparse(c: &mut Criterion) {
    let doc = generate_document(100, 3);
    let previous = extract_comments(&doc);

    c.bench_function("reconcile_100x3", |b| {
        b.iter(|| reconcile(Some(&previous), extract_comments(black_box(&doc))))
    });

    c.bench_function("index_parse_100x3", |b| {
        let mut index = CommentIndex::new();
        let path = RelativePath::new("bench.md");
        b.iter(|| index.parse(path, black_box(&doc)).len())
    });
}

criterion_group!(benches, bench_extract, bench_reparse);
criterion_main!(benches);
