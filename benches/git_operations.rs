use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gitsync::git::parser::{
    changed_paths, commit_message, parse_commit_count, parse_status_porcelain,
};

const SMALL_STATUS: &str = "M  README.md\n M src/main.rs\n?? untracked.txt";

const MIXED_STATUS: &str = "M  README.md
 M src/main.rs
MM src/lib.rs
A  src/error.rs
 D old_file.rs
D  removed.rs
R  docs/old.md -> docs/new.md
UU conflicted.rs
?? untracked1.txt
?? untracked2.txt
?? notes with spaces.txt
M  Cargo.toml
 M Cargo.lock
AM benches/bench.rs
DD both_deleted.rs";

fn generate_large_status(num_files: usize) -> String {
    let codes = ["M ", " M", "??", " D", "A "];
    let mut output = String::new();
    for i in 0..num_files {
        let code = codes[i % codes.len()];
        output.push_str(&format!("{} src/module_{}/file_{}.rs\n", code, i / 10, i));
    }
    output
}

fn bench_parse_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_status_porcelain");

    group.bench_with_input(BenchmarkId::new("small", "3 files"), &SMALL_STATUS, |b, input| {
        b.iter(|| parse_status_porcelain(black_box(input)))
    });

    group.bench_with_input(BenchmarkId::new("mixed", "15 files"), &MIXED_STATUS, |b, input| {
        b.iter(|| parse_status_porcelain(black_box(input)))
    });

    for size in [100, 1000] {
        let status = generate_large_status(size);
        group.bench_with_input(
            BenchmarkId::new("large", format!("{} files", size)),
            &status,
            |b, input| b.iter(|| parse_status_porcelain(black_box(input))),
        );
    }

    group.finish();
}

fn bench_commit_message(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit_message");

    for size in [15, 1000] {
        let status = if size == 15 {
            MIXED_STATUS.to_string()
        } else {
            generate_large_status(size)
        };
        let entries = parse_status_porcelain(&status).unwrap();

        group.bench_with_input(BenchmarkId::new("changed_paths", size), &entries, |b, entries| {
            b.iter(|| commit_message(&changed_paths(black_box(entries))))
        });
    }

    group.finish();
}

fn bench_parse_commit_count(c: &mut Criterion) {
    c.bench_function("parse_commit_count", |b| {
        b.iter(|| parse_commit_count(black_box("42\n")))
    });
}

criterion_group!(
    benches,
    bench_parse_status,
    bench_commit_message,
    bench_parse_commit_count
);
criterion_main!(benches);
