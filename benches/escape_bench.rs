use criterion::{black_box, criterion_group, criterion_main, Criterion};
use htmlrefs::{escape, write_escaped};
use htmlrefs_benches::ESCAPE_INPUTS;

fn bench_escape(c: &mut Criterion) {
    c.bench_function("escape", |b| {
        b.iter(|| {
            for &input in ESCAPE_INPUTS {
                black_box(escape(black_box(input)));
            }
        })
    });
}

fn bench_escape_individual(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_individual");

    let cases = [
        ("empty", ""),
        ("no_reserved", "a b c d e f g h i j k l m n o p q r s t u v w x y z "),
        ("markup", "<a href=\"http://google.com?q=&\">google.com</a>"),
    ];

    for (name, input) in cases {
        group.bench_function(name, |b| b.iter(|| black_box(escape(black_box(input)))));
    }

    group.finish();
}

fn bench_write_escaped(c: &mut Criterion) {
    c.bench_function("write_escaped", |b| {
        let mut buf = Vec::with_capacity(4096);
        b.iter(|| {
            for &input in ESCAPE_INPUTS {
                buf.clear();
                let _ = write_escaped(&mut buf, black_box(input));
            }
            black_box(buf.len())
        })
    });
}

fn bench_escape_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_input_sizes");

    let base = "<a href=\"http://google.com?q=&\">google.com</a>";
    let sizes = [10, 50, 100, 500, 1000, 5000];

    for size in sizes {
        let mut input = base.to_string();
        while input.len() < size {
            input.push_str("plain filler text ");
        }
        input.truncate(size);

        group.bench_function(format!("{size}_bytes"), |b| {
            b.iter(|| black_box(escape(black_box(&input))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_escape,
    bench_escape_individual,
    bench_write_escaped,
    bench_escape_sizes
);
criterion_main!(benches);
