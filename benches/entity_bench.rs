use criterion::{black_box, criterion_group, criterion_main, Criterion};
use htmlrefs::{parse_entity, replace_entities};
use htmlrefs_benches::DECODE_INPUTS;

fn bench_replace_entities(c: &mut Criterion) {
    c.bench_function("replace_entities", |b| {
        b.iter(|| {
            for &input in DECODE_INPUTS {
                black_box(replace_entities(black_box(input)));
            }
        })
    });
}

fn bench_replace_individual(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_individual");

    let cases = [
        ("no_ampersand", "a b c d e f g h i j k l m n o p q r s t u v w x y z "),
        ("failed_candidates", "R&D is 50% & rising, AT&T filed &c."),
        ("reference_dense", "&nbsp; &amp; &copy; &AElig; &Dcaron; &frac34; &#35; &#x22;"),
    ];

    for (name, input) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(replace_entities(black_box(input))))
        });
    }

    group.finish();
}

fn bench_parse_entity(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_entity");

    let cases = [
        ("named_short", "&lt;"),
        ("named_long", "&CounterClockwiseContourIntegral;"),
        ("decimal", "&#98765432;"),
        ("hex", "&#x1F600;"),
        ("reject_early", "&@"),
        ("reject_late", "&ffffffffffffffffuuuuuuuuuuuuuuuu;"),
    ];

    for (name, input) in cases {
        group.bench_function(name, |b| {
            b.iter(|| black_box(parse_entity(black_box(input))))
        });
    }

    group.finish();
}

fn bench_replace_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace_input_sizes");

    let sizes = [10, 50, 100, 500, 1000, 5000];

    for size in sizes {
        let mut input = String::new();
        while input.len() < size {
            input.push_str("text &amp; more &#34;quoted&#34; filler ");
        }
        input.truncate(size);

        group.bench_function(format!("{size}_bytes"), |b| {
            b.iter(|| black_box(replace_entities(black_box(&input))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_replace_entities,
    bench_replace_individual,
    bench_parse_entity,
    bench_replace_sizes
);
criterion_main!(benches);
