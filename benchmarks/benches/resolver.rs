use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use textpos::{Options, resolve};

fn generate_source(num_lines: usize) -> String {
    let mut src = String::new();
    for i in 0..num_lines {
        src.push_str(&format!("push {i}\n"));
        src.push_str("    call gadget_main()  // trailing comment\n");
    }
    src.push_str("ret");
    src
}

fn bench_resolve_last_offset(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_last_offset");
    for num_lines in [10, 1_000, 100_000] {
        let src = generate_source(num_lines);
        let last = src.len() - 1;
        group.bench_with_input(BenchmarkId::from_parameter(num_lines), &src, |b, src| {
            b.iter(|| resolve(black_box(src), black_box(last), Options::default()))
        });
    }
    group.finish();
}

fn bench_resolve_first_line(c: &mut Criterion) {
    let src = generate_source(100_000);
    c.bench_function("resolve_first_line", |b| {
        b.iter(|| resolve(black_box(&src), black_box(5usize), Options::one_based_mode()))
    });
}

criterion_group!(benches, bench_resolve_last_offset, bench_resolve_first_line);
criterion_main!(benches);
