use cmdline_parser::CmdLineParser;
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn parser_with_tokens(count: usize) -> CmdLineParser {
    let mut parser = CmdLineParser::new();
    let mut args: Vec<String> = (0..count).map(|i| format!("--opt{}", i)).collect();
    args.insert(0, "exe".to_string());
    parser.parse(args);
    parser
}

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookups");

    for count in [10, 1_000, 100_000] {
        let parser = parser_with_tokens(count);
        let last = format!("--opt{}", count - 1);

        group.bench_with_input(BenchmarkId::new("has_option_miss", count), &parser, |b, p| {
            b.iter(|| p.has_option(black_box("--missing")))
        });
        group.bench_with_input(BenchmarkId::new("get_option_last", count), &parser, |b, p| {
            b.iter(|| p.get_option(black_box(&last)))
        });
    }

    group.finish();
}

fn bench_help_text(c: &mut Criterion) {
    let parser = cmdline_parser::cli::build_parser(["exe"]).unwrap();

    c.bench_function("help_text", |b| b.iter(|| black_box(&parser).help_text()));
}

criterion_group!(benches, bench_lookups, bench_help_text);
criterion_main!(benches);
