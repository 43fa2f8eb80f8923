use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mmparser::parser::{FilenameParser, MmParser};
use mmparser::types::DatasetType;

/// Build a listing of realistic acquisition filenames
fn filenames(count: usize) -> Vec<String> {
    let channels = ["A488", "A647", "A750", "DAPI", "Cy5"];
    (0..count)
        .map(|i| {
            format!(
                "Cos7_Microtubules_{}_{}_MMStack_Pos{}_locResults.dat",
                channels[i % channels.len()],
                i,
                i % 16
            )
        })
        .collect()
}

/// Benchmark the pure parser over listings of increasing size
fn bench_parse_listing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_listing");
    let parser = FilenameParser::default();

    for count in [100, 1_000, 10_000] {
        let names = filenames(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &names, |b, names| {
            b.iter(|| {
                for name in names {
                    black_box(parser.parse(black_box(name), DatasetType::Localizations).unwrap());
                }
            });
        });
    }

    group.finish();
}

/// Benchmark the widefield grammar, which runs an extra tag search
fn bench_widefield(c: &mut Criterion) {
    let parser = FilenameParser::default();
    let name = "__HeLa_Control__FISH___WF__173_MMStack_Pos0.ome.tif";

    c.bench_function("widefield_single", |b| {
        b.iter(|| black_box(parser.parse(black_box(name), DatasetType::WidefieldImage).unwrap()));
    });
}

/// Benchmark the stateful wrapper including dataset publication
fn bench_mm_parser(c: &mut Criterion) {
    let mut parser = MmParser::new();
    let name = "Cos7_Microtubules_A647_3_MMStack_Pos0_locResults.dat";

    c.bench_function("mm_parser_parse_and_load", |b| {
        b.iter(|| {
            let dataset = parser
                .parse_filename(black_box(name), DatasetType::Localizations, true)
                .unwrap();
            black_box(dataset.ids().acq_id);
        });
    });
}

criterion_group!(benches, bench_parse_listing, bench_widefield, bench_mm_parser);
criterion_main!(benches);
