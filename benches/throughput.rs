use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::{Value, json};

use watchmark_convert::convert::{self, ConvertOptions};
use watchmark_convert::database;
use watchmark_convert::history::legacy::LegacyTimestamps;

fn synthetic_history(entries: usize, unique: usize) -> Vec<Value> {
    (0..entries)
        .map(|i| {
            if i % 50 == 0 {
                json!({"title": "Viewed Ads On YouTube Homepage", "time": "2023-11-18T20:51:04.917Z"})
            } else {
                json!({
                    "header": "YouTube",
                    "title": format!("Watched Video number {}", i % unique),
                    "titleUrl": format!("https://www.youtube.com/watch?v=vid{:08}", i % unique),
                    "time": format!("2023-11-{:02}T20:51:04.{:03}Z", 1 + i % 28, i % 1000),
                })
            }
        })
        .collect()
}

fn bench_convert(c: &mut Criterion) {
    let options = ConvertOptions {
        legacy_timestamps: LegacyTimestamps::Substitute(0),
    };
    let mut group = c.benchmark_group("convert");
    for &size in &[1_000usize, 50_000] {
        let history = synthetic_history(size, size / 3);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &history, |b, history| {
            b.iter(|| convert::convert(history, &options).expect("convert"));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let options = ConvertOptions {
        legacy_timestamps: LegacyTimestamps::Substitute(0),
    };
    let records = convert::convert(&synthetic_history(50_000, 20_000), &options)
        .expect("convert")
        .records;
    c.bench_function("encode_records", |b| {
        b.iter(|| database::encode_records(&records).expect("encode"));
    });
}

criterion_group!(benches, bench_convert, bench_encode);
criterion_main!(benches);
