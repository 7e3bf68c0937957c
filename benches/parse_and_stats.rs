use criterion::{Criterion, black_box, criterion_group, criterion_main};
use las_processor::{CurveQuery, LasParser, QueryEngine, StatisticsEngine};

/// Synthetic mud log with 20k rows and five curves
fn synthetic_las(rows: usize) -> Vec<u8> {
    let mut content = String::from(
        "~V\n VERS. 2.0 : version\n~W\n WELL. BENCH-1 : well\n\
         ~C\n DEPT.F : depth\n HC1.ppm : methane\n HC2.ppm : ethane\n\
         HC3.ppm : propane\n TOTAL_GAS.units : total gas\n~A\n",
    );
    for i in 0..rows {
        let depth = 5000.0 + i as f64 * 0.5;
        let hc1 = if i % 97 == 0 {
            -999.25
        } else {
            80.0 + (i % 13) as f64
        };
        content.push_str(&format!(
            "{:.1} {:.2} {:.2} {:.2} {:.2}\n",
            depth,
            hc1,
            10.0 + (i % 7) as f64 * 0.1,
            5.0 + (i % 5) as f64 * 0.1,
            120.0 + (i % 31) as f64
        ));
    }
    content.into_bytes()
}

fn bench_parse(c: &mut Criterion) {
    let bytes = synthetic_las(20_000);
    let parser = LasParser::new();

    c.bench_function("parse 20k rows", |b| {
        b.iter(|| parser.parse(black_box(&bytes)))
    });
}

fn bench_statistics(c: &mut Criterion) {
    let record = LasParser::new().parse(&synthetic_las(20_000)).into_record();
    let stats = StatisticsEngine::default();
    let engine = QueryEngine::default();
    let query = CurveQuery::new()
        .with_curves(["HC1", "TOTAL_GAS"])
        .with_depth_range(6000.0, 12000.0)
        .with_downsample(10);

    c.bench_function("statistics all curves", |b| {
        b.iter(|| stats.compute_all(black_box(&record.matrix)))
    });
    c.bench_function("chart query", |b| {
        b.iter(|| engine.chart(black_box(&record.matrix), &query))
    });
}

criterion_group!(benches, bench_parse, bench_statistics);
criterion_main!(benches);
