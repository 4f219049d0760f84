use clausewitz_core::{parse, stringify, tokenize, StringifyOptions};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// ============================================================================
// Test Data: Varying Complexity and Size
// ============================================================================

const TINY_SCRIPT: &str = "value = 42";

const SMALL_SCRIPT: &str = r#"
name = "test"
version = 1.5
enabled = yes
weights = { 10 20 30 }
"#;

const MEDIUM_SCRIPT: &str = r#"
galaxy = {
	name = "Perseus Arm"
	shape = spiral
	radius = 450
	core_radius_perc = 0.25

	system = {
		id = "0"
		name = "Sol"
		position = { x = -4 y = 12 }
	}
	system = {
		id = "1"
		name = "Alpha Centauri"
		position = { x = -2 y = 9 }
		spawn_weight = 1.5
	}

	hyperlane = { from = "0" to = "1" }
	nebula_weights = { 10 25 40 25 }
}

settings = {
	difficulty = captain
	ironman = no
	crisis_strength >= 2.5
}
"#;

fn large_script() -> String {
    let mut script = String::from("galaxy = {\n\tname = \"Stress Field\"\n");
    for i in 0..200 {
        script.push_str(&format!(
            "\tsystem = {{\n\t\tid = \"{i}\"\n\t\tposition = {{ x = {} y = {} }}\n\t\tspawn_weight = {}.5\n\t}}\n",
            i % 50,
            i % 80,
            i % 4
        ));
    }
    script.push_str("}\n");
    script
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_tokenize(c: &mut Criterion) {
    let large = large_script();
    let mut group = c.benchmark_group("tokenize");
    for (name, script) in [
        ("tiny", TINY_SCRIPT),
        ("small", SMALL_SCRIPT),
        ("medium", MEDIUM_SCRIPT),
        ("large", large.as_str()),
    ] {
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), script, |b, script| {
            b.iter(|| tokenize(black_box(script)).unwrap());
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let large = large_script();
    let mut group = c.benchmark_group("parse");
    for (name, script) in [
        ("tiny", TINY_SCRIPT),
        ("small", SMALL_SCRIPT),
        ("medium", MEDIUM_SCRIPT),
        ("large", large.as_str()),
    ] {
        group.throughput(Throughput::Bytes(script.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), script, |b, script| {
            b.iter(|| parse(black_box(script)).unwrap());
        });
    }
    group.finish();
}

fn bench_stringify(c: &mut Criterion) {
    let large = large_script();
    let options = StringifyOptions::default();
    let mut group = c.benchmark_group("stringify");
    for (name, script) in [("medium", MEDIUM_SCRIPT), ("large", large.as_str())] {
        let doc = parse(script).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(name), &doc, |b, doc| {
            b.iter(|| stringify(black_box(doc), &options));
        });
    }
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let options = StringifyOptions::default();
    c.bench_function("roundtrip/medium", |b| {
        b.iter(|| {
            let doc = parse(black_box(MEDIUM_SCRIPT)).unwrap();
            let text = stringify(&doc, &options);
            parse(black_box(&text)).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_tokenize,
    bench_parse,
    bench_stringify,
    bench_roundtrip
);
criterion_main!(benches);
