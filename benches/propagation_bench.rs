/// Benchmarks for the Taintrace ingestion and propagation pipeline.
///
/// Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use taintrace::domain::callgraph::CallGraph;
use taintrace::domain::dot_ingest::DotIngestor;
use taintrace::domain::report::build_report;
use taintrace::domain::taint::propagate;

// ═══════════════════════════════════════════════════════════════════════════
// Synthetic Graph Generators
// ═══════════════════════════════════════════════════════════════════════════

/// Graph description for a layered DAG: `layers` layers of `width` functions,
/// every function calling every function one layer down.
fn layered_graph_text(layers: usize, width: usize) -> String {
    let mut lines = vec!["digraph callgraph {".to_string()];
    for layer in 0..layers {
        for i in 0..width {
            lines.push(format!(
                "    l{}_{} [shape=record,label=\"{{bench::layer{}::fn_{}}}\"];",
                layer, i, layer, i
            ));
        }
    }
    for layer in 1..layers {
        for caller in 0..width {
            for callee in 0..width {
                lines.push(format!("    l{}_{} -> l{}_{};", layer - 1, caller, layer, callee));
            }
        }
    }
    lines.push("}".to_string());
    lines.join("\n")
}

/// A single call cycle of `len` functions, worst case for naive traversal.
fn cycle_graph(len: usize) -> CallGraph {
    let mut text = vec!["digraph callgraph {".to_string()];
    for i in 0..len {
        text.push(format!("    n{} [shape=record,label=\"{{bench::fn_{}}}\"];", i, i));
    }
    for i in 0..len {
        text.push(format!("    n{} -> n{};", i, (i + 1) % len));
    }
    text.push("}".to_string());
    DotIngestor::new().ingest(text.join("\n").lines())
}

/// Seed ids for the bottom layer of a layered graph.
fn bottom_layer_seeds(layers: usize, width: usize) -> Vec<String> {
    (0..width).map(|i| format!("l{}_{}", layers - 1, i)).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Ingestion
// ═══════════════════════════════════════════════════════════════════════════

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_ingest");

    for width in [10, 25, 50] {
        let layers = 10;
        let text = layered_graph_text(layers, width);
        let line_count = text.lines().count();
        group.throughput(Throughput::Elements(line_count as u64));

        group.bench_with_input(BenchmarkId::new("width", width), &text, |b, text| {
            b.iter(|| DotIngestor::new().ingest(black_box(text).lines()))
        });
    }

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Propagation
// ═══════════════════════════════════════════════════════════════════════════

fn bench_propagation_layered(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate/layered");
    group.sample_size(30);

    for width in [10, 25, 50] {
        let layers = 10;
        let text = layered_graph_text(layers, width);
        let seeds = bottom_layer_seeds(layers, width);
        group.throughput(Throughput::Elements(seeds.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("width", width),
            &(text, seeds),
            |b, (text, seeds)| {
                b.iter(|| {
                    // Rebuild per iteration: propagation mutates the graph
                    let mut graph = DotIngestor::new().ingest(text.lines());
                    propagate(&mut graph, black_box(seeds));
                    graph
                })
            },
        );
    }

    group.finish();
}

fn bench_propagation_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagate/cycle");
    group.sample_size(30);

    for len in [100, 1000, 5000] {
        let seeds = vec!["n0".to_string()];

        group.bench_with_input(BenchmarkId::new("len", len), &len, |b, &len| {
            b.iter(|| {
                let mut graph = cycle_graph(len);
                propagate(&mut graph, black_box(&seeds));
                graph
            })
        });
    }

    group.finish();
}

// ═══════════════════════════════════════════════════════════════════════════
// Reporting
// ═══════════════════════════════════════════════════════════════════════════

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");

    let layers = 10;
    let width = 50;
    let text = layered_graph_text(layers, width);
    let seeds = bottom_layer_seeds(layers, width);
    let mut graph = DotIngestor::new().ingest(text.lines());
    propagate(&mut graph, &seeds);

    group.bench_function("layered_10x50", |b| {
        b.iter(|| build_report(black_box(&graph), "bench"))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ingest,
    bench_propagation_layered,
    bench_propagation_cycle,
    bench_report
);
criterion_main!(benches);
