//! Benchmarks for the vkoload loader; see `benches/loader_bench.rs`.
