pub mod alg;
pub mod compare_dist;
pub mod graph;
pub mod report;

pub use alg::sssp::dijkstra_sssp;
pub use alg::sssp_par::dijkstra_sssp_par;
pub use compare_dist::compare_sssp_u64;
pub use graph::dense::{DenseGraph, UNREACHABLE};
pub use graph::parse::parse_matrix;
pub use graph::stats::{degree_summary, validate_dense};
pub use report::write_report;
