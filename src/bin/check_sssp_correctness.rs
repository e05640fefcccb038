use petgraph::algo::dijkstra;
use petgraph::graph::DiGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dense_sssp::graph::dense::{DenseGraph, UNREACHABLE};
use dense_sssp::graph::stats::{degree_summary, validate_dense};
use dense_sssp::{compare_sssp_u64, dijkstra_sssp, dijkstra_sssp_par};

fn random_dense(n: usize, density: f64, maxw: u32, seed: u64) -> DenseGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut w = vec![0u32; n * n];
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen::<f64>() < density {
                w[i * n + j] = rng.gen_range(1..=maxw);
            }
        }
    }
    DenseGraph { n, w }
}

fn petgraph_dist(g: &DenseGraph, source: usize) -> Vec<u64> {
    let mut pg = DiGraph::<(), u64>::new();
    let idx: Vec<_> = (0..g.n()).map(|_| pg.add_node(())).collect();
    for i in 0..g.n() {
        for j in 0..g.n() {
            let w = g.weight(i, j);
            if w > 0 {
                pg.add_edge(idx[i], idx[j], w as u64);
            }
        }
    }

    let cost = dijkstra(&pg, idx[source], None, |e| *e.weight());
    (0..g.n())
        .map(|v| cost.get(&idx[v]).copied().unwrap_or(UNREACHABLE))
        .collect()
}

fn main() {
    // args: <n> <source> <threads> <density> <seed>, all optional
    let n: usize = std::env::args().nth(1).unwrap_or("500".into()).parse().expect("bad n");
    let source: usize = std::env::args().nth(2).unwrap_or("0".into()).parse().expect("bad source");
    let threads: usize = std::env::args().nth(3).unwrap_or("4".into()).parse().expect("bad threads");
    let density: f64 = std::env::args().nth(4).unwrap_or("0.05".into()).parse().expect("bad density");
    let seed: u64 = std::env::args().nth(5).unwrap_or("1".into()).parse().expect("bad seed");

    let g = random_dense(n, density, 100, seed);
    validate_dense(&g).expect("matrix invalid");

    let (min_d, max_d, avg_d) = degree_summary(&g);
    println!(
        "[GRAPH] n={} m={} degree min/max/avg = {}/{}/{:.2}",
        g.n(),
        g.m(),
        min_d,
        max_d,
        avg_d
    );
    assert!(source < g.n(), "source {} out of range", source);

    println!("[CPU] Running sequential baseline...");
    let dist_seq = dijkstra_sssp(&g, source);

    println!("[PAR] Running parallel engine with {threads} threads...");
    let dist_par = dijkstra_sssp_par(&g, source, threads);

    println!("[ORACLE] Running petgraph dijkstra...");
    let dist_pg = petgraph_dist(&g, source);

    println!("[CHECK] parallel vs sequential:");
    let m1 = compare_sssp_u64(&dist_seq, &dist_par).expect("compare failed");
    println!("[CHECK] parallel vs petgraph:");
    let m2 = compare_sssp_u64(&dist_pg, &dist_par).expect("compare failed");

    if m1 == 0 && m2 == 0 {
        println!("[PASS] all dist arrays match exactly.");
    } else {
        println!("[FAIL] mismatches: vs_seq={m1} vs_petgraph={m2}");
        std::process::exit(1);
    }
}
