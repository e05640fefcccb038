use std::sync::Mutex;
use std::thread;

use crate::graph::dense::{DenseGraph, UNREACHABLE};

/// Parallel Dijkstra over the dense matrix.
///
/// Each outer iteration runs two fork-join phases over `threads` scoped
/// workers: a selection scan that picks the unvisited vertex with minimum
/// tentative distance, and a relaxation scan over the selected vertex's
/// weight row. Workers partition `0..n` into contiguous chunks; the scope
/// exit is the join barrier between phases.
///
/// `source` must be in `[0, n)`; the caller checks this before invoking.
pub fn dijkstra_sssp_par(g: &DenseGraph, source: usize, threads: usize) -> Vec<u64> {
    let n = g.n();
    let mut dist = vec![UNREACHABLE; n];
    let mut visited = vec![false; n];
    dist[source] = 0;

    let t = threads.clamp(1, n);
    let chunk = (n + t - 1) / t;

    // At most n-1 selections; stops early once no unvisited vertex has a
    // finite distance (the rest are unreachable).
    for _ in 0..n.saturating_sub(1) {
        let Some(u) = select_min(&dist, &visited, chunk) else {
            break;
        };
        visited[u] = true;

        // Fixed before the relaxation phase forks, so workers only read it.
        let du = dist[u];
        relax_from(&mut dist, &visited, g.row(u), du, chunk);
    }

    dist
}

/// Selection phase: every worker scans its chunk for the unvisited vertex
/// with minimum distance, then merges its local candidate into the shared
/// best under the mutex. The lock guards only the merge, never the scan.
/// Ties go to the smaller index so the choice is deterministic.
fn select_min(dist: &[u64], visited: &[bool], chunk: usize) -> Option<usize> {
    let best: Mutex<(u64, usize)> = Mutex::new((UNREACHABLE, usize::MAX));

    thread::scope(|s| {
        for (ci, (dist_chunk, vis_chunk)) in
            dist.chunks(chunk).zip(visited.chunks(chunk)).enumerate()
        {
            let base = ci * chunk;
            let best = &best;
            s.spawn(move || {
                let mut local_d = UNREACHABLE;
                let mut local_v = usize::MAX;

                for (off, (&d, &vis)) in dist_chunk.iter().zip(vis_chunk).enumerate() {
                    if !vis && d < local_d {
                        local_d = d;
                        local_v = base + off;
                    }
                }

                if local_v != usize::MAX {
                    let mut b = best.lock().unwrap();
                    if local_d < b.0 || (local_d == b.0 && local_v < b.1) {
                        *b = (local_d, local_v);
                    }
                }
            });
        }
    });

    let (d, v) = best.into_inner().unwrap();
    if d == UNREACHABLE {
        None
    } else {
        Some(v)
    }
}

/// Relaxation phase: the distance vector is split into disjoint mutable
/// chunks, one worker each, so no two workers ever write the same slot.
/// `du` is the already-final distance of the selected vertex and `row` its
/// outgoing weights (0 = no edge).
fn relax_from(dist: &mut [u64], visited: &[bool], row: &[u32], du: u64, chunk: usize) {
    thread::scope(|s| {
        for (ci, dist_chunk) in dist.chunks_mut(chunk).enumerate() {
            let base = ci * chunk;
            let vis_chunk = &visited[base..base + dist_chunk.len()];
            let row_chunk = &row[base..base + dist_chunk.len()];
            s.spawn(move || {
                for (off, dv) in dist_chunk.iter_mut().enumerate() {
                    let wt = row_chunk[off];
                    if vis_chunk[off] || wt == 0 {
                        continue;
                    }
                    // saturating: never lets the sentinel wrap into a
                    // false finite distance
                    let nd = du.saturating_add(wt as u64);
                    if nd < *dv {
                        *dv = nd;
                    }
                }
            });
        }
    });
}
