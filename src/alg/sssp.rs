use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::graph::dense::{DenseGraph, UNREACHABLE};

/// Sequential Dijkstra over the dense matrix. Baseline oracle for the
/// parallel engine.
pub fn dijkstra_sssp(g: &DenseGraph, source: usize) -> Vec<u64> {
    let n = g.n();
    let mut dist = vec![UNREACHABLE; n];
    dist[source] = 0;

    let mut pq: BinaryHeap<(Reverse<u64>, usize)> = BinaryHeap::new();
    pq.push((Reverse(0), source));

    while let Some((Reverse(dv), v)) = pq.pop() {
        if dv != dist[v] {
            continue; // stale entry
        }

        for (to, &wt) in g.row(v).iter().enumerate() {
            if wt == 0 {
                continue; // no edge
            }

            let nd = dv.saturating_add(wt as u64);
            if nd < dist[to] {
                dist[to] = nd;
                pq.push((Reverse(nd), to));
            }
        }
    }

    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_takes_indirect_path() {
        let g = DenseGraph {
            n: 3,
            w: vec![0, 4, 1, 4, 0, 2, 1, 2, 0],
        };
        // 0 -> 2 -> 1 costs 3, beats the direct edge of 4
        assert_eq!(dijkstra_sssp(&g, 0), vec![0, 3, 1]);
    }

    #[test]
    fn disconnected_vertex_stays_unreachable() {
        let g = DenseGraph {
            n: 3,
            w: vec![0, 1, 0, 1, 0, 0, 0, 0, 0],
        };
        assert_eq!(dijkstra_sssp(&g, 0), vec![0, 1, UNREACHABLE]);
    }

    #[test]
    fn single_vertex() {
        let g = DenseGraph { n: 1, w: vec![0] };
        assert_eq!(dijkstra_sssp(&g, 0), vec![0]);
    }
}
