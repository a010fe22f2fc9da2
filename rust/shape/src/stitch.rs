// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Contour stitching.
//!
//! A style bucket holds edges in discovery order, pointing in whichever
//! absolute direction they were decoded. Stitching reorders the list into
//! one or more maximal connected traversals where consecutive edges share an
//! endpoint, reversing stray edges so the whole contour runs one way.
//!
//! Connectivity is resolved through a pair of endpoint adjacency maps:
//! `forward` keyed by `edge.from` and `backward` keyed by `edge.to`. A
//! continuation is first sought in `forward`; a `backward` hit means the
//! candidate was decoded against the traversal direction and is reversed in
//! place (and re-keyed) before being consumed on the retry. Dangling
//! connectivity is not an error: the traversal ends and a new one starts
//! from the remaining pool, so degenerate shapes still render their
//! fillable pieces.

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::edge::Edge;
use crate::Point;

/// Endpoint adjacency over the edge pool. Values are pool indices in decode
/// order; the first live index wins ties, which keeps stitching
/// deterministic.
#[derive(Default)]
struct Adjacency {
    forward: FxHashMap<Point, Vec<usize>>,
    backward: FxHashMap<Point, Vec<usize>>,
}

impl Adjacency {
    fn build(pool: &[Option<Edge>]) -> Self {
        let mut maps = Self::default();
        for (idx, edge) in pool.iter().enumerate() {
            let edge = edge.as_ref().unwrap();
            maps.forward.entry(edge.from).or_default().push(idx);
            maps.backward.entry(edge.to).or_default().push(idx);
        }
        maps
    }

    /// First edge starting at `point`, if any.
    fn next_from(&self, point: Point) -> Option<usize> {
        self.forward.get(&point).and_then(|v| v.first()).copied()
    }

    /// First edge ending at `point`, if any.
    fn next_into(&self, point: Point) -> Option<usize> {
        self.backward.get(&point).and_then(|v| v.first()).copied()
    }

    /// Drops an edge from both maps.
    fn remove(&mut self, idx: usize, edge: &Edge) {
        Self::remove_key(&mut self.forward, edge.from, idx);
        Self::remove_key(&mut self.backward, edge.to, idx);
    }

    /// Re-keys an edge after an in-place reversal.
    fn rekey(&mut self, idx: usize, old: &Edge, new: &Edge) {
        self.remove(idx, old);
        self.forward.entry(new.from).or_default().push(idx);
        self.backward.entry(new.to).or_default().push(idx);
    }

    fn remove_key(map: &mut FxHashMap<Point, Vec<usize>>, key: Point, idx: usize) {
        if let Some(indices) = map.get_mut(&key) {
            indices.retain(|&i| i != idx);
            if indices.is_empty() {
                map.remove(&key);
            }
        }
    }
}

/// Reorders one style list into connected traversals.
///
/// The output is the same multiset of edges (modulo in-place reversals),
/// arranged so that `out[i].to == out[i + 1].from` within each traversal.
pub fn stitch(edges: Vec<Edge>) -> Vec<Edge> {
    if edges.len() < 2 {
        return edges;
    }

    let total = edges.len();
    let mut pool: Vec<Option<Edge>> = edges.into_iter().map(Some).collect();
    let mut maps = Adjacency::build(&pool);
    let mut out = Vec::with_capacity(total);

    // Rolling scan position for new sub-traversal starts; indices below it
    // are consumed.
    let mut scan = 0;
    let mut prev: Option<Edge> = None;

    while out.len() < total {
        match prev {
            None => {
                while pool[scan].is_none() {
                    scan += 1;
                }
                let edge = pool[scan].take().unwrap();
                maps.remove(scan, &edge);
                out.push(edge);
                prev = Some(edge);
            }
            Some(previous) => {
                let at = previous.to;
                if let Some(idx) = maps.next_from(at) {
                    let edge = pool[idx].take().unwrap();
                    maps.remove(idx, &edge);
                    out.push(edge);
                    prev = Some(edge);
                } else if let Some(idx) = maps.next_into(at) {
                    // Candidate runs the wrong way: flip it in place and let
                    // the next iteration pick it up as a forward match.
                    let old = pool[idx].unwrap();
                    let new = old.reversed_with_fill(old.fill_style);
                    trace!(?at, "reversing edge to continue traversal");
                    maps.rekey(idx, &old, &new);
                    pool[idx] = Some(new);
                } else {
                    // Dangling endpoint: close this traversal, start fresh.
                    prev = None;
                }
            }
        }
    }

    debug_assert_eq!(out.len(), total);
    debug!(edges = total, "stitched style list");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::EdgeKind;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn line(from: Point, to: Point) -> Edge {
        Edge::line(from, to, 1, 0)
    }

    #[test]
    fn test_triangle_already_ordered() {
        let edges = vec![
            line(p(0, 0), p(10, 0)),
            line(p(10, 0), p(10, 10)),
            line(p(10, 10), p(0, 0)),
        ];
        let out = stitch(edges.clone());
        assert_eq!(out, edges);
    }

    #[test]
    fn test_triangle_shuffled() {
        let edges = vec![
            line(p(0, 0), p(10, 0)),
            line(p(10, 10), p(0, 0)),
            line(p(10, 0), p(10, 10)),
        ];
        let out = stitch(edges);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].from, p(0, 0));
        for pair in out.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert_eq!(out[2].to, out[0].from);
    }

    #[test]
    fn test_reverses_misdirected_edge() {
        // Middle edge decoded against the traversal direction.
        let edges = vec![
            line(p(0, 0), p(10, 0)),
            line(p(10, 10), p(10, 0)),
            line(p(10, 10), p(0, 0)),
        ];
        let out = stitch(edges);
        assert_eq!(out.len(), 3);
        for pair in out.windows(2) {
            assert_eq!(pair[0].to, pair[1].from);
        }
        assert!(out[1].reversed);
        assert_eq!(out[1].from, p(10, 0));
        assert_eq!(out[1].to, p(10, 10));
    }

    #[test]
    fn test_conservation_multiset() {
        let edges = vec![
            line(p(0, 0), p(10, 0)),
            line(p(10, 10), p(10, 0)),
            line(p(10, 10), p(0, 0)),
            line(p(50, 50), p(60, 50)),
        ];
        let out = stitch(edges.clone());
        assert_eq!(out.len(), edges.len());
        // Every input edge appears exactly once, possibly reversed.
        for edge in &edges {
            let found = out
                .iter()
                .filter(|o| {
                    (o.from == edge.from && o.to == edge.to)
                        || (o.from == edge.to && o.to == edge.from)
                })
                .count();
            assert_eq!(found, 1, "edge {:?} lost or duplicated", edge);
        }
    }

    #[test]
    fn test_dangling_edge_starts_new_traversal() {
        let edges = vec![
            line(p(0, 0), p(10, 0)),
            line(p(100, 100), p(110, 100)),
        ];
        let out = stitch(edges);
        assert_eq!(out.len(), 2);
        // Disconnected: second traversal starts at the dangling edge.
        assert_ne!(out[0].to, out[1].from);
    }

    #[test]
    fn test_quad_control_survives_reversal() {
        let edges = vec![
            line(p(0, 0), p(10, 0)),
            Edge::quad(p(0, 0), p(12, 8), p(10, 0), 1, 0),
        ];
        let out = stitch(edges);
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].from, p(10, 0));
        assert_eq!(out[1].kind, EdgeKind::Quad { control: p(12, 8) });
    }

    #[test]
    fn test_empty_and_single() {
        assert!(stitch(Vec::new()).is_empty());
        let single = vec![line(p(0, 0), p(1, 1))];
        assert_eq!(stitch(single.clone()), single);
    }
}
