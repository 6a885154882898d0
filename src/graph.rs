//! Builds the visibility graph described in the planner's design: nodes are
//! `{start, end} ∪ ⋃ vertices(relevant polygons)`, represented as a flat
//! arena (`nodes`) with an adjacency list indexed by position rather than a
//! `Point`-keyed map of graph objects.

use num_traits::Float;

use crate::geometry::{segment_intersects_polygon, Intersection};
use crate::{Point, Polygon};

/// Node 0 is always `start`; node 1 is always `end`.
pub const START: usize = 0;
pub const END: usize = 1;

/// The visibility graph for one `(start, end, obstacles)` triple: a flat
/// node table plus an adjacency list of mutually-visible node pairs.
#[derive(Debug, Clone)]
pub struct VisibilityGraph<T = f64> {
    nodes: Vec<Point<T>>,
    adjacency: Vec<Vec<usize>>,
}

impl<T: Float> VisibilityGraph<T> {
    /// Builds the graph for `start -> end` against `obstacles`, applying the
    /// relevance filter (only obstacles whose boundary the direct `start ->
    /// end` segment intersects are considered), then the node table and
    /// edge construction steps.
    pub fn build(start: Point<T>, end: Point<T>, obstacles: &[Polygon<T>]) -> Self {
        // Step 1: relevance filter. [start] and [end] are virtual
        // degenerate single-vertex polygons so they share the same
        // construction pathway as real obstacles.
        let mut considered: Vec<Vec<Point<T>>> = vec![vec![start], vec![end]];
        for obstacle in obstacles {
            if segment_intersects_polygon((start, end), obstacle.vertices()) != Intersection::None
            {
                considered.push(obstacle.vertices().to_vec());
            }
        }

        // Step 2: node table. Concatenate vertex lists in considered order,
        // recording each polygon's offset into the flat table, and which
        // polygon each node belongs to (needed in step 4 below).
        let mut nodes = Vec::new();
        let mut offsets = Vec::with_capacity(considered.len());
        let mut polygon_of = Vec::new();
        for (polygon_index, polygon) in considered.iter().enumerate() {
            offsets.push(nodes.len());
            nodes.extend_from_slice(polygon);
            polygon_of.extend(std::iter::repeat(polygon_index).take(polygon.len()));
        }

        let mut adjacency = vec![Vec::new(); nodes.len()];

        // Step 3: polygon edges (cyclic successor/predecessor). Degenerate
        // single-vertex polygons contribute none.
        for (polygon, &offset) in considered.iter().zip(&offsets) {
            let n = polygon.len();
            if n < 2 {
                continue;
            }
            for i in 0..n {
                let u = offset + i;
                let prev = offset + (i + n - 1) % n;
                let next = offset + (i + 1) % n;
                add_edge(&mut adjacency, u, prev);
                add_edge(&mut adjacency, u, next);
            }
        }

        // Step 4: visibility edges. For every pair of nodes from different
        // polygons, connect them iff the open segment between them crosses
        // no considered polygon's interior (touching at a shared vertex is
        // allowed). Same-polygon pairs are skipped here: their only valid
        // edges are the cyclic successor/predecessor ones already added in
        // step 3 — a non-adjacent diagonal of a polygon only ever touches
        // that polygon's own vertices, which `segment_intersects_polygon`
        // classifies as `Touch` rather than `Cross`, so without this check
        // every diagonal would wrongly be added as a visibility edge.
        let total = nodes.len();
        for j in 0..total {
            for i in 0..j {
                if polygon_of[i] == polygon_of[j] {
                    continue;
                }
                if Self::mutually_visible(nodes[i], nodes[j], &considered) {
                    add_edge(&mut adjacency, i, j);
                }
            }
        }

        Self { nodes, adjacency }
    }

    fn mutually_visible(u: Point<T>, v: Point<T>, considered: &[Vec<Point<T>>]) -> bool {
        considered
            .iter()
            .all(|polygon| segment_intersects_polygon((u, v), polygon) != Intersection::Cross)
    }

    /// The node table, in construction order. `nodes()[0]` is start,
    /// `nodes()[1]` is end.
    pub fn nodes(&self) -> &[Point<T>] {
        &self.nodes
    }

    /// Neighboring node indices of `node`.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

fn add_edge(adjacency: &mut [Vec<usize>], a: usize, b: usize) {
    if a == b {
        return;
    }
    if !adjacency[a].contains(&b) {
        adjacency[a].push(b);
    }
    if !adjacency[b].contains(&a) {
        adjacency[b].push(a);
    }
}
