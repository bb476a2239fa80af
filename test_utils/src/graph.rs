//! Random finite graph generation for traversal property tests.
//!
//! [`AcyclicGraph`] generates adjacency lists where every edge points
//! from a lower-numbered node to a higher-numbered one, so any walk is
//! guaranteed to terminate regardless of traversal order. Generation is
//! size-bounded to keep property runs fast and shrink output readable.

use quickcheck::{Arbitrary, Gen};

/// Caps node count and out-degree so the path tree a traversal expands
/// stays small even without deduplication.
const MAX_NODES: usize = 16;
const MAX_CHILDREN: usize = 2;

/// A finite DAG over nodes `0..nodes`, edges sorted ascending per node.
#[derive(Clone, Debug)]
pub struct AcyclicGraph {
    pub nodes: usize,
    pub children: Vec<Vec<usize>>,
}

impl AcyclicGraph {
    /// The successor list of `node`, cloned for use as a traversal
    /// successor function.
    pub fn successors_of(&self, node: usize) -> Vec<usize> {
        self.children[node].clone()
    }

    /// All nodes, in identifier order, for seeding a traversal.
    pub fn all_nodes(&self) -> Vec<usize> {
        (0..self.nodes).collect()
    }
}

impl Arbitrary for AcyclicGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let nodes = usize::arbitrary(g) % MAX_NODES + 1;
        let mut children = vec![Vec::new(); nodes];
        for (node, list) in children.iter_mut().enumerate() {
            let later: Vec<usize> = (node + 1..nodes).collect();
            if later.is_empty() {
                continue;
            }
            for _ in 0..usize::arbitrary(g) % (MAX_CHILDREN + 1) {
                if let Some(&child) = g.choose(&later) {
                    list.push(child);
                }
            }
            list.sort_unstable();
            list.dedup();
        }
        AcyclicGraph { nodes, children }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Drop the highest-numbered node; every edge to it vanishes
        // with it, so the invariant is preserved.
        if self.nodes <= 1 {
            return quickcheck::empty_shrinker();
        }
        let nodes = self.nodes - 1;
        let children: Vec<Vec<usize>> = self.children[..nodes]
            .iter()
            .map(|list| list.iter().copied().filter(|&c| c < nodes).collect())
            .collect();
        Box::new(std::iter::once(AcyclicGraph { nodes, children }))
    }
}
