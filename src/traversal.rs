//! Iterative traversal of an implicit graph.
//!
//! [`BoundedTraversal`] walks nodes reachable from a root sequence
//! through a caller-supplied successor function, in FIFO
//! (breadth-first) or LIFO (depth-first) order. The walk is driven by
//! an explicit frontier collection instead of the call stack, so its
//! depth is bounded only by heap memory.
//!
//! ```
//! use tailwalk::traversal::{BoundedTraversal, TraversalMode};
//!
//! let mut order = Vec::new();
//! let mut walk = BoundedTraversal::new(
//!     [1u32],
//!     |_| true,
//!     |&n| if n < 3 { vec![n + 1] } else { vec![] },
//!     TraversalMode::Queue,
//! );
//! walk.execute(|&n| order.push(n));
//! assert_eq!(order, vec![1, 2, 3]);
//! ```
//!
//! The engine performs no cycle detection. On a cyclic or infinite
//! graph the caller must bound the walk, typically with a visited-set
//! closure wrapped around the successor function.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::maybe::Maybe;

/// Raised when parsing an unrecognized ordering mode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported traversal mode: {0}")]
pub struct UnsupportedModeError(pub String);

/// Frontier discipline for a [`BoundedTraversal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TraversalMode {
    /// FIFO frontier: breadth-first visitation.
    #[default]
    Queue,
    /// LIFO frontier: depth-first visitation. Children are pushed in
    /// successor order and popped in reverse, so sibling visitation
    /// order is reversed relative to the successor function's output.
    Stack,
}

impl fmt::Display for TraversalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraversalMode::Queue => f.write_str("queue"),
            TraversalMode::Stack => f.write_str("stack"),
        }
    }
}

impl FromStr for TraversalMode {
    type Err = UnsupportedModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "queue" => Ok(TraversalMode::Queue),
            "stack" => Ok(TraversalMode::Stack),
            _ => Err(UnsupportedModeError(s.to_string())),
        }
    }
}

/// A node the engine can ask about presence.
///
/// An absent node is still visited, but its successors are never
/// requested; the successor function can therefore assume it always
/// receives a present node. Types without a notion of absence take the
/// default and are always expanded; custom node types opt in with an
/// empty impl:
///
/// ```
/// use tailwalk::traversal::Node;
///
/// struct Page { depth: u32 }
/// impl Node for Page {}
/// ```
pub trait Node {
    /// Whether the node carries a value worth expanding.
    fn is_present(&self) -> bool {
        true
    }
}

impl<T> Node for Maybe<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T> Node for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<T: Node + ?Sized> Node for &T {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(impl Node for $ty {})*
    };
}

always_present! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char,
    str, String, (),
}

/// An iterative walk over the nodes reachable from a root sequence.
///
/// Construction fixes the roots (after a one-time filter pass), the
/// successor function, and the frontier discipline; [`execute`] then
/// performs a full walk with a visitor callback. Each execution owns a
/// fresh frontier, so the same configuration can be executed again and
/// produces an identical visitation sequence.
///
/// The root filter applies to the initial sequence only: a node
/// excluded from the seed is still visited if the successor function
/// later produces it. This asymmetry is intentional and load-bearing
/// for callers that seed from an over-broad collection but want the
/// walk itself unclipped.
///
/// [`execute`]: BoundedTraversal::execute
pub struct BoundedTraversal<T, S> {
    roots: Vec<T>,
    successors: S,
    mode: TraversalMode,
}

impl<T, S, I> BoundedTraversal<T, S>
where
    T: Node,
    S: FnMut(&T) -> I,
    I: IntoIterator<Item = T>,
{
    /// Builds a traversal from roots, a seed filter, a successor
    /// function, and a frontier mode.
    ///
    /// `filter` runs once, here, over the root sequence; nodes
    /// discovered later through `successors` are not re-filtered.
    pub fn new(
        roots: impl IntoIterator<Item = T>,
        filter: impl FnMut(&T) -> bool,
        successors: S,
        mode: TraversalMode,
    ) -> Self {
        let roots: Vec<T> = roots.into_iter().filter(filter).collect();
        Self { roots, successors, mode }
    }

    /// The frontier discipline this traversal was built with.
    pub fn mode(&self) -> TraversalMode {
        self.mode
    }

    /// The filtered root sequence seeding each execution.
    pub fn roots(&self) -> &[T] {
        &self.roots
    }

    /// Walks the full graph, invoking `visit` exactly once per node
    /// removed from the frontier.
    ///
    /// Panics raised inside `visit` or the successor function propagate
    /// unmodified; the engine catches nothing. Termination on cyclic or
    /// infinite graphs is the caller's responsibility.
    pub fn execute(&mut self, mut visit: impl FnMut(&T))
    where
        T: Clone,
    {
        self.try_execute(|node| -> Result<(), Infallible> {
            visit(node);
            Ok(())
        })
        .unwrap_or_else(|never| match never {})
    }

    /// Fallible-visitor form of [`execute`]: stops at the first error,
    /// which propagates unmodified. The partially consumed frontier is
    /// dropped; a failed traversal is not resumable.
    ///
    /// [`execute`]: BoundedTraversal::execute
    pub fn try_execute<Er>(
        &mut self,
        mut visit: impl FnMut(&T) -> Result<(), Er>,
    ) -> Result<(), Er>
    where
        T: Clone,
    {
        debug!(
            "starting {} traversal with {} root(s)",
            self.mode,
            self.roots.len()
        );
        let visited = match self.mode {
            TraversalMode::Queue => self.run_queue(&mut visit)?,
            TraversalMode::Stack => self.run_stack(&mut visit)?,
        };
        debug!("traversal visited {} node(s)", visited);
        Ok(())
    }

    fn run_queue<Er>(
        &mut self,
        visit: &mut impl FnMut(&T) -> Result<(), Er>,
    ) -> Result<usize, Er>
    where
        T: Clone,
    {
        let mut frontier: VecDeque<T> = self.roots.iter().cloned().collect();
        let mut visited = 0usize;
        while let Some(node) = frontier.pop_front() {
            visit(&node)?;
            visited += 1;
            if node.is_present() {
                frontier.extend((self.successors)(&node));
            }
        }
        Ok(visited)
    }

    fn run_stack<Er>(
        &mut self,
        visit: &mut impl FnMut(&T) -> Result<(), Er>,
    ) -> Result<usize, Er>
    where
        T: Clone,
    {
        // Seeded in root order, so the last root pops first, exactly as
        // children do.
        let mut frontier: Vec<T> = self.roots.iter().cloned().collect();
        let mut visited = 0usize;
        while let Some(node) = frontier.pop() {
            visit(&node)?;
            visited += 1;
            if node.is_present() {
                frontier.extend((self.successors)(&node));
            }
        }
        Ok(visited)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{self, Maybe};

    fn collect<T, S, I>(walk: &mut BoundedTraversal<T, S>) -> Vec<T>
    where
        T: Node + Clone,
        S: FnMut(&T) -> I,
        I: IntoIterator<Item = T>,
    {
        let mut order = Vec::new();
        walk.execute(|node| order.push(node.clone()));
        order
    }

    #[test]
    fn queue_mode_visits_breadth_first() {
        let mut walk = BoundedTraversal::new(
            [1u32],
            |_| true,
            |&n| if n < 3 { vec![n + 1] } else { vec![] },
            TraversalMode::Queue,
        );
        assert_eq!(collect(&mut walk), vec![1, 2, 3]);
    }

    #[test]
    fn stack_mode_reverses_sibling_order() {
        let mut walk = BoundedTraversal::new(
            [1u32],
            |_| true,
            |&n| if n == 1 { vec![2, 3] } else { vec![] },
            TraversalMode::Stack,
        );
        assert_eq!(collect(&mut walk), vec![1, 3, 2]);
    }

    #[test]
    fn queue_mode_preserves_sibling_order() {
        let mut walk = BoundedTraversal::new(
            [1u32],
            |_| true,
            |&n| if n == 1 { vec![2, 3] } else { vec![] },
            TraversalMode::Queue,
        );
        assert_eq!(collect(&mut walk), vec![1, 2, 3]);
    }

    #[test]
    fn stack_mode_visits_later_roots_first() {
        let mut walk = BoundedTraversal::new(
            [1u32, 2],
            |_| true,
            |_| vec![],
            TraversalMode::Stack,
        );
        assert_eq!(collect(&mut walk), vec![2, 1]);
    }

    #[test]
    fn filter_applies_to_the_seed_only() {
        // 2 is dropped from the seed...
        let mut walk = BoundedTraversal::new(
            [1u32, 2, 3],
            |&n| n != 2,
            |_| vec![],
            TraversalMode::Queue,
        );
        assert_eq!(collect(&mut walk), vec![1, 3]);

        // ...but the same value reached as a child is still visited.
        let mut walk = BoundedTraversal::new(
            [1u32],
            |&n| n != 2,
            |&n| if n == 1 { vec![2] } else { vec![] },
            TraversalMode::Queue,
        );
        assert_eq!(collect(&mut walk), vec![1, 2]);
    }

    #[test]
    fn absent_nodes_are_visited_but_never_expanded() {
        let mut walk = BoundedTraversal::new(
            [maybe::some(1u32), Maybe::None],
            |_| true,
            |node| {
                assert!(node.is_some(), "successor ran on an absent node");
                vec![]
            },
            TraversalMode::Queue,
        );
        let order = collect(&mut walk);
        assert_eq!(order, vec![maybe::some(1), Maybe::None]);
    }

    #[test]
    fn try_execute_stops_at_the_first_error() {
        let mut seen = Vec::new();
        let mut walk = BoundedTraversal::new(
            [1u32],
            |_| true,
            |&n| vec![n + 1],
            TraversalMode::Queue,
        );
        let result = walk.try_execute(|&n| {
            seen.push(n);
            if n == 3 { Err("hit 3") } else { Ok(()) }
        });
        assert_eq!(result, Err("hit 3"));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn re_execution_yields_the_same_sequence() {
        let mut walk = BoundedTraversal::new(
            [1u32, 4],
            |_| true,
            |&n| if n < 3 { vec![n + 1] } else { vec![] },
            TraversalMode::Queue,
        );
        let first = collect(&mut walk);
        let second = collect(&mut walk);
        assert_eq!(first, second);
    }

    #[test]
    fn mode_parsing() {
        assert_eq!("queue".parse::<TraversalMode>(), Ok(TraversalMode::Queue));
        assert_eq!("Stack".parse::<TraversalMode>(), Ok(TraversalMode::Stack));
        assert_eq!(
            "breadth".parse::<TraversalMode>(),
            Err(UnsupportedModeError("breadth".to_string()))
        );
        assert_eq!(TraversalMode::Queue.to_string(), "queue");
    }
}
