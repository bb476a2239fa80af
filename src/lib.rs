//! Algebraic containers and stack-safe graph traversal.
//!
//! `tailwalk` provides two sum-type containers, [`maybe::Maybe`] for
//! values that may be absent and [`outcome::Outcome`] for computations
//! that may fail, sharing a uniform monadic combinator algebra. On top
//! of them sits [`traversal::BoundedTraversal`], an iterative
//! breadth-first / depth-first walk over an implicit graph whose edges
//! are supplied lazily by a successor function. The walk never
//! recurses, so depth is bounded by heap memory rather than call-stack
//! size.

pub mod functional;
pub mod iter_ext;
pub mod logging;
pub mod maybe;
pub mod outcome;
pub mod traversal;
