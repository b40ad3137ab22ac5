//! Resumable behavior tree engine for tick-driven game agents.
//!
//! Trees are immutable after construction and shared between any number of
//! agents; everything that changes from tick to tick lives in the caller's
//! context and in a per-agent [`RunningPath`]. A node that cannot finish
//! within one tick returns [`Status::Running`], and the path records where
//! evaluation stopped so the next tick re-enters the suspended child instead
//! of restarting the tree from the top.
//!
//! - **Tagged nodes**: composite kinds are enum variants in an arena, not
//!   boxed trait objects, so node identity is a stable [`NodeId`]
//! - **No interior mutation**: evaluation takes `&Tree`, many agents may
//!   share one tree
//! - **Bounded suspension**: the running path has a fixed maximum depth;
//!   overflowing it is a tree-authoring defect, not a runtime condition
//! - **Zero dependencies**: pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: leaf contract, `tick(&self, ctx) -> Status`
//! - [`Status`]: Success, Failure, or Running
//! - [`Tree`] / [`Node`] / [`NodeId`]: arena-backed immutable tree
//! - [`TreeBuilder`]: append-only construction (children before parents)
//! - [`RunningPath`]: per-agent suspension stack consumed by
//!   [`Tree::evaluate`]

pub mod behavior;
pub mod builder;
pub mod running;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use builder::TreeBuilder;
pub use running::{EvaluateError, MAX_RUNNING_DEPTH, RunningEntry, RunningPath};
pub use status::Status;
pub use tree::{Node, NodeId, Tree};
