//! Arena-backed immutable trees and their resumable evaluation.
//!
//! A [`Tree`] owns every node in a flat arena; composites reference children
//! by [`NodeId`]. Once built the tree never changes; evaluation threads all
//! mutation through the caller's context and a per-agent
//! [`RunningPath`], so one tree can drive any number of agents.

use crate::behavior::Behavior;
use crate::running::{EvaluateError, RunningEntry, RunningPath};
use crate::status::Status;

/// Stable identity of a node within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates an id from a raw arena index.
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Raw arena index.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A behavior tree node, dispatched by tag.
///
/// Leaves carry a payload `L` implementing [`Behavior`]; composites control
/// the execution flow of their children:
/// - `Sequence` is AND logic: fail fast, succeed when all children succeed
/// - `Selector` is OR logic: succeed fast, fail when all children fail
/// - `Inverter` and `AlwaysSucceed` decorate a single child
#[derive(Debug, Clone)]
pub enum Node<L> {
    /// Concrete action or query; returns a status immediately.
    Leaf(L),
    /// Evaluates children in authored order until one fails.
    Sequence(Vec<NodeId>),
    /// Evaluates children in authored order until one succeeds.
    Selector(Vec<NodeId>),
    /// Inverts the child's terminal status; `Running` passes through.
    Inverter(NodeId),
    /// Maps the child's `Failure` to `Success`; `Running` passes through.
    AlwaysSucceed(NodeId),
}

/// Immutable, shareable behavior tree.
///
/// Built once by [`TreeBuilder`](crate::TreeBuilder) and typically wrapped
/// in an `Arc` so many agents hold the same instance. Invariant: nodes are
/// appended children-first, so every composite references ids smaller than
/// its own and the structure is acyclic by construction.
#[derive(Debug, Clone)]
pub struct Tree<L> {
    nodes: Vec<Node<L>>,
    root: NodeId,
}

impl<L> Tree<L> {
    pub(crate) fn from_parts(nodes: Vec<Node<L>>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    /// The root node id.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node lookup by id.
    ///
    /// Ids handed out by the builder are always valid for the tree they
    /// built.
    #[inline]
    pub fn node(&self, id: NodeId) -> &Node<L> {
        &self.nodes[id.index()]
    }

    /// Number of nodes in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` for a tree with no nodes (never produced by the builder).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluates one tick of the tree against `ctx`.
    ///
    /// `path` carries the suspension state between ticks: on entry it names
    /// the chain of nodes that returned `Running` last tick, and evaluation
    /// resumes inside that chain instead of re-executing already-completed
    /// earlier siblings. On exit the path is rewritten: populated
    /// (root-first) when the result is `Running`, empty otherwise.
    ///
    /// # Errors
    ///
    /// [`EvaluateError::DepthExceeded`] when the running chain outgrows the
    /// fixed bound. The path is left cleared; the caller should log the
    /// defect and skip this agent's tick.
    pub fn evaluate<C>(
        &self,
        ctx: &mut C,
        path: &mut RunningPath,
    ) -> Result<Status, EvaluateError>
    where
        L: Behavior<C>,
    {
        let prev = *path;
        path.clear();

        let status = match self.eval(self.root, 0, true, &prev, path, ctx) {
            Ok(status) => status,
            Err(defect) => {
                path.clear();
                return Err(defect);
            }
        };

        if status.is_running() {
            // Entries were recorded while unwinding, innermost first.
            path.reverse();
        } else {
            path.clear();
        }

        Ok(status)
    }

    fn eval<C>(
        &self,
        id: NodeId,
        depth: usize,
        on_prev_path: bool,
        prev: &RunningPath,
        next: &mut RunningPath,
        ctx: &mut C,
    ) -> Result<Status, EvaluateError>
    where
        L: Behavior<C>,
    {
        match self.node(id) {
            Node::Leaf(leaf) => Ok(leaf.tick(ctx)),

            Node::Sequence(children) => {
                let resumed = resume_child(id, depth, on_prev_path, prev);
                let start = resumed.unwrap_or(0);

                for (i, &child) in children.iter().enumerate().skip(start) {
                    let status =
                        self.eval(child, depth + 1, resumed == Some(i), prev, next, ctx)?;
                    match status {
                        Status::Success => continue,
                        Status::Failure => return Ok(Status::Failure),
                        Status::Running => {
                            next.push(RunningEntry { node: id, child: i })?;
                            return Ok(Status::Running);
                        }
                    }
                }
                Ok(Status::Success)
            }

            Node::Selector(children) => {
                let resumed = resume_child(id, depth, on_prev_path, prev);
                let start = resumed.unwrap_or(0);

                for (i, &child) in children.iter().enumerate().skip(start) {
                    let status =
                        self.eval(child, depth + 1, resumed == Some(i), prev, next, ctx)?;
                    match status {
                        Status::Failure => continue,
                        Status::Success => return Ok(Status::Success),
                        Status::Running => {
                            next.push(RunningEntry { node: id, child: i })?;
                            return Ok(Status::Running);
                        }
                    }
                }
                Ok(Status::Failure)
            }

            Node::Inverter(child) => {
                let resumed = resume_child(id, depth, on_prev_path, prev);
                let status =
                    self.eval(*child, depth + 1, resumed.is_some(), prev, next, ctx)?;
                if status.is_running() {
                    next.push(RunningEntry { node: id, child: 0 })?;
                    return Ok(Status::Running);
                }
                Ok(status.invert())
            }

            Node::AlwaysSucceed(child) => {
                let resumed = resume_child(id, depth, on_prev_path, prev);
                let status =
                    self.eval(*child, depth + 1, resumed.is_some(), prev, next, ctx)?;
                if status.is_running() {
                    next.push(RunningEntry { node: id, child: 0 })?;
                    return Ok(Status::Running);
                }
                Ok(Status::Success)
            }
        }
    }
}

/// Which child to resume at, if this node was suspended at `depth` last tick.
///
/// A resume is only honored while the whole ancestor chain has matched the
/// previous path; a partial match (same id reached through a different
/// branch) restarts from the first child.
fn resume_child(
    id: NodeId,
    depth: usize,
    on_prev_path: bool,
    prev: &RunningPath,
) -> Option<usize> {
    if !on_prev_path {
        return None;
    }
    prev.get(depth)
        .filter(|entry| entry.node == id)
        .map(|entry| entry.child)
}
