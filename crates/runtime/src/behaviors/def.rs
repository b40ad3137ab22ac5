//! Declarative tree definitions.
//!
//! Behavior files are RON documents describing a single root node, e.g.:
//!
//! ```ron
//! Selector([
//!     Sequence([Leaf(HasEnemy), Leaf(TargetEnemy), Leaf(Fight)]),
//!     Sequence([Leaf(Roam), Leaf(MoveToGoal)]),
//! ])
//! ```
//!
//! Definitions compile into immutable [`Tree`]s through the arena builder;
//! a malformed definition is a load-time error reported to the admin, never
//! a tick-time fault.

use behavior_tree::{NodeId, Tree, TreeBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::leaf::BotLeaf;

/// Declarative form of one tree node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum NodeDef {
    Sequence(Vec<NodeDef>),
    Selector(Vec<NodeDef>),
    Inverter(Box<NodeDef>),
    AlwaysSucceed(Box<NodeDef>),
    Leaf(BotLeaf),
}

/// Structural problems surfaced while compiling a definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("composite node has no children")]
    EmptyComposite,
}

impl NodeDef {
    /// Compiles the definition into an immutable tree.
    pub fn compile(&self) -> Result<Tree<BotLeaf>, CompileError> {
        let mut builder = TreeBuilder::new();
        let root = self.compile_into(&mut builder)?;
        Ok(builder.build(root))
    }

    fn compile_into(&self, builder: &mut TreeBuilder<BotLeaf>) -> Result<NodeId, CompileError> {
        match self {
            NodeDef::Leaf(leaf) => Ok(builder.leaf(*leaf)),
            NodeDef::Sequence(children) => {
                let ids = Self::compile_children(children, builder)?;
                Ok(builder.sequence(ids))
            }
            NodeDef::Selector(children) => {
                let ids = Self::compile_children(children, builder)?;
                Ok(builder.selector(ids))
            }
            NodeDef::Inverter(child) => {
                let id = child.compile_into(builder)?;
                Ok(builder.inverter(id))
            }
            NodeDef::AlwaysSucceed(child) => {
                let id = child.compile_into(builder)?;
                Ok(builder.always_succeed(id))
            }
        }
    }

    fn compile_children(
        children: &[NodeDef],
        builder: &mut TreeBuilder<BotLeaf>,
    ) -> Result<Vec<NodeId>, CompileError> {
        if children.is_empty() {
            return Err(CompileError::EmptyComposite);
        }
        children
            .iter()
            .map(|child| child.compile_into(builder))
            .collect()
    }
}
