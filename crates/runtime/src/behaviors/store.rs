//! Named behavior-tree cache.
//!
//! One store exists per map session. Trees load lazily from RON files,
//! compile once, and are handed out as shared `Arc`s: repeated loads of a
//! name return the same instance. The reserved `"default"` name falls back
//! to the built-in preset when no file overrides it. Dropping the store on
//! map restart releases every tree.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use behavior_tree::Tree;
use thiserror::Error;

use super::def::{CompileError, NodeDef};
use super::leaf::BotLeaf;
use super::presets;

/// Reserved fallback behavior name.
pub const DEFAULT_BEHAVIOR: &str = "default";

/// Failures while resolving a named behavior.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Behavior names must be plain file stems; admin input is not a path.
    #[error("behavior name `{0}` is not a plain name")]
    InvalidName(String),

    #[error("behavior `{0}` not found")]
    NotFound(String),

    #[error("failed to read behavior file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse behavior definition: {0}")]
    Parse(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Loads and owns named, reusable behavior trees.
pub struct BehaviorStore {
    dir: Option<PathBuf>,
    cache: HashMap<String, Arc<Tree<BotLeaf>>>,
}

impl BehaviorStore {
    /// Creates a store reading definitions from `dir` (`<dir>/<name>.ron`).
    ///
    /// With no directory only the built-in `"default"` resolves.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            cache: HashMap::new(),
        }
    }

    /// Resolves a named tree, loading and caching it on first use.
    ///
    /// Idempotent per name: every successful load of the same name returns
    /// the same shared instance.
    pub fn load(&mut self, name: &str) -> Result<Arc<Tree<BotLeaf>>, LoadError> {
        if name.is_empty() || name.contains(['/', '\\']) || name.contains("..") {
            return Err(LoadError::InvalidName(name.to_owned()));
        }

        if let Some(tree) = self.cache.get(name) {
            return Ok(Arc::clone(tree));
        }

        let tree = Arc::new(self.read_definition(name)?);
        self.cache.insert(name.to_owned(), Arc::clone(&tree));
        Ok(tree)
    }

    /// Fallback chain: the requested behavior, then `"default"`.
    pub fn load_or_default(&mut self, name: &str) -> Result<Arc<Tree<BotLeaf>>, LoadError> {
        match self.load(name) {
            Ok(tree) => Ok(tree),
            Err(err) if name == DEFAULT_BEHAVIOR => Err(err),
            Err(err) => {
                tracing::warn!(
                    "problem loading behavior tree {}, trying default: {}",
                    name,
                    err
                );
                self.load(DEFAULT_BEHAVIOR)
            }
        }
    }

    /// Number of trees currently cached.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn read_definition(&self, name: &str) -> Result<Tree<BotLeaf>, LoadError> {
        let Some(dir) = &self.dir else {
            return self.builtin(name);
        };

        let path = dir.join(format!("{name}.ron"));
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => return self.builtin(name),
            Err(err) => return Err(LoadError::Io(err)),
        };

        let def: NodeDef =
            ron::from_str(&text).map_err(|err| LoadError::Parse(err.to_string()))?;
        Ok(def.compile()?)
    }

    /// Built-in trees back names with no file; only `"default"` exists.
    fn builtin(&self, name: &str) -> Result<Tree<BotLeaf>, LoadError> {
        if name == DEFAULT_BEHAVIOR {
            Ok(presets::default_tree())
        } else {
            Err(LoadError::NotFound(name.to_owned()))
        }
    }
}
