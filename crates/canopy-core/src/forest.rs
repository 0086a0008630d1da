//! Forest: trees placed at positions, sharing tree kinds.

use tracing::debug;

use crate::config::CanopyConfig;
use crate::registry::Registry;
use crate::types::{Handle, Position, Tree, TreeKind, TreeKindKey};

/// Planted trees plus the registry of kinds they share.
pub struct Forest {
    kinds: Registry<TreeKind>,
    trees: Vec<Tree>,
}

impl Forest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::with_config(&CanopyConfig::default())
    }

    /// Create an empty forest from configuration.
    pub fn with_config(config: &CanopyConfig) -> Self {
        Self {
            kinds: Registry::with_config(&config.registry),
            trees: Vec::new(),
        }
    }

    /// Plant a tree, reusing the shared kind for identical name/color/texture.
    pub fn plant(
        &mut self,
        x: i32,
        y: i32,
        name: &str,
        color: &str,
        texture: &str,
    ) -> Handle<TreeKind> {
        let kind = self
            .kinds
            .get_or_create(TreeKindKey::new(name, color, texture));
        let position = Position::new(x, y);
        self.trees.push(Tree::new(position, kind));
        debug!(%position, kind = kind.index(), "Planted tree");
        kind
    }

    /// Trees in planting order.
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }

    /// The shared kind of a tree planted in this forest.
    pub fn kind_of(&self, tree: &Tree) -> Option<&TreeKind> {
        self.kinds.resolve(tree.kind())
    }

    /// Registry of distinct kinds.
    pub fn kinds(&self) -> &Registry<TreeKind> {
        &self.kinds
    }

    /// One display line per tree, in planting order.
    pub fn render(&self) -> Vec<String> {
        self.trees
            .iter()
            .filter_map(|tree| {
                self.kind_of(tree)
                    .map(|kind| kind.describe_at(tree.position()))
            })
            .collect()
    }
}

impl Default for Forest {
    fn default() -> Self {
        Self::new()
    }
}
