//! Tree kinds: the intrinsic, shared state of a forest.

use serde::{Deserialize, Serialize};

use crate::error::{CanopyError, CanopyResult};
use crate::registry::key;
use crate::traits::SharedRecord;
use crate::types::{PlacedInstance, Position};

/// Structural key identifying a tree kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreeKindKey {
    pub name: String,
    pub color: String,
    pub texture: String,
}

impl TreeKindKey {
    /// Create a new key from its three identity fields.
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        texture: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            texture: texture.into(),
        }
    }

    /// Parse a label such as `"Oak-Green-Rough"`.
    pub fn from_label(label: &str, separator: char) -> CanopyResult<Self> {
        let mut fields = key::decode(label, separator, 3)?.into_iter();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(color), Some(texture)) => Ok(Self::new(name, color, texture)),
            _ => Err(CanopyError::key_arity(label, separator)),
        }
    }
}

/// Shared description of a tree: name, color and texture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeKind {
    name: String,
    color: String,
    texture: String,
}

impl TreeKind {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn texture(&self) -> &str {
        &self.texture
    }

    /// Describe this kind placed at `position`.
    pub fn describe_at(&self, position: Position) -> String {
        format!(
            "Displaying '{}' tree at {} with color {} and texture {}.",
            self.name, position, self.color, self.texture
        )
    }
}

impl SharedRecord for TreeKind {
    type Key = TreeKindKey;

    fn from_key(key: &TreeKindKey) -> Self {
        Self {
            name: key.name.clone(),
            color: key.color.clone(),
            texture: key.texture.clone(),
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.color.as_str(), self.texture.as_str()]
    }
}

/// A tree planted in a forest.
pub type Tree = PlacedInstance<TreeKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_copies_fields() {
        let kind = TreeKind::from_key(&TreeKindKey::new("Oak", "Green", "Rough"));
        assert_eq!(kind.name(), "Oak");
        assert_eq!(kind.color(), "Green");
        assert_eq!(kind.texture(), "Rough");
        assert_eq!(kind.fields(), vec!["Oak", "Green", "Rough"]);
    }

    #[test]
    fn test_key_from_label() {
        let key = TreeKindKey::from_label("Pine|Dark Green|Smooth", '|').unwrap();
        assert_eq!(key, TreeKindKey::new("Pine", "Dark Green", "Smooth"));

        let kind = TreeKind::from_key(&key);
        let label = key::encode(&kind.fields(), '|').unwrap();
        assert_eq!(TreeKindKey::from_label(&label, '|').unwrap(), key);

        assert!(TreeKindKey::from_label("Oak-Green", '-').is_err());
    }

    #[test]
    fn test_describe_at() {
        let kind = TreeKind::from_key(&TreeKindKey::new("Pine", "Dark Green", "Smooth"));
        assert_eq!(
            kind.describe_at(Position::new(2, 3)),
            "Displaying 'Pine' tree at (2, 3) with color Dark Green and texture Smooth."
        );
    }
}
