//! Hierarchical checkpoint scopes for collaborator state.
//!
//! A [`Checkpoint`] wraps a JSON tree in either save or load mode; a
//! [`StateScope`] is a named sub-tree view handed to a collaborator so it can
//! persist or restore its own state without knowing where in the tree it
//! lives. The driver decides how the tree itself reaches disk.
//!
//! # Example
//!
//! ```
//! use informar::state::Checkpoint;
//!
//! let mut saving = Checkpoint::save();
//! let mut count = 3u64;
//! saving.root().scope("reporter").item("count", &mut count);
//!
//! let mut loading = Checkpoint::load(saving.into_value());
//! let mut restored = 0u64;
//! loading.root().scope("reporter").item("count", &mut restored);
//! assert_eq!(restored, 3);
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Whether scopes write values into the tree or read them back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Save,
    Load,
}

/// Root of a checkpoint tree.
#[derive(Debug)]
pub struct Checkpoint {
    mode: Mode,
    root: Value,
}

impl Checkpoint {
    /// Start an empty tree for saving.
    pub fn save() -> Self {
        Self { mode: Mode::Save, root: Value::Object(Map::new()) }
    }

    /// Wrap a previously saved tree for loading.
    pub fn load(root: Value) -> Self {
        Self { mode: Mode::Load, root }
    }

    /// Scope covering the whole tree.
    pub fn root(&mut self) -> StateScope<'_> {
        StateScope { mode: self.mode, node: &mut self.root }
    }

    /// Consume the checkpoint, yielding the tree for persistence.
    pub fn into_value(self) -> Value {
        self.root
    }
}

/// A named sub-tree of a checkpoint.
pub struct StateScope<'a> {
    mode: Mode,
    node: &'a mut Value,
}

impl StateScope<'_> {
    /// Descend into the child scope `name`, creating it when saving and
    /// tolerating its absence when loading.
    pub fn scope(&mut self, name: &str) -> StateScope<'_> {
        if !self.node.is_object() {
            *self.node = Value::Object(Map::new());
        }
        let node = match &mut *self.node {
            Value::Object(map) => {
                map.entry(name.to_string()).or_insert_with(|| Value::Object(Map::new()))
            }
            other => other,
        };
        StateScope { mode: self.mode, node }
    }

    /// Save or restore one value under `key`. On load, a missing or
    /// undecodable entry leaves `value` unchanged.
    pub fn item<T>(&mut self, key: &str, value: &mut T)
    where
        T: Serialize + DeserializeOwned,
    {
        match self.mode {
            Mode::Save => {
                if !self.node.is_object() {
                    *self.node = Value::Object(Map::new());
                }
                if let (Value::Object(map), Ok(encoded)) =
                    (&mut *self.node, serde_json::to_value(&*value))
                {
                    map.insert(key.to_string(), encoded);
                }
            }
            Mode::Load => {
                if let Some(found) = self.node.get(key) {
                    if let Ok(decoded) = serde_json::from_value(found.clone()) {
                        *value = decoded;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_round_trip() {
        let mut saving = Checkpoint::save();
        let mut values = vec![1.0f64, 2.0, 3.0];
        saving.root().item("values", &mut values);

        let mut loading = Checkpoint::load(saving.into_value());
        let mut restored: Vec<f64> = Vec::new();
        loading.root().item("values", &mut restored);
        assert_eq!(restored, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_nested_scopes_do_not_collide() {
        let mut saving = Checkpoint::save();
        let mut root = saving.root();
        let mut a = 1u64;
        let mut b = 2u64;
        root.scope("left").item("x", &mut a);
        root.scope("right").item("x", &mut b);

        let tree = saving.into_value();
        assert_eq!(tree["left"]["x"], 1);
        assert_eq!(tree["right"]["x"], 2);
    }

    #[test]
    fn test_load_missing_key_leaves_value_unchanged() {
        let mut loading = Checkpoint::load(serde_json::json!({}));
        let mut value = 42u64;
        loading.root().scope("absent").item("count", &mut value);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_load_undecodable_value_leaves_value_unchanged() {
        let mut loading = Checkpoint::load(serde_json::json!({"count": "not-a-number"}));
        let mut value = 7u64;
        loading.root().item("count", &mut value);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_deeply_nested_scope_round_trip() {
        let mut saving = Checkpoint::save();
        let mut steps = 10u64;
        saving.root().scope("trainer").scope("reporter").item("steps", &mut steps);

        let mut loading = Checkpoint::load(saving.into_value());
        let mut restored = 0u64;
        loading.root().scope("trainer").scope("reporter").item("steps", &mut restored);
        assert_eq!(restored, 10);
    }

    #[test]
    fn test_load_scope_over_scalar_node_leaves_value_unchanged() {
        let mut loading = Checkpoint::load(serde_json::json!({"child": 5}));
        let mut value = 9u64;
        loading.root().scope("child").item("v", &mut value);
        assert_eq!(value, 9);
    }
}
