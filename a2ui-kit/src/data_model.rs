//! Surface Data Model
//!
//! Each surface owns a JSON-shaped data tree that components bind to.
//! Values are addressed by slash-delimited paths:
//!
//! - `/` - root
//! - `/user/name` - nested property
//! - `/items/0` - array element at index 0
//! - `/items/0/name` - property of array element
//!
//! Empty segments are discarded, so `/a/b`, `a/b` and `a/b/` address the
//! same location. Every lookup is total: a missing key, an out-of-range
//! index, or a type mismatch yields `None`, never a fault.

use serde_json::Value;
use std::collections::HashSet;

/// The per-surface data tree with slash-path access and change tracking.
///
/// # Example
///
/// ```rust,ignore
/// let mut model = DataModel::new();
///
/// model.set("/user/name", json!("Alice"));
/// model.set("/items", json!([{"id": 1}, {"id": 2}]));
///
/// let name = model.get_string("/user/name"); // Some("Alice")
/// let id = model.get_number("/items/0/id");  // Some(1.0)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DataModel {
    /// The root data value
    data: Value,

    /// Paths modified since the last [`DataModel::clear_dirty`]
    dirty_paths: HashSet<String>,

    /// Version counter for change detection
    version: u64,
}

impl Default for DataModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DataModel {
    /// Create a new empty data model
    pub fn new() -> Self {
        DataModel {
            data: Value::Object(serde_json::Map::new()),
            dirty_paths: HashSet::new(),
            version: 0,
        }
    }

    /// Create a data model with initial data
    pub fn with_data(data: Value) -> Self {
        DataModel {
            data,
            dirty_paths: HashSet::new(),
            version: 0,
        }
    }

    /// Get the current version number
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Check whether a path, a parent of it, or a child of it has changed
    pub fn is_dirty(&self, path: &str) -> bool {
        self.dirty_paths
            .iter()
            .any(|dirty| path.starts_with(dirty.as_str()) || dirty.starts_with(path))
    }

    /// Clear the dirty flags
    pub fn clear_dirty(&mut self) {
        self.dirty_paths.clear();
    }

    /// Get all dirty paths
    pub fn dirty_paths(&self) -> &HashSet<String> {
        &self.dirty_paths
    }

    /// Get a value at the given path
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut current = &self.data;
        for segment in segments(path) {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Get a string value at the given path
    pub fn get_string(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(|v| v.as_str())
    }

    /// Get a number value at the given path
    pub fn get_number(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(|v| v.as_f64())
    }

    /// Get a boolean value at the given path
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(|v| v.as_bool())
    }

    /// Get an array value at the given path
    pub fn get_array(&self, path: &str) -> Option<&Vec<Value>> {
        self.get(path).and_then(|v| v.as_array())
    }

    /// Get an object value at the given path
    pub fn get_object(&self, path: &str) -> Option<&serde_json::Map<String, Value>> {
        self.get(path).and_then(|v| v.as_object())
    }

    /// Set a value at the given path.
    ///
    /// Missing intermediate segments become empty objects. Setting at the
    /// root path (`/` or empty) replaces the entire tree.
    pub fn set(&mut self, path: &str, value: Value) {
        let segs = segments(path);
        let applied = if segs.is_empty() {
            self.data = value;
            true
        } else {
            set_at(&mut self.data, &segs, value)
        };
        if applied {
            self.mark_changed(path);
        }
    }

    /// Replace the entire data model
    pub fn replace(&mut self, data: Value) {
        self.data = data;
        self.mark_changed("/");
    }

    /// Remove the value at the given path.
    ///
    /// Removing the root resets the tree to an empty object. Returns
    /// whether anything was removed.
    pub fn remove(&mut self, path: &str) -> bool {
        let segs = segments(path);
        let removed = if segs.is_empty() {
            self.data = Value::Object(serde_json::Map::new());
            true
        } else {
            remove_at(&mut self.data, &segs)
        };
        if removed {
            self.mark_changed(path);
        }
        removed
    }

    /// Get the entire data tree
    pub fn as_value(&self) -> &Value {
        &self.data
    }

    fn mark_changed(&mut self, path: &str) {
        self.dirty_paths.insert(path.to_string());
        self.version += 1;
    }
}

/// Split a slash-delimited path, discarding empty segments.
fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn set_at(node: &mut Value, segs: &[&str], value: Value) -> bool {
    let (head, rest) = match segs.split_first() {
        Some(split) => split,
        None => return false,
    };

    if rest.is_empty() {
        return match node {
            Value::Object(map) => {
                map.insert(head.to_string(), value);
                true
            }
            Value::Array(items) => match head.parse::<usize>() {
                Ok(index) if index < items.len() => {
                    items[index] = value;
                    true
                }
                Ok(index) if index == items.len() => {
                    items.push(value);
                    true
                }
                _ => false,
            },
            // A scalar in the way is replaced by a fresh object.
            _ => {
                let mut map = serde_json::Map::new();
                map.insert(head.to_string(), value);
                *node = Value::Object(map);
                true
            }
        };
    }

    let child = match node {
        Value::Object(map) => map
            .entry(head.to_string())
            .or_insert_with(|| Value::Object(serde_json::Map::new())),
        Value::Array(items) => {
            let Ok(index) = head.parse::<usize>() else {
                return false;
            };
            while items.len() <= index {
                items.push(Value::Null);
            }
            &mut items[index]
        }
        _ => {
            *node = Value::Object(serde_json::Map::new());
            let Value::Object(map) = node else {
                return false;
            };
            map.entry(head.to_string())
                .or_insert_with(|| Value::Object(serde_json::Map::new()))
        }
    };

    // Null placeholders from array extension become objects on descent.
    if child.is_null() {
        *child = Value::Object(serde_json::Map::new());
    }

    set_at(child, rest, value)
}

fn remove_at(node: &mut Value, segs: &[&str]) -> bool {
    let (head, rest) = match segs.split_first() {
        Some(split) => split,
        None => return false,
    };

    if rest.is_empty() {
        return match node {
            Value::Object(map) => map.remove(*head).is_some(),
            Value::Array(items) => match head.parse::<usize>() {
                Ok(index) if index < items.len() => {
                    items.remove(index);
                    true
                }
                _ => false,
            },
            _ => false,
        };
    }

    let child = match node {
        Value::Object(map) => map.get_mut(*head),
        Value::Array(items) => head
            .parse::<usize>()
            .ok()
            .and_then(|index| items.get_mut(index)),
        _ => None,
    };
    match child {
        Some(child) => remove_at(child, rest),
        None => false,
    }
}
