//! Dot-path navigation over a parsed document.
//!
//! Paths are dot-separated key segments (`"scenario.name"`). Each segment is
//! resolved by a linear scan for the first property with that key; descent
//! through a non-final segment requires its value to be a block. All
//! mutation happens in place on the owning tree.

use crate::ast::{Document, Operator, Property, Value};
use log::debug;

impl Document {
    /// The value of the first property at `path`, or `None` when any segment
    /// fails to resolve.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let segments: Vec<&str> = path.split('.').collect();
        let (last, parents) = segments.split_last()?;
        let container = resolve(&self.properties, parents)?;
        container.iter().find(|p| p.key == *last).map(|p| &p.value)
    }

    /// The values of every property named by the final path segment, in
    /// order. Duplicate keys yield multiple entries; an unresolved parent
    /// path yields an empty vector, not an error.
    #[must_use]
    pub fn get_all(&self, path: &str) -> Vec<&Value> {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return Vec::new();
        };
        let Some(container) = resolve(&self.properties, parents) else {
            return Vec::new();
        };
        container
            .iter()
            .filter(|p| p.key == *last)
            .map(|p| &p.value)
            .collect()
    }

    /// Overwrites the value of the first property at `path` in place.
    /// Returns whether a property was found; missing segments are never
    /// created.
    pub fn set(&mut self, path: &str, value: Value) -> bool {
        let segments: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = segments.split_last() else {
            return false;
        };
        let Some(container) = resolve_mut(&mut self.properties, parents) else {
            return false;
        };
        match container.iter_mut().find(|p| p.key == *last) {
            Some(property) => {
                property.value = value;
                true
            }
            None => false,
        }
    }

    /// Appends a `key = value` property to the block at `parent_path`.
    /// The empty path addresses the document root. Returns whether the
    /// parent resolved to a block.
    pub fn add(&mut self, parent_path: &str, key: &str, value: Value) -> bool {
        self.add_with_operator(parent_path, key, value, Operator::Equals)
    }

    /// [`add`](Self::add) with an explicit operator.
    pub fn add_with_operator(
        &mut self,
        parent_path: &str,
        key: &str,
        value: Value,
        operator: Operator,
    ) -> bool {
        let Some(container) = resolve_parent_mut(&mut self.properties, parent_path) else {
            return false;
        };
        container.push(Property::new(key, operator, value));
        true
    }

    /// Removes every property named `key` from the block at `parent_path`,
    /// preserving the relative order of the remainder. Returns the number
    /// removed; an unresolved parent removes nothing.
    pub fn remove_all(&mut self, parent_path: &str, key: &str) -> usize {
        let Some(container) = resolve_parent_mut(&mut self.properties, parent_path) else {
            return 0;
        };
        let before = container.len();
        container.retain(|p| p.key != key);
        let removed = before - container.len();
        if removed > 0 {
            debug!("removed {removed} '{key}' properties under '{parent_path}'");
        }
        removed
    }
}

fn resolve<'a>(mut container: &'a [Property], segments: &[&str]) -> Option<&'a [Property]> {
    for segment in segments {
        let property = container.iter().find(|p| p.key == *segment)?;
        container = property.value.as_block()?;
    }
    Some(container)
}

fn resolve_mut<'a>(
    mut container: &'a mut Vec<Property>,
    segments: &[&str],
) -> Option<&'a mut Vec<Property>> {
    for segment in segments {
        let property = container.iter_mut().find(|p| p.key == *segment)?;
        container = property.value.as_block_mut()?;
    }
    Some(container)
}

fn resolve_parent_mut<'a>(
    root: &'a mut Vec<Property>,
    parent_path: &str,
) -> Option<&'a mut Vec<Property>> {
    if parent_path.is_empty() {
        return Some(root);
    }
    let segments: Vec<&str> = parent_path.split('.').collect();
    resolve_mut(root, &segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::parse;

    fn doc() -> Document {
        parse(
            r#"
            scenario = {
                name = "Test"
                core = { radius = 450 }
                system = { id = "0" }
                system = { id = "1" }
            }
            fallback = 10
            "#,
        )
        .unwrap()
    }

    #[test]
    fn test_get_nested() {
        let doc = doc();
        assert_eq!(
            doc.get("scenario.name"),
            Some(&Value::String("Test".to_string()))
        );
        assert_eq!(
            doc.get("scenario.core.radius"),
            Some(&Value::Integer(450))
        );
    }

    #[test]
    fn test_get_first_of_duplicates() {
        let doc = doc();
        let first = doc.get("scenario.system").unwrap().as_block().unwrap();
        assert_eq!(first[0].value, Value::String("0".to_string()));
    }

    #[test]
    fn test_get_misses() {
        let doc = doc();
        assert_eq!(doc.get("scenario.missing"), None);
        assert_eq!(doc.get("missing.name"), None);
        // A non-block segment cannot be descended through.
        assert_eq!(doc.get("fallback.anything"), None);
    }

    #[test]
    fn test_get_all() {
        let doc = doc();
        let systems = doc.get_all("scenario.system");
        assert_eq!(systems.len(), 2);
        assert!(doc.get_all("scenario.nope").is_empty());
        assert!(doc.get_all("nowhere.system").is_empty());
    }

    #[test]
    fn test_set() {
        let mut doc = doc();
        assert!(doc.set("scenario.name", Value::String("Renamed".to_string())));
        assert_eq!(
            doc.get("scenario.name"),
            Some(&Value::String("Renamed".to_string()))
        );
        assert!(!doc.set("scenario.missing", Value::Integer(1)));
    }

    #[test]
    fn test_set_does_not_create_segments() {
        let mut doc = doc();
        assert!(!doc.set("scenario.deep.path", Value::Integer(1)));
        assert_eq!(doc.get("scenario.deep"), None);
    }

    #[test]
    fn test_add_to_root_and_nested() {
        let mut doc = doc();
        assert!(doc.add("", "version", Value::String("3.8".to_string())));
        assert_eq!(doc.properties.last().unwrap().key, "version");

        assert!(doc.add("scenario", "done", Value::Boolean(true)));
        assert_eq!(
            doc.get("scenario.done"),
            Some(&Value::Boolean(true))
        );
        assert!(!doc.add("scenario.nope", "x", Value::Integer(1)));
    }

    #[test]
    fn test_add_with_operator() {
        let mut doc = doc();
        assert!(doc.add_with_operator(
            "scenario",
            "min_size",
            Value::Integer(5),
            Operator::GreaterThanOrEqual
        ));
        let block = doc.get("scenario").unwrap().as_block().unwrap();
        let prop = block.iter().find(|p| p.key == "min_size").unwrap();
        assert_eq!(prop.operator, Operator::GreaterThanOrEqual);
    }

    #[test]
    fn test_remove_all() {
        let mut doc = doc();
        assert_eq!(doc.remove_all("scenario", "system"), 2);
        assert!(doc.get_all("scenario.system").is_empty());
        // Remaining properties keep their relative order.
        let block = doc.get("scenario").unwrap().as_block().unwrap();
        let keys: Vec<_> = block.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["name", "core"]);

        assert_eq!(doc.remove_all("scenario", "system"), 0);
        assert_eq!(doc.remove_all("nowhere", "system"), 0);
    }

    #[test]
    fn test_remove_all_at_root() {
        let mut doc = doc();
        assert_eq!(doc.remove_all("", "fallback"), 1);
        assert_eq!(doc.get("fallback"), None);
    }
}
