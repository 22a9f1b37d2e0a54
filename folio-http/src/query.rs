//! Query string parsing shared by the query predicates.

use std::collections::HashMap;

use serde::Deserialize;

/// A query parameter value: scalar or bracket-syntax array.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Value {
    /// A single `key=value` entry.
    Scalar(String),
    /// A `key[]=a&key[]=b` entry.
    Array(Vec<String>),
}

impl Value {
    /// All values for the parameter, scalar included.
    pub fn inner(&self) -> Vec<String> {
        match self {
            Value::Scalar(value) => vec![value.to_owned()],
            Value::Array(values) => values.to_owned(),
        }
    }

    /// Whether any value for the parameter equals `value`.
    pub fn contains(&self, value: &String) -> bool {
        self.inner().contains(value)
    }
}

/// Parses a raw query string into a parameter map.
///
/// Returns `None` for query strings serde_qs cannot make sense of;
/// predicates treat that as a non-match rather than a fault, keeping the
/// cacheability verdict total.
pub fn parse(value: &str) -> Option<HashMap<String, Value>> {
    serde_qs::Config::new(5, false).deserialize_str(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_one() {
        let map = parse("key=value").unwrap();
        assert_eq!(map.get("key").unwrap().inner(), vec!["value"]);
    }

    #[test]
    fn test_parse_valid_multiple() {
        let map = parse("page=2&limit=10&h=abc123").unwrap();
        assert_eq!(map.get("page").unwrap().inner(), vec!["2"]);
        assert_eq!(map.get("limit").unwrap().inner(), vec!["10"]);
        assert_eq!(map.get("h").unwrap().inner(), vec!["abc123"]);
    }

    #[test]
    fn test_parse_array_bracket_syntax() {
        let map = parse("status[]=pending&status[]=done").unwrap();
        assert_eq!(map.get("status").unwrap().inner(), vec!["pending", "done"]);
    }

    #[test]
    fn test_contains() {
        let map = parse("status[]=pending&status[]=done").unwrap();
        assert!(map.get("status").unwrap().contains(&"done".to_string()));
        assert!(!map.get("status").unwrap().contains(&"failed".to_string()));
    }
}
