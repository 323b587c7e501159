//! The `@odata.type` annotation.
//!
//! Payloads of polymorphic types carry their concrete type in this property, as
//! a `#`-prefixed qualified name such as `#microsoft.graph.iosExpeditedCheckinConfiguration`.
//! Tags are compared as exact strings; [ODataType] only exists to check that
//! registered tags are well formed and to make log output readable.

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;

/// Property name of the discriminator.
pub const ODATA_TYPE_KEY: &str = "@odata.type";

const ODATA_TYPE_STR: &str = r"^#((?:[A-Za-z_][A-Za-z0-9_]*\.)+)([A-Za-z_][A-Za-z0-9_]*)$";

lazy_static! {
    static ref ODATA_TYPE: Regex = Regex::new(ODATA_TYPE_STR).unwrap();
}

/// A parsed `@odata.type` value, borrowing from the tag it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ODataType<'a> {
    /// Namespace of the type, e.g. `["microsoft", "graph"]`.
    pub namespace: Vec<&'a str>,
    /// Name of the type, e.g. `iosExpeditedCheckinConfiguration`.
    pub type_name: &'a str,
}

impl<'a> ODataType<'a> {
    /// Returns `None` for anything that is not a `#namespace.typeName` tag.
    pub fn parse(tag: &'a str) -> Option<ODataType<'a>> {
        let captures = ODATA_TYPE.captures(tag)?;
        let namespace = captures
            .get(1)?
            .as_str()
            .trim_end_matches('.')
            .split('.')
            .collect();
        let type_name = captures.get(2)?.as_str();
        Some(ODataType {
            namespace,
            type_name,
        })
    }
}

impl Display for ODataType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}.{}", self.namespace.join("."), self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_graph_tag() {
        let t = ODataType::parse("#microsoft.graph.iosExpeditedCheckinConfiguration").unwrap();
        assert_eq!(t.namespace, vec!["microsoft", "graph"]);
        assert_eq!(t.type_name, "iosExpeditedCheckinConfiguration");
        assert_eq!(
            t.to_string(),
            "#microsoft.graph.iosExpeditedCheckinConfiguration"
        );
    }

    #[test]
    fn test_parse_nested_namespace() {
        let t = ODataType::parse("#microsoft.graph.managedTenants.managedTenant").unwrap();
        assert_eq!(t.namespace, vec!["microsoft", "graph", "managedTenants"]);
        assert_eq!(t.type_name, "managedTenant");
    }

    #[test]
    fn test_reject_malformed_tags() {
        for tag in [
            "",
            "#",
            "microsoft.graph.entity",
            "#entity",
            "#microsoft..entity",
            "#microsoft.graph.",
            "#microsoft.graph.entity ",
        ] {
            assert!(ODataType::parse(tag).is_none(), "'{tag}' should be rejected");
        }
    }
}
