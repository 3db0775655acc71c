use select::node::Node;
use select::predicate::Predicate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the elements that hold one benchmark table each. The benchmarks
/// page keeps every table's rows in its own `tbody`, which is the default.
///
/// The HTML parser gives every `<table>` a `tbody`, written or not, so a
/// layout table elsewhere on the page also matches a bare `tbody`. Setting
/// `within` scopes the match to one container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSelector {
    #[serde(default = "default_tag")]
    pub tag: String,

    /// Only match elements carrying this class
    #[serde(default)]
    pub class: Option<String>,

    /// Only match elements below the element with this id
    #[serde(default)]
    pub within: Option<String>,
}

fn default_tag() -> String {
    "tbody".to_string()
}

impl TableSelector {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            within: None,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn within(mut self, id: impl Into<String>) -> Self {
        self.within = Some(id.into());
        self
    }

    fn has_class(&self, node: &Node) -> bool {
        let Some(wanted) = &self.class else {
            return true;
        };
        node.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == wanted))
    }

    fn in_scope(&self, node: &Node) -> bool {
        let Some(id) = &self.within else {
            return true;
        };
        let mut current = node.parent();
        while let Some(parent) = current {
            if parent.attr("id") == Some(id.as_str()) {
                return true;
            }
            current = parent.parent();
        }
        false
    }
}

impl Default for TableSelector {
    fn default() -> Self {
        Self::tag(default_tag())
    }
}

impl fmt::Display for TableSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = &self.within {
            write!(f, "#{} ", id)?;
        }
        write!(f, "{}", self.tag)?;
        if let Some(class) = &self.class {
            write!(f, ".{}", class)?;
        }
        Ok(())
    }
}

impl Predicate for &TableSelector {
    fn matches(&self, node: &Node) -> bool {
        node.name() == Some(self.tag.as_str()) && self.has_class(node) && self.in_scope(node)
    }
}
