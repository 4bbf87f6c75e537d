//! Rendered output of a component tree.

use std::fmt;

use crate::ActionId;

/// One node of the tree produced by a render pass.
///
/// This is the terminal stand-in for a document tree: components describe what
/// should be on screen, the host decides how to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Node {
    #[default]
    Empty,
    Heading(String),
    Text(String),
    Button {
        label: String,
        action: ActionId,
    },
    Column(Vec<Node>),
}

impl Node {
    #[must_use]
    pub fn heading(text: impl Into<String>) -> Self {
        Self::Heading(text.into())
    }

    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    #[must_use]
    pub fn column(children: impl IntoIterator<Item = Node>) -> Self {
        Self::Column(children.into_iter().collect())
    }

    /// All buttons in depth-first order.
    #[must_use]
    pub fn buttons(&self) -> Vec<(&str, ActionId)> {
        let mut out = Vec::new();
        self.walk(&mut |node| {
            if let Node::Button { label, action } = node {
                out.push((label.as_str(), *action));
            }
        });
        out
    }

    #[must_use]
    pub fn find_button(&self, label: &str) -> Option<ActionId> {
        self.buttons()
            .into_iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, action)| action)
    }

    /// Visible text of the tree, space-joined in depth-first order.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        self.walk(&mut |node| match node {
            Node::Heading(text) | Node::Text(text) => parts.push(text),
            Node::Button { label, .. } => parts.push(label),
            Node::Empty | Node::Column(_) => {}
        });
        parts.join(" ")
    }

    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.text_content().contains(needle)
    }

    /// Indented, one-node-per-line description of the tree.
    #[must_use]
    pub fn outline(&self) -> String {
        let mut lines = Vec::new();
        self.outline_into(0, &mut lines);
        lines.join("\n")
    }

    fn outline_into(&self, depth: usize, lines: &mut Vec<String>) {
        let indent = "  ".repeat(depth);
        match self {
            Node::Empty => lines.push(format!("{indent}Empty")),
            Node::Heading(text) => lines.push(format!("{indent}Heading {text:?}")),
            Node::Text(text) => lines.push(format!("{indent}Text {text:?}")),
            Node::Button { label, action } => {
                lines.push(format!("{indent}Button {label:?} {action}"));
            }
            Node::Column(children) => {
                lines.push(format!("{indent}Column"));
                for child in children {
                    child.outline_into(depth + 1, lines);
                }
            }
        }
    }

    fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        if let Node::Column(children) = self {
            for child in children {
                child.walk(visit);
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.outline())
    }
}

#[cfg(test)]
mod tests {
    use super::{ActionId, Node};

    fn sample() -> Node {
        Node::column([
            Node::heading("Title"),
            Node::column([
                Node::Button {
                    label: "First".to_string(),
                    action: ActionId::new(0),
                },
                Node::text("body"),
            ]),
            Node::Button {
                label: "Second".to_string(),
                action: ActionId::new(1),
            },
        ])
    }

    #[test]
    fn buttons_are_listed_depth_first() {
        let node = sample();
        assert_eq!(
            node.buttons(),
            vec![("First", ActionId::new(0)), ("Second", ActionId::new(1))]
        );
        assert_eq!(node.find_button("Second"), Some(ActionId::new(1)));
        assert_eq!(node.find_button("Third"), None);
    }

    #[test]
    fn text_content_joins_visible_text() {
        let node = sample();
        assert_eq!(node.text_content(), "Title First body Second");
        assert!(node.contains_text("First body"));
        assert!(!Node::Empty.contains_text("Title"));
    }

    #[test]
    fn outline_indents_nested_columns() {
        insta::assert_snapshot!(sample().outline(), @r#"
        Column
          Heading "Title"
          Column
            Button "First" #0
            Text "body"
          Button "Second" #1
        "#);
    }

    #[test]
    fn empty_node_has_no_text() {
        assert_eq!(Node::default(), Node::Empty);
        assert_eq!(Node::Empty.text_content(), "");
        assert!(Node::Empty.buttons().is_empty());
    }
}
