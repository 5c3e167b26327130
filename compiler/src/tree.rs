use std::fmt::Display;

use crate::{error::CompilerError, token::Number};

/// Scalar carried by a leaf.
#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Text(String),
    Number(Number),
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Text(v) => f.write_str(v),
            Value::Number(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

/// Labelled syntax tree. Children are owned, so every node has exactly one parent.
#[derive(Debug, PartialEq, Clone)]
pub enum Node {
    Interior { label: String, children: Vec<Node> },
    Leaf { label: String, value: Option<Value> },
}

impl Node {
    pub fn new(label: impl Into<String>) -> Node {
        Node::Interior {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn leaf(label: impl Into<String>, value: Option<Value>) -> Node {
        Node::Leaf {
            label: label.into(),
            value,
        }
    }

    pub fn with_children(label: impl Into<String>, children: Vec<Node>) -> Node {
        Node::Interior {
            label: label.into(),
            children,
        }
    }

    /// Attaches `child` as the last child. Leaves cannot have children.
    pub fn append(&mut self, child: Node) -> Result<(), CompilerError> {
        match self {
            Node::Interior { children, .. } => {
                children.push(child);
                Ok(())
            }
            Node::Leaf { label, .. } => Err(CompilerError::TreeError(format!(
                "cannot append to leaf node '{}'",
                label
            ))),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Node::Interior { label, .. } | Node::Leaf { label, .. } => label,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Interior { children, .. } => children,
            Node::Leaf { .. } => &[],
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Node::Leaf { value, .. } => value.as_ref(),
            Node::Interior { .. } => None,
        }
    }

    fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            Node::Interior { label, children } => {
                writeln!(f, "{}{}:", indent, label)?;
                for child in children {
                    child.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
            Node::Leaf {
                label,
                value: Some(value),
            } => writeln!(f, "{}{}: {}", indent, label, value),
            Node::Leaf { label, value: None } => writeln!(f, "{}{}", indent, label),
        }
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}
