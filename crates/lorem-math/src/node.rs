//! The eager expansion tree produced by grammar rules.
//!
//! Rules return either an atomic markup token or an ordered sequence of
//! further expansions; a flattening pass serializes the tree in document
//! order. This replaces the nested lazy-generator chains of the original
//! design with a plain value that can be inspected before rendering.

use std::borrow::Cow;

/// The result of expanding one grammar rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpansionNode {
    /// An atomic markup token.
    Leaf(Cow<'static, str>),
    /// An ordered sequence of further expansions, possibly nested.
    Seq(Vec<ExpansionNode>),
}

impl ExpansionNode {
    /// Flatten the tree into a single markup string, in document order.
    pub fn flatten(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            ExpansionNode::Leaf(token) => out.push_str(token),
            ExpansionNode::Seq(children) => {
                for child in children {
                    child.write_into(out);
                }
            }
        }
    }
}

impl From<&'static str> for ExpansionNode {
    fn from(token: &'static str) -> Self {
        ExpansionNode::Leaf(Cow::Borrowed(token))
    }
}

impl From<String> for ExpansionNode {
    fn from(token: String) -> Self {
        ExpansionNode::Leaf(Cow::Owned(token))
    }
}

impl From<Cow<'static, str>> for ExpansionNode {
    fn from(token: Cow<'static, str>) -> Self {
        ExpansionNode::Leaf(token)
    }
}
