use web_sys::{Document, Node as WsNode};

use crate::error::Result;

/// Information required to build a [`web_sys::Node`]. Offers a friendly interface for creating new
/// [`web_sys::Node`]s, and allows for programatic access to certain attributes before creation
/// (namely whether the node is a text node or an element).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeType {
    /// A [`web_sys::Text`] node. Containing [`String`] refers to the content of the generated text
    /// node, which will be passed to [`Document::create_text_node()`].
    Text(String),

    /// A [`web_sys::Element`] node. Containing [`String`] refers to the element type (eg `p`,
    /// `div`), which will be passed to [`Document::create_element()`].
    Element(String),
}

/// A tree of nodes that can be inspected before being turned into real DOM nodes with
/// [`Node::create_node()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    node_type: NodeType,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    fn new(node_type: NodeType) -> Self {
        Self {
            node_type,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a new text node with the provided content.
    pub fn text<S>(content: S) -> Self
    where
        S: AsRef<str>,
    {
        Self::new(NodeType::Text(content.as_ref().to_string()))
    }

    /// Create a new element node of the provided type.
    pub fn element<S>(kind: S) -> Self
    where
        S: AsRef<str>,
    {
        Self::new(NodeType::Element(kind.as_ref().to_string()))
    }

    pub fn with_class<S>(mut self, class: S) -> Self
    where
        S: AsRef<str>,
    {
        self.classes.push(class.as_ref().to_string());
        self
    }

    pub fn with_attribute<K, V>(mut self, name: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.attributes
            .push((name.as_ref().to_string(), value.as_ref().to_string()));
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(children);
        self
    }

    /// Append a text node child.
    pub fn with_text<S>(self, content: S) -> Self
    where
        S: AsRef<str>,
    {
        self.with_child(Node::text(content))
    }

    pub fn node_type(&self) -> &NodeType {
        &self.node_type
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated content of every text node in the tree, in document order.
    pub fn text_content(&self) -> String {
        match &self.node_type {
            NodeType::Text(content) => content.clone(),
            NodeType::Element(_) => self.children.iter().map(Node::text_content).collect(),
        }
    }

    /// Every node in the tree (including this one) carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(&|node| node.has_class(class), &mut found);
        found
    }

    /// Every element in the tree (including this one) of the given kind, in document order.
    pub fn find_all_by_kind(&self, kind: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect(
            &|node| matches!(&node.node_type, NodeType::Element(k) if k == kind),
            &mut found,
        );
        found
    }

    fn collect<'a>(&'a self, matches: &dyn Fn(&Node) -> bool, found: &mut Vec<&'a Node>) {
        if matches(self) {
            found.push(self);
        }

        for child in &self.children {
            child.collect(matches, found);
        }
    }

    /// Build a [`web_sys::Node`] (and all of its children) based off of the current node
    /// representation. Requires a reference to [`Document`] in order to call the relevant node
    /// creation method on it. The returned node is detached.
    pub fn create_node(&self, document: &Document) -> Result<WsNode> {
        let node: WsNode = match &self.node_type {
            NodeType::Element(element_kind) => {
                let element = document.create_element(element_kind)?;

                if !self.classes.is_empty() {
                    element.set_class_name(&self.classes.join(" "));
                }

                for (name, value) in &self.attributes {
                    element.set_attribute(name, value)?;
                }

                element.into()
            }
            NodeType::Text(text_content) => document.create_text_node(text_content).into(),
        };

        for child in &self.children {
            node.append_child(&child.create_node(document)?)?;
        }

        Ok(node)
    }
}
