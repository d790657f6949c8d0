use std::slice;

use crate::XmlElementNode;

/// Result of an index query. `NotFound` is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a XmlElementNode),
    FoundMany(Vec<&'a XmlElementNode>),
    NotFound,
}

impl<'a> Lookup<'a> {
    fn from_matches(mut matches: Vec<&'a XmlElementNode>) -> Self {
        match matches.len() {
            0 => Lookup::NotFound,
            1 => Lookup::Found(matches.remove(0)),
            _ => Lookup::FoundMany(matches),
        }
    }

    pub fn first(&self) -> Option<&'a XmlElementNode> {
        match self {
            Lookup::Found(node) => Some(*node),
            Lookup::FoundMany(nodes) => nodes.first().copied(),
            Lookup::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Lookup::NotFound)
    }

    pub fn len(&self) -> usize {
        match self {
            Lookup::Found(_) => 1,
            Lookup::FoundMany(nodes) => nodes.len(),
            Lookup::NotFound => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_vec(self) -> Vec<&'a XmlElementNode> {
        match self {
            Lookup::Found(node) => vec![node],
            Lookup::FoundMany(nodes) => nodes,
            Lookup::NotFound => Vec::new(),
        }
    }
}

impl<'a> IntoIterator for Lookup<'a> {
    type Item = &'a XmlElementNode;
    type IntoIter = std::vec::IntoIter<&'a XmlElementNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

/// Pre-order walk over every element below a node, in document order.
/// The starting node itself is not yielded.
pub struct Descendants<'a> {
    stack: Vec<slice::Iter<'a, XmlElementNode>>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a XmlElementNode;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(children) = self.stack.last_mut() {
            match children.next() {
                Some(element) => {
                    self.stack.push(element.children.iter());
                    return Some(element);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}

impl XmlElementNode {
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: vec![self.children.iter()],
        }
    }

    /// Every descendant carrying `key`, optionally restricted to an exact value.
    pub fn find_all_by_attribute(&self, key: &str, value: Option<&str>) -> Lookup<'_> {
        Lookup::from_matches(
            self.descendants()
                .filter(|node| match (node.attr(key), value) {
                    (Some(found), Some(expected)) => found == expected,
                    (Some(_), None) => true,
                    (None, _) => false,
                })
                .collect(),
        )
    }

    pub fn find_all_named(&self, tag: &str) -> Lookup<'_> {
        Lookup::from_matches(self.descendants().filter(|node| node.name == tag).collect())
    }

    pub fn find_by_id(&self, id: &str) -> Lookup<'_> {
        match self.descendants().find(|node| node.attr("id") == Some(id)) {
            Some(node) => Lookup::Found(node),
            None => Lookup::NotFound,
        }
    }
}
