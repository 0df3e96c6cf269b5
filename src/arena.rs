use std::collections::{HashMap, VecDeque};
use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::report::CaseReport;

/// One traced person/case in the contact hierarchy.
#[derive(Debug)]
pub struct ContactNode {
    /// Unique case identifier (e.g., a medical record id)
    pub id: String,
    /// Subtree size rooted at this case, including itself
    pub total_cases: usize,
    /// Index of the exposing case in the arena, None for the root case
    pub parent: Option<Index>,
    /// Indices of direct contacts, insertion order preserved
    pub children: Vec<Index>,
}

impl ContactNode {
    fn new(id: &str, parent: Option<Index>) -> Self {
        Self {
            id: id.to_string(),
            total_cases: 1,
            parent,
            children: Vec::new(),
        }
    }

    /// Number of immediate contacts. Derived from the child list so it
    /// cannot drift out of sync with the tree structure.
    pub fn direct_contacts(&self) -> usize {
        self.children.len()
    }
}

impl fmt::Display for ContactNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Arena-based contact-tracing tree.
///
/// Uses generational arena for memory-safe node references and a case-id
/// index for O(1) lookups. One tree represents one traced outbreak: a single
/// root case with every later contact attached under the case that exposed it.
#[derive(Debug)]
pub struct ContactTree {
    /// Arena storage for all case nodes
    arena: Arena<ContactNode>,
    /// Index of the root case, None while the tree is empty
    root: Option<Index>,
    /// Case id -> arena index
    index: HashMap<String, Index>,
}

impl Default for ContactTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            index: HashMap::new(),
        }
    }

    /// Registers the root case. First call wins; while a root exists the
    /// call is a no-op and returns false.
    #[instrument(level = "debug", skip(self))]
    pub fn add_root(&mut self, id: &str) -> bool {
        if self.root.is_some() {
            return false;
        }
        let root_idx = self.arena.insert(ContactNode::new(id, None));
        self.index.insert(id.to_string(), root_idx);
        self.root = Some(root_idx);
        true
    }

    /// Attaches a new contact under an existing case.
    ///
    /// The parent must resolve via the index and the child id must not be
    /// in use anywhere in the tree. On success the new case is appended to
    /// the parent's contact list and every ancestor's `total_cases` grows
    /// by one, the parent included.
    #[instrument(level = "debug", skip(self))]
    pub fn add_contact(&mut self, parent_id: &str, child_id: &str) -> TreeResult<Index> {
        let parent_idx = self
            .lookup(parent_id)
            .ok_or_else(|| TreeError::ParentNotFound(parent_id.to_string()))?;
        if self.index.contains_key(child_id) {
            return Err(TreeError::DuplicateContact(child_id.to_string()));
        }

        let child_idx = self
            .arena
            .insert(ContactNode::new(child_id, Some(parent_idx)));
        self.index.insert(child_id.to_string(), child_idx);
        if let Some(parent) = self.arena.get_mut(parent_idx) {
            parent.children.push(child_idx);
        }

        // Attaching a leaf grows the subtree of every ancestor by exactly one.
        let mut current = Some(parent_idx);
        while let Some(idx) = current {
            match self.arena.get_mut(idx) {
                Some(node) => {
                    node.total_cases += 1;
                    current = node.parent;
                }
                None => break,
            }
        }

        Ok(child_idx)
    }

    /// Resolves a case id to its arena index. O(1) average.
    #[instrument(level = "trace", skip(self))]
    pub fn lookup(&self, id: &str) -> Option<Index> {
        self.index.get(id).copied()
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node(&self, idx: Index) -> Option<&ContactNode> {
        self.arena.get(idx)
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut ContactNode> {
        self.arena.get_mut(idx)
    }

    /// Convenience lookup straight to the node.
    #[instrument(level = "trace", skip(self))]
    pub fn get_contact(&self, id: &str) -> Option<&ContactNode> {
        self.lookup(id).and_then(|idx| self.get_node(idx))
    }

    #[instrument(level = "trace", skip(self))]
    pub fn root(&self) -> Option<Index> {
        self.root
    }

    /// Number of live cases in the tree.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes a case and, transitively, all of its downstream contacts.
    ///
    /// The target is detached from its parent's contact list once; the
    /// subtree below it is then drained breadth-first, voiding the index
    /// entry of every visited case. Returns the number of removed cases.
    ///
    /// `total_cases` on the ancestors above the removed subtree keeps its
    /// pre-removal value. This matches the documented behavior of the
    /// tracing tool this crate reimplements; see DESIGN.md.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_contact(&mut self, id: &str) -> TreeResult<usize> {
        let target_idx = self
            .lookup(id)
            .ok_or_else(|| TreeError::ContactNotFound(id.to_string()))?;

        // Detach the removal root; descendants stay linked among themselves
        // and leave together with the subtree.
        match self.arena.get(target_idx).and_then(|n| n.parent) {
            Some(parent_idx) => {
                if let Some(parent) = self.arena.get_mut(parent_idx) {
                    parent.children.retain(|&c| c != target_idx);
                }
            }
            None => self.root = None,
        }

        let mut queue = VecDeque::from([target_idx]);
        let mut removed = 0;
        while let Some(idx) = queue.pop_front() {
            if let Some(node) = self.arena.remove(idx) {
                queue.extend(node.children);
                self.index.remove(&node.id);
                removed += 1;
            }
        }

        Ok(removed)
    }

    /// Single-case statistics: direct contacts, total cases, parent and
    /// child ids in insertion order.
    #[instrument(level = "trace", skip(self))]
    pub fn describe(&self, id: &str) -> TreeResult<CaseReport> {
        let node = self
            .get_contact(id)
            .ok_or_else(|| TreeError::ContactNotFound(id.to_string()))?;

        let parent_id = node
            .parent
            .and_then(|p| self.get_node(p))
            .map(|p| p.id.clone());
        let child_ids = node
            .children
            .iter()
            .filter_map(|&c| self.get_node(c))
            .map(|c| c.id.clone())
            .collect();

        Ok(CaseReport {
            id: node.id.clone(),
            direct_contacts: node.direct_contacts(),
            total_cases: node.total_cases,
            parent_id,
            child_ids,
        })
    }

    /// Lazy pre-order traversal yielding `(index, node, depth)`, depth 0 at
    /// the root, siblings in insertion order. A fresh iterator is needed for
    /// every render.
    #[instrument(level = "trace", skip(self))]
    pub fn iter(&self) -> TreeIterator<'_> {
        TreeIterator::new(self)
    }

    /// Longest chain of exposure from the root down to a leaf.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        if let Some(root) = self.root {
            self.calculate_depth(root)
        } else {
            0
        }
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .iter()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Ids of all cases with no onward contacts.
    #[instrument(level = "debug", skip(self))]
    pub fn leaf_contacts(&self) -> Vec<String> {
        let mut leaves = Vec::new();
        if let Some(root) = self.root {
            self.collect_leaves(root, &mut leaves);
        }
        leaves
    }

    fn collect_leaves(&self, node_idx: Index, leaves: &mut Vec<String>) {
        if let Some(node) = self.get_node(node_idx) {
            if node.children.is_empty() {
                leaves.push(node.id.clone());
            } else {
                for &child in &node.children {
                    self.collect_leaves(child, leaves);
                }
            }
        }
    }
}

pub struct TreeIterator<'a> {
    tree: &'a ContactTree,
    stack: Vec<(Index, usize)>,
}

impl<'a> TreeIterator<'a> {
    fn new(tree: &'a ContactTree) -> Self {
        let mut stack = Vec::new();
        if let Some(root) = tree.root() {
            stack.push((root, 0));
        }
        Self { tree, stack }
    }
}

impl<'a> Iterator for TreeIterator<'a> {
    type Item = (Index, &'a ContactNode, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((current_idx, depth)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current_idx) {
                // Push children in reverse order for left-to-right traversal
                for &child in node.children.iter().rev() {
                    self.stack.push((child, depth + 1));
                }
                return Some((current_idx, node, depth));
            }
        }
        None
    }
}
