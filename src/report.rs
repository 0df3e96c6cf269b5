use std::fmt;

/// Snapshot of one case's statistics, produced by [`ContactTree::describe`].
///
/// Plain data, detached from the arena: safe to hold across later tree
/// mutations and cheap to hand to a renderer.
///
/// [`ContactTree::describe`]: crate::arena::ContactTree::describe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub id: String,
    pub direct_contacts: usize,
    pub total_cases: usize,
    /// None marks the root case
    pub parent_id: Option<String>,
    /// Direct contact ids in insertion order
    pub child_ids: Vec<String>,
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Case Id: {}", self.id)?;
        writeln!(f, "Direct Contacts: {}", self.direct_contacts)?;
        writeln!(f, "Total Cases: {}", self.total_cases)?;
        match &self.parent_id {
            Some(parent) => writeln!(f, "Parent Id: {}", parent)?,
            None => writeln!(f, "Parent Id: root case")?,
        }
        write!(f, "Child Ids: {}", self.child_ids.join(" "))
    }
}
