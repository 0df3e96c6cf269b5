//! Contact-tracing hierarchy: a rooted multi-way tree of traced cases.
//!
//! One [`ContactTree`] represents one traced outbreak. The root case is
//! registered once; every later contact is attached under the case that
//! exposed it. Cases are stored in a generational arena and addressed by
//! stable handles, with a case-id index for O(1) lookup. Removing a case
//! cascades over its entire subtree.
//!
//! ```
//! use tracetree::{ContactTree, TreeError};
//!
//! let mut tree = ContactTree::new();
//! tree.add_root("patient0");
//! tree.add_contact("patient0", "contact1")?;
//!
//! let report = tree.describe("patient0")?;
//! assert_eq!(report.total_cases, 2);
//!
//! tree.remove_contact("contact1")?;
//! assert_eq!(tree.len(), 1);
//! # Ok::<(), TreeError>(())
//! ```

pub mod arena;
pub mod cli;
pub mod errors;
pub mod report;
pub mod tree_traits;
pub mod util;

pub use arena::{ContactNode, ContactTree, TreeIterator};
pub use errors::{TreeError, TreeResult};
pub use report::CaseReport;
pub use tree_traits::TreeNodeConvert;
