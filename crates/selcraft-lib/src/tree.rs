//! Owned selector tree for JSON round-tripping.
//!
//! ```json
//! {"combined": {
//!     "left": {"compound": [{"kind": "element", "value": "div"}]},
//!     "combinator": "+",
//!     "right": {"compound": [{"kind": "element", "value": "table"}, {"kind": "id", "value": "data"}]}
//! }}
//! ```
//!
//! Compound fragments are replayed through the validator on deserialization,
//! so a document can only describe selectors the builder would accept.

use crate::{CombinedSelector, CompoundSelector, Stringify};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorTree {
    Compound(CompoundSelector),
    Combined {
        left: Box<SelectorTree>,
        combinator: String,
        right: Box<SelectorTree>,
    },
}

impl SelectorTree {
    pub fn combined(
        left: SelectorTree,
        combinator: impl Into<String>,
        right: SelectorTree,
    ) -> Self {
        SelectorTree::Combined {
            left: Box::new(left),
            combinator: combinator.into(),
            right: Box::new(right),
        }
    }

    /// Number of compound selectors in the tree.
    pub fn compound_count(&self) -> usize {
        match self {
            SelectorTree::Compound(_) => 1,
            SelectorTree::Combined { left, right, .. } => {
                left.compound_count() + right.compound_count()
            }
        }
    }
}

impl Stringify for SelectorTree {
    fn stringify(&self) -> String {
        match self {
            SelectorTree::Compound(compound) => compound.stringify(),
            SelectorTree::Combined {
                left,
                combinator,
                right,
            } => format!("{} {} {}", left.stringify(), combinator, right.stringify()),
        }
    }
}

impl From<CompoundSelector> for SelectorTree {
    fn from(compound: CompoundSelector) -> Self {
        SelectorTree::Compound(compound)
    }
}

impl From<CombinedSelector<SelectorTree, SelectorTree>> for SelectorTree {
    fn from(combined: CombinedSelector<SelectorTree, SelectorTree>) -> Self {
        let (left, combinator, right) = combined.into_parts();
        SelectorTree::combined(left, combinator, right)
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
