//! Typed builder for CSS-like selectors.
//!
//! Selectors are assembled from fragments rather than parsed:
//! - `fragment` - fragment kinds, their fixed order and decoration
//! - `validate` - the state machine deciding whether a fragment may follow another
//! - `compound` - `CompoundSelector`, the fragment accumulator
//! - `combined` - `CombinedSelector` and the documented combinator tokens
//! - `builder` - entry points (`element`, `id`, ..., `combine`)
//! - `tree` - owned selector tree for JSON round-tripping
//!
//! ```
//! use selcraft_lib::{Stringify, builder};
//!
//! let sel = builder::element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
//! assert_eq!(sel.stringify(), r#"a[href$=".png"]:focus"#);
//! # Ok::<(), selcraft_lib::Error>(())
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod combined;
pub mod compound;
pub mod fragment;
pub mod stringify;
pub mod tree;
pub mod validate;


pub use combined::{CombinedSelector, Combinator};
pub use compound::CompoundSelector;
pub use fragment::{Fragment, FragmentKind};
pub use stringify::Stringify;
pub use tree::SelectorTree;

/// Errors raised while appending a fragment to a compound selector.
///
/// Both are programming errors in the call sequence; nothing recovers from them
/// internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A singleton kind directly followed itself.
    #[error(
        "duplicate {kind} fragment: element, id and pseudo-element may occur at most once \
         in a compound selector"
    )]
    DuplicateSingleton { kind: FragmentKind },

    /// A fragment came after a kind that must follow it.
    #[error(
        "{new} fragment cannot follow {last} fragment: fragments must be ordered \
         element, id, class, attribute, pseudo-class, pseudo-element"
    )]
    OrderViolation {
        last: FragmentKind,
        new: FragmentKind,
    },
}

/// Result type for selector construction.
pub type Result<T> = std::result::Result<T, Error>;
