//! Entry points for building selectors.
//!
//! Each fragment function starts a fresh `CompoundSelector`, so a chain always
//! begins here:
//!
//! ```
//! use selcraft_lib::{Combinator, Stringify, builder};
//!
//! let table = builder::element("table")?.id("data")?;
//! let sel = builder::combine(builder::element("div")?, Combinator::NextSibling, &table);
//! assert_eq!(sel.stringify(), "div + table#data");
//! # Ok::<(), selcraft_lib::Error>(())
//! ```

use crate::{CombinedSelector, CompoundSelector, Result, Stringify};

pub fn element(value: impl Into<String>) -> Result<CompoundSelector> {
    CompoundSelector::new().element(value)
}

pub fn id(value: impl Into<String>) -> Result<CompoundSelector> {
    CompoundSelector::new().id(value)
}

pub fn class(value: impl Into<String>) -> Result<CompoundSelector> {
    CompoundSelector::new().class(value)
}

pub fn attr(value: impl Into<String>) -> Result<CompoundSelector> {
    CompoundSelector::new().attr(value)
}

pub fn pseudo_class(value: impl Into<String>) -> Result<CompoundSelector> {
    CompoundSelector::new().pseudo_class(value)
}

pub fn pseudo_element(value: impl Into<String>) -> Result<CompoundSelector> {
    CompoundSelector::new().pseudo_element(value)
}

/// Join two selectors with a combinator.
///
/// The combinator is not checked against the documented tokens. Pass operands
/// by reference to reuse them in several combinations.
pub fn combine<L: Stringify, R: Stringify>(
    left: L,
    combinator: impl Into<String>,
    right: R,
) -> CombinedSelector<L, R> {
    CombinedSelector::new(left, combinator, right)
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
