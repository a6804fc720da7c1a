//! Fragment ordering state machine.
//!
//! The only state is the kind of the most recently accepted fragment. A
//! candidate is checked against that predecessor alone, never against the full
//! history: `element, class, element` fails on the order rule, while the
//! singleton rule only catches back-to-back repeats.

use crate::{Error, FragmentKind, Result};

/// Decide whether `new` may follow `last`.
///
/// `last == None` means the selector is empty and anything is accepted.
pub fn validate(last: Option<FragmentKind>, new: FragmentKind) -> Result<()> {
    let Some(last) = last else {
        return Ok(());
    };

    if last == new && new.is_singleton() {
        return Err(Error::DuplicateSingleton { kind: new });
    }

    if new < last {
        return Err(Error::OrderViolation { last, new });
    }

    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
