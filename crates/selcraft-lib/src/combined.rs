//! Two selectors joined by a combinator.

use std::fmt;

use crate::Stringify;

/// Immutable `left combinator right` triple produced by `builder::combine`.
///
/// The combinator is opaque text: any string is accepted and interpolated
/// between single spaces. Operands may be owned selectors, borrows, or other
/// combined selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedSelector<L, R> {
    left: L,
    combinator: String,
    right: R,
}

impl<L: Stringify, R: Stringify> CombinedSelector<L, R> {
    pub fn new(left: L, combinator: impl Into<String>, right: R) -> Self {
        Self {
            left,
            combinator: combinator.into(),
            right,
        }
    }
}

impl<L, R> CombinedSelector<L, R> {
    pub fn left(&self) -> &L {
        &self.left
    }

    pub fn combinator(&self) -> &str {
        &self.combinator
    }

    pub fn right(&self) -> &R {
        &self.right
    }

    pub fn into_parts(self) -> (L, String, R) {
        (self.left, self.combinator, self.right)
    }
}

impl<L: Stringify, R: Stringify> Stringify for CombinedSelector<L, R> {
    fn stringify(&self) -> String {
        self.to_string()
    }
}

impl<L: Stringify, R: Stringify> fmt::Display for CombinedSelector<L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.left.stringify(),
            self.combinator,
            self.right.stringify()
        )
    }
}

/// The four documented combinator tokens.
///
/// A typed shorthand only; `combine` takes any string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// `" "`
    Descendant,
    /// `">"`
    Child,
    /// `"+"`
    NextSibling,
    /// `"~"`
    SubsequentSibling,
}

impl Combinator {
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::Descendant => " ",
            Combinator::Child => ">",
            Combinator::NextSibling => "+",
            Combinator::SubsequentSibling => "~",
        }
    }

    /// Inverse of `as_str`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            " " => Some(Combinator::Descendant),
            ">" => Some(Combinator::Child),
            "+" => Some(Combinator::NextSibling),
            "~" => Some(Combinator::SubsequentSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Combinator> for String {
    fn from(combinator: Combinator) -> Self {
        combinator.as_str().to_string()
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
