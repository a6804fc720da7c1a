//! Fragment vocabulary.
//!
//! Variant declaration order is the required order inside a compound selector,
//! so the derived `Ord` is the ordering the validator checks against.

use std::fmt;

/// Kind of a single compound-selector fragment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FragmentKind {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl FragmentKind {
    /// All kinds, in required order.
    pub const ALL: [FragmentKind; 6] = [
        FragmentKind::Element,
        FragmentKind::Id,
        FragmentKind::Class,
        FragmentKind::Attribute,
        FragmentKind::PseudoClass,
        FragmentKind::PseudoElement,
    ];

    /// Position in the required order (element = 0).
    pub fn order(self) -> u8 {
        self as u8
    }

    /// Kinds allowed at most once per compound selector.
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            FragmentKind::Element | FragmentKind::Id | FragmentKind::PseudoElement
        )
    }

    /// Text written before the value.
    pub fn prefix(self) -> &'static str {
        match self {
            FragmentKind::Element => "",
            FragmentKind::Id => "#",
            FragmentKind::Class => ".",
            FragmentKind::Attribute => "[",
            FragmentKind::PseudoClass => ":",
            FragmentKind::PseudoElement => "::",
        }
    }

    /// Text written after the value.
    pub fn suffix(self) -> &'static str {
        match self {
            FragmentKind::Attribute => "]",
            _ => "",
        }
    }

    /// Append the decorated `value` to `out`.
    pub fn render_into(self, value: &str, out: &mut String) {
        out.reserve(self.prefix().len() + value.len() + self.suffix().len());
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
    }

    /// Decorated `value` as a fresh string.
    pub fn render(self, value: &str) -> String {
        let mut out = String::new();
        self.render_into(value, &mut out);
        out
    }

    pub fn name(self) -> &'static str {
        match self {
            FragmentKind::Element => "element",
            FragmentKind::Id => "id",
            FragmentKind::Class => "class",
            FragmentKind::Attribute => "attribute",
            FragmentKind::PseudoClass => "pseudo-class",
            FragmentKind::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One accepted fragment: its kind and the undecorated value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub value: String,
}

impl Fragment {
    pub fn new(kind: FragmentKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn render(&self) -> String {
        self.kind.render(&self.value)
    }
}
