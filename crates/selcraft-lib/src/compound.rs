//! Compound selector: fragments applying to a single element.

use std::fmt;

use crate::validate::validate;
use crate::{Fragment, FragmentKind, Result, Stringify};

/// Accumulates validated fragments into selector text.
///
/// Fragments must arrive in `FragmentKind` order and a singleton kind may not
/// directly follow itself. A rejected fragment leaves the selector untouched.
///
/// The fluent methods consume and return the selector; `push` is the in-place
/// form they share.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Fragment>", into = "Vec<Fragment>")]
pub struct CompoundSelector {
    text: String,
    fragments: Vec<Fragment>,
    last_kind: Option<FragmentKind>,
}

impl CompoundSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate, render and append one fragment.
    pub fn push(&mut self, kind: FragmentKind, value: impl Into<String>) -> Result<&mut Self> {
        if let Err(err) = validate(self.last_kind, kind) {
            tracing::debug!(selector = %self.text, %kind, "fragment rejected: {err}");
            return Err(err);
        }

        let value = value.into();
        kind.render_into(&value, &mut self.text);
        tracing::trace!(selector = %self.text, %kind, "fragment accepted");

        self.fragments.push(Fragment { kind, value });
        self.last_kind = Some(kind);
        Ok(self)
    }

    /// Type selector, rendered as-is.
    pub fn element(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Element, value)
    }

    /// `#value`
    pub fn id(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Id, value)
    }

    /// `.value`
    pub fn class(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Class, value)
    }

    /// `[value]`; the value is the whole attribute condition, e.g. `href$=".png"`.
    pub fn attr(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::Attribute, value)
    }

    /// `:value`
    pub fn pseudo_class(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::PseudoClass, value)
    }

    /// `::value`
    pub fn pseudo_element(self, value: impl Into<String>) -> Result<Self> {
        self.with(FragmentKind::PseudoElement, value)
    }

    fn with(mut self, kind: FragmentKind, value: impl Into<String>) -> Result<Self> {
        self.push(kind, value)?;
        Ok(self)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Kind of the most recently accepted fragment.
    pub fn last_kind(&self) -> Option<FragmentKind> {
        self.last_kind
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl Stringify for CompoundSelector {
    fn stringify(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Replays the fragments through the validator.
impl TryFrom<Vec<Fragment>> for CompoundSelector {
    type Error = crate::Error;

    fn try_from(fragments: Vec<Fragment>) -> Result<Self> {
        let mut selector = Self::new();
        for Fragment { kind, value } in fragments {
            selector.push(kind, value)?;
        }
        Ok(selector)
    }
}

impl From<CompoundSelector> for Vec<Fragment> {
    fn from(selector: CompoundSelector) -> Self {
        selector.fragments
    }
}
