//! The one capability shared by every selector shape.

/// Something that renders to selector text.
///
/// Compound and combined selectors share no state, only this operation, so
/// `combine` accepts any `Stringify` and combines nest freely.
pub trait Stringify {
    fn stringify(&self) -> String;
}

impl<T: Stringify + ?Sized> Stringify for &T {
    fn stringify(&self) -> String {
        (*self).stringify()
    }
}

impl<T: Stringify + ?Sized> Stringify for Box<T> {
    fn stringify(&self) -> String {
        (**self).stringify()
    }
}
