//! Accuracy tagging for computed values.

/// A value together with how it was obtained.
///
/// `Approximate` means a fallback path produced it (linear ephemeris, or a
/// solver that could not bracket its root). Consumers must handle both arms;
/// there is no way to read the value without seeing the tag except through
/// [`Computed::into_inner`], which callers use only after recording it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Computed<T> {
    /// Produced by the full-precision path.
    Accurate(T),
    /// Produced by a lower-precision fallback.
    Approximate(T),
}

impl<T> Computed<T> {
    /// Borrow the value regardless of accuracy.
    pub fn value(&self) -> &T {
        match self {
            Self::Accurate(v) | Self::Approximate(v) => v,
        }
    }

    /// Take the value regardless of accuracy.
    pub fn into_inner(self) -> T {
        match self {
            Self::Accurate(v) | Self::Approximate(v) => v,
        }
    }

    pub fn is_approximate(&self) -> bool {
        matches!(self, Self::Approximate(_))
    }

    /// Transform the value, keeping the tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Computed<U> {
        match self {
            Self::Accurate(v) => Computed::Accurate(f(v)),
            Self::Approximate(v) => Computed::Approximate(f(v)),
        }
    }

    /// Downgrade to `Approximate` when `approximate` is true.
    pub fn degrade_if(self, approximate: bool) -> Self {
        match self {
            Self::Accurate(v) if approximate => Self::Approximate(v),
            other => other,
        }
    }

    /// Pair two values; the result is approximate if either input is.
    pub fn zip<U>(self, other: Computed<U>) -> Computed<(T, U)> {
        let approximate = self.is_approximate() || other.is_approximate();
        Computed::Accurate((self.into_inner(), other.into_inner())).degrade_if(approximate)
    }
}
