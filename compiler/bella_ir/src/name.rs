//! Interned identifier.

use std::fmt;

/// Interned identifier.
///
/// A plain index into the [`StringInterner`](crate::StringInterner) that
/// produced it. Comparing two names is a single `u32` comparison, which keeps
/// environment lookups cheap.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    /// Position of this name in its interner.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_empty() {
        assert_eq!(Name::EMPTY.index(), 0);
        assert_eq!(Name::default(), Name::EMPTY);
    }

    #[test]
    fn test_name_ord() {
        assert!(Name::from_index(1) < Name::from_index(2));
    }

    #[test]
    fn test_name_debug() {
        assert_eq!(format!("{:?}", Name::from_index(7)), "Name(7)");
    }
}
