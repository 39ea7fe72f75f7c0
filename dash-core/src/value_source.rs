//! Owned versus self-managed widget values.
//!
//! A widget either mirrors a value its parent owns or keeps its own copy
//! seeded from an initial value. The choice is made once at construction
//! and the variant never changes afterwards.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueSource<T> {
    /// The parent owns the value; the widget only requests changes.
    /// Holds the value seen at construction as a fallback.
    Owned(T),
    /// The widget owns the value, starting from the given initial value.
    SelfManaged(T),
}

impl<T: Clone> ValueSource<T> {
    /// `Owned` when the parent supplied a value, else `SelfManaged(initial())`.
    pub fn new(owned: Option<T>, initial: impl FnOnce() -> T) -> Self {
        match owned {
            Some(value) => ValueSource::Owned(value),
            None => ValueSource::SelfManaged(initial()),
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, ValueSource::Owned(_))
    }

    /// Value to display. An owned source follows the parent's latest value;
    /// a self-managed source ignores it.
    pub fn current(&self, owner: Option<&T>) -> T {
        match self {
            ValueSource::Owned(fallback) => owner.unwrap_or(fallback).clone(),
            ValueSource::SelfManaged(value) => value.clone(),
        }
    }

    /// Record a change requested by the user and return the value to report
    /// to the parent. Owned sources leave storage to the parent.
    pub fn apply(&mut self, value: T) -> T {
        if let ValueSource::SelfManaged(stored) = self {
            *stored = value.clone();
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::ValueSource;

    #[test]
    fn test_owned_follows_parent() {
        let mut source = ValueSource::new(Some(1), || 99);
        assert!(source.is_owned());
        assert_eq!(source.current(Some(&5)), 5);
        assert_eq!(source.apply(7), 7);
        // parent has not adopted 7 yet
        assert_eq!(source.current(Some(&5)), 5);
        assert_eq!(source.current(None), 1);
    }

    #[test]
    fn test_self_managed_keeps_its_value() {
        let mut source = ValueSource::new(None, || 99);
        assert!(!source.is_owned());
        assert_eq!(source.current(Some(&5)), 99);
        assert_eq!(source.apply(7), 7);
        assert_eq!(source.current(None), 7);
    }
}
