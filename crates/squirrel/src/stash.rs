//! Timestamped value wrapper
//!
//! A [`Stash`] pairs a cached value with the instant it was created. The
//! creation time never changes after construction; the cache replaces a
//! key's stash wholesale rather than mutating it.

use chrono::{DateTime, Utc};

use crate::clock::{Clock, SystemClock};

/// Immutable value plus its creation timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stash<V> {
    value: V,
    created_at: DateTime<Utc>,
}

impl<V> Stash<V> {
    /// Wrap `value`, stamping it with the current system time
    ///
    /// # Example
    /// ```
    /// use squirrel::Stash;
    ///
    /// let stash = Stash::new("payload");
    /// assert_eq!(*stash.value(), "payload");
    /// ```
    pub fn new(value: V) -> Self {
        Self::with_clock(value, &SystemClock)
    }

    /// Wrap `value`, stamping it with the given clock's current time
    pub fn with_clock<C: Clock + ?Sized>(value: V, clock: &C) -> Self {
        Self { value, created_at: clock.now() }
    }

    /// Wrap `value` with an explicit creation timestamp
    ///
    /// Used when the value was produced elsewhere and already carries its
    /// creation time.
    pub fn at(value: V, created_at: DateTime<Utc>) -> Self {
        Self { value, created_at }
    }

    /// The wrapped value
    pub fn value(&self) -> &V {
        &self.value
    }

    /// When this stash was created
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Unwrap into the inner value, discarding the timestamp
    pub fn into_value(self) -> V {
        self.value
    }

    /// Whether this stash was created strictly after `other`
    pub fn is_newer_than<U>(&self, other: &Stash<U>) -> bool {
        self.created_at > other.created_at
    }

    /// Time elapsed between creation and `now`
    ///
    /// Negative when `now` precedes the creation time.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.created_at
    }

    /// Transform the value while keeping the original creation time
    pub fn map<U, F>(self, f: F) -> Stash<U>
    where
        F: FnOnce(V) -> U,
    {
        Stash { value: f(self.value), created_at: self.created_at }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for stash.
    use std::time::Duration;

    use super::*;
    use crate::clock::MockClock;

    /// Validates `Stash::with_clock` behavior for the stash stamps clock time
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms `stash.created_at()` equals `clock.now()`.
    /// - Confirms `stash.value()` equals `&42`.
    #[test]
    fn test_stash_stamps_clock_time() {
        let clock = MockClock::new();
        clock.advance(Duration::from_secs(5));

        let stash = Stash::with_clock(42, &clock);

        assert_eq!(stash.created_at(), clock.now());
        assert_eq!(stash.value(), &42);
    }

    /// Validates `Stash::new` behavior for the stash new uses system time
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures the timestamp falls between readings taken around creation.
    #[test]
    fn test_stash_new_uses_system_time() {
        let before = Utc::now();
        let stash = Stash::new("value");
        let after = Utc::now();

        assert!(stash.created_at() >= before - chrono::Duration::seconds(1));
        assert!(stash.created_at() <= after + chrono::Duration::seconds(1));
    }

    /// Validates `Stash::is_newer_than` behavior for the stash ordering
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures the later stash is newer than the earlier one.
    /// - Ensures the earlier stash is not newer than the later one.
    /// - Ensures equal timestamps are not considered newer.
    #[test]
    fn test_stash_is_newer_than() {
        let clock = MockClock::new();
        let older = Stash::with_clock("old", &clock);
        clock.advance_millis(1);
        let newer = Stash::with_clock("new", &clock);
        let twin = Stash::at("twin", newer.created_at());

        assert!(newer.is_newer_than(&older));
        assert!(!older.is_newer_than(&newer));
        assert!(!twin.is_newer_than(&newer));
    }

    /// Validates `Stash::age` behavior for the stash age scenario.
    ///
    /// Assertions:
    /// - Confirms the age equals the clock advance.
    #[test]
    fn test_stash_age() {
        let clock = MockClock::new();
        let stash = Stash::with_clock((), &clock);

        clock.advance(Duration::from_secs(90));

        assert_eq!(stash.age(clock.now()), chrono::Duration::seconds(90));
    }

    /// Validates `Stash::map` behavior for the stash map keeps timestamp
    /// scenario.
    ///
    /// Assertions:
    /// - Confirms the creation time is unchanged.
    /// - Confirms the mapped value is transformed.
    #[test]
    fn test_stash_map_keeps_timestamp() {
        let clock = MockClock::new();
        clock.advance_millis(700);
        let stash = Stash::with_clock(21, &clock);
        let created_at = stash.created_at();

        let doubled = stash.map(|v| v * 2);

        assert_eq!(doubled.created_at(), created_at);
        assert_eq!(doubled.into_value(), 42);
    }
}
