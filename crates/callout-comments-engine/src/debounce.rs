use std::{
    borrow::Borrow,
    collections::HashMap,
    hash::Hash,
    time::{Duration, Instant},
};

/// Per-key rate limiter for re-parse triggers.
///
/// The first event for a key is admitted straight away. Events arriving
/// within `window` of the last admitted one are dropped, not deferred: no
/// trailing call is ever scheduled. Time is passed in by the caller, so the
/// limiter works under any event loop or none.
#[derive(Debug)]
pub struct Debouncer<K> {
    window: Duration,
    last_admitted: HashMap<K, Instant>,
}

impl<K: Eq + Hash> Debouncer<K> {
    pub const DEFAULT_WINDOW: Duration = Duration::from_millis(500);

    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_admitted: HashMap::new(),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records an event for `key` at `now` and reports whether to act on it.
    pub fn admit<Q>(&mut self, key: &Q, now: Instant) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        if let Some(&last) = self.last_admitted.get(key)
            && now.saturating_duration_since(last) < self.window
        {
            log::trace!(
                "suppressed event {:?} after last admit",
                now.saturating_duration_since(last)
            );
            return false;
        }
        self.last_admitted.insert(key.to_owned(), now);
        true
    }

    /// Drops the history for `key`, so its next event is admitted.
    pub fn forget<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.last_admitted.remove(key);
    }
}

impl<K: Eq + Hash> Default for Debouncer<K> {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use relative_path::{RelativePath, RelativePathBuf};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn leading_event_is_admitted_and_burst_suppressed() {
        let mut debouncer: Debouncer<String> = Debouncer::default();
        let t0 = Instant::now();

        assert!(debouncer.admit("a.md", t0));
        assert!(!debouncer.admit("a.md", t0 + ms(100)));
        assert!(!debouncer.admit("a.md", t0 + ms(499)));
        assert!(debouncer.admit("a.md", t0 + ms(500)));
        assert!(!debouncer.admit("a.md", t0 + ms(700)));
    }

    #[test]
    fn keys_are_independent() {
        let mut debouncer: Debouncer<RelativePathBuf> = Debouncer::new(ms(50));
        let t0 = Instant::now();

        assert!(debouncer.admit(RelativePath::new("a.md"), t0));
        assert!(debouncer.admit(RelativePath::new("b.md"), t0 + ms(1)));
        assert!(!debouncer.admit(RelativePath::new("a.md"), t0 + ms(2)));
    }

    #[test]
    fn forget_resets_the_window() {
        let mut debouncer: Debouncer<String> = Debouncer::new(ms(50));
        let t0 = Instant::now();

        assert!(debouncer.admit("a.md", t0));
        debouncer.forget("a.md");
        assert!(debouncer.admit("a.md", t0 + ms(1)));
    }

    #[test]
    fn clock_going_backwards_is_suppressed() {
        let mut debouncer: Debouncer<String> = Debouncer::new(ms(50));
        let t0 = Instant::now() + ms(1000);

        assert!(debouncer.admit("a.md", t0));
        assert!(!debouncer.admit("a.md", t0 - ms(10)));
        assert_eq!(debouncer.window(), ms(50));
    }
}
