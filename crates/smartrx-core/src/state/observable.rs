//! Observable scalar state with equality-gated change notification.
//!
//! `ObservableState<T>` holds one value shared by every UI component in the
//! process. Writers call [`ObservableState::set`]; when the new value differs
//! from the stored one, every registered listener runs synchronously, in
//! registration order, on the writer's thread.

use crate::error::{Result, SmartRxError};
use parking_lot::ReentrantMutex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Callback invoked after every distinct-value write.
pub type Listener = Arc<dyn Fn() -> Result<()> + Send + Sync>;

/// Opaque handle returned by `subscribe`, used to `unsubscribe` later.
///
/// Ids are allocated from a monotonically increasing counter, so ordering by
/// id is registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Returns the raw numeric id.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}

/// A single shared value plus its listener registry.
///
/// # Thread Safety
///
/// A re-entrant write mutex serializes the whole compare/store/notify
/// sequence across threads, so two concurrent writers can neither lose an
/// update nor interleave their broadcasts. The value itself sits behind an
/// `RwLock` that is released before listeners run, so readers (including
/// listeners) never wait on a broadcast.
///
/// A listener may write to the holder that is notifying it. The nested write
/// runs inline on the same thread, including its own broadcast, before the
/// outer broadcast continues with the remaining listeners.
pub struct ObservableState<T> {
    /// Name used in log output (e.g. "market", "modal")
    name: &'static str,
    value: RwLock<T>,
    write_lock: ReentrantMutex<()>,
    listeners: RwLock<BTreeMap<SubscriptionId, Listener>>,
    next_id: AtomicU64,
}

impl<T> ObservableState<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync,
{
    /// Creates a holder with the given initial value and no listeners.
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            name,
            value: RwLock::new(initial),
            write_lock: ReentrantMutex::new(()),
            listeners: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.value
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Stores `value` and notifies listeners if it differs from the current one.
    ///
    /// Returns `Ok(true)` when the value changed and a broadcast happened,
    /// `Ok(false)` when the write was equal to the stored value and was
    /// suppressed.
    ///
    /// # Errors
    ///
    /// Every listener is invoked even if an earlier one fails. Failures are
    /// collected: a single failure is returned as-is, several are returned as
    /// [`SmartRxError::Multiple`]. The new value is stored in either case.
    pub fn set(&self, value: T) -> Result<bool> {
        let _write = self.write_lock.lock();

        {
            let mut current = self.value.write().unwrap_or_else(PoisonError::into_inner);
            if *current == value {
                tracing::trace!(state = self.name, ?value, "Suppressed write of unchanged value");
                return Ok(false);
            }
            tracing::debug!(state = self.name, from = ?&*current, to = ?value, "State changed");
            *current = value;
        }

        self.notify()?;
        Ok(true)
    }

    /// Registers a listener for every future change.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() -> Result<()> + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::new(listener));
        tracing::trace!(state = self.name, %id, "Listener subscribed");
        id
    }

    /// Removes a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id)
            .is_some();
        if removed {
            tracing::trace!(state = self.name, %id, "Listener unsubscribed");
        }
        removed
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Invokes every listener registered at the start of the broadcast.
    ///
    /// The registry is snapshotted first, so listeners may subscribe or
    /// unsubscribe without deadlocking; such changes take effect from the
    /// next broadcast.
    fn notify(&self) -> Result<()> {
        let snapshot: Vec<(SubscriptionId, Listener)> = self
            .listeners
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(id, listener)| (*id, Arc::clone(listener)))
            .collect();

        let mut errors = Vec::new();
        for (id, listener) in snapshot {
            if let Err(e) = listener() {
                tracing::warn!(state = self.name, %id, error = %e, "Listener failed");
                errors.push(e);
            }
        }

        match SmartRxError::collect(errors) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for ObservableState<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObservableState")
            .field("name", &self.name)
            .field("value", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex as StdMutex;

    fn recorder() -> (Arc<StdMutex<Vec<&'static str>>>, impl Fn(&'static str) -> Listener) {
        let log = Arc::new(StdMutex::new(Vec::new()));
        let make = {
            let log = Arc::clone(&log);
            move |tag: &'static str| -> Listener {
                let log = Arc::clone(&log);
                Arc::new(move || {
                    log.lock().unwrap().push(tag);
                    Ok::<(), SmartRxError>(())
                })
            }
        };
        (log, make)
    }

    #[test]
    fn test_get_returns_initial_value() {
        let state = ObservableState::new("test", 7u32);
        assert_eq!(state.get(), 7);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn test_equal_write_is_suppressed() {
        let state = ObservableState::new("test", 1u32);
        let (log, make) = recorder();
        let listener = make("a");
        state.subscribe(move || listener());

        assert!(state.set(2).unwrap());
        assert!(!state.set(2).unwrap());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_write_of_initial_value_does_not_notify() {
        let state = ObservableState::new("test", 1u32);
        let (log, make) = recorder();
        let listener = make("a");
        state.subscribe(move || listener());

        assert!(!state.set(1).unwrap());
        assert!(log.lock().unwrap().is_empty());
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let state = ObservableState::new("test", 0u32);
        let (log, make) = recorder();
        for tag in ["first", "second", "third"] {
            let listener = make(tag);
            state.subscribe(move || listener());
        }

        state.set(1).unwrap();
        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let state = ObservableState::new("test", 0u32);
        let (log, make) = recorder();
        let a = make("a");
        let b = make("b");
        let id_a = state.subscribe(move || a());
        state.subscribe(move || b());

        assert!(state.unsubscribe(id_a));
        state.set(1).unwrap();
        state.set(2).unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["b", "b"]);
    }

    #[test]
    fn test_unsubscribe_twice_is_noop() {
        let state = ObservableState::new("test", false);
        let id = state.subscribe(|| Ok(()));
        assert!(state.unsubscribe(id));
        assert!(!state.unsubscribe(id));
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_ids_are_unique_and_ordered() {
        let state = ObservableState::new("test", false);
        let first = state.subscribe(|| Ok(()));
        let second = state.subscribe(|| Ok(()));
        assert!(first < second);
        assert_eq!(first.to_string(), format!("sub-{}", first.as_u64()));
    }

    #[test]
    fn test_failing_listener_does_not_stop_broadcast() {
        let state = ObservableState::new("test", 0u32);
        let (log, make) = recorder();
        state.subscribe(|| Err(SmartRxError::listener("render failed")));
        let after = make("after");
        state.subscribe(move || after());

        let err = state.set(5).unwrap_err();
        assert!(err.is_listener());
        assert_eq!(state.get(), 5);
        assert_eq!(*log.lock().unwrap(), vec!["after"]);
    }

    #[test]
    fn test_multiple_failures_are_collected() {
        let state = ObservableState::new("test", 0u32);
        state.subscribe(|| Err(SmartRxError::listener("one")));
        state.subscribe(|| Err(SmartRxError::listener("two")));

        match state.set(1) {
            Err(SmartRxError::Multiple(errors)) => assert_eq!(errors.len(), 2),
            other => panic!("expected Multiple, got {:?}", other),
        }
    }

    #[test]
    fn test_listener_can_read_new_value() {
        let state = Arc::new(ObservableState::new("test", String::from("a")));
        let seen = Arc::new(StdMutex::new(None));
        {
            let state_ref = Arc::clone(&state);
            let seen = Arc::clone(&seen);
            state.subscribe(move || {
                *seen.lock().unwrap() = Some(state_ref.get());
                Ok(())
            });
        }

        state.set("b".to_string()).unwrap();
        assert_eq!(seen.lock().unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn test_unsubscribe_inside_listener_applies_next_broadcast() {
        let state = Arc::new(ObservableState::new("test", 0u32));
        let calls = Arc::new(StdMutex::new(0u32));
        let own_id = Arc::new(StdMutex::new(None::<SubscriptionId>));
        let id = {
            let state_ref = Arc::clone(&state);
            let calls = Arc::clone(&calls);
            let own_id = Arc::clone(&own_id);
            state.subscribe(move || {
                *calls.lock().unwrap() += 1;
                if let Some(id) = *own_id.lock().unwrap() {
                    state_ref.unsubscribe(id);
                }
                Ok(())
            })
        };
        *own_id.lock().unwrap() = Some(id);

        state.set(1).unwrap();
        state.set(2).unwrap();
        assert_eq!(*calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_nested_write_runs_inline_before_remaining_listeners() {
        let state = Arc::new(ObservableState::new("test", 0u32));
        let seen = Arc::new(StdMutex::new(Vec::new()));
        {
            let state_ref = Arc::clone(&state);
            let seen = Arc::clone(&seen);
            state.subscribe(move || {
                let value = state_ref.get();
                seen.lock().unwrap().push(("clamp", value));
                if value > 10 {
                    state_ref.set(10)?;
                }
                Ok(())
            });
        }
        {
            let state_ref = Arc::clone(&state);
            let seen = Arc::clone(&seen);
            state.subscribe(move || {
                seen.lock().unwrap().push(("render", state_ref.get()));
                Ok(())
            });
        }

        assert!(state.set(42).unwrap());
        assert_eq!(state.get(), 10);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![("clamp", 42), ("clamp", 10), ("render", 10), ("render", 10)]
        );
    }
}
