use super::{snapshot, SnapshotStore};
use crate::timer::{Transition, TransitionObserver};

/// Writes the full snapshot after every transition. Last writer wins.
///
/// Failures are logged and swallowed; the transition has already happened.
pub struct PersistObserver<S: SnapshotStore> {
    store: S,
}

impl<S: SnapshotStore> PersistObserver<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

impl<S: SnapshotStore> TransitionObserver for PersistObserver<S> {
    fn on_transition(&mut self, t: &Transition<'_>) {
        let raw = match snapshot::encode(t.next) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(intent = t.intent.name(), error = %err, "failed to encode snapshot");
                return;
            }
        };
        if let Err(err) = self.store.save(&raw) {
            tracing::warn!(intent = t.intent.name(), error = %err, "failed to persist snapshot");
        }
    }
}
