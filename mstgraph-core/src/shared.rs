//! Thread-safe handle for sharing one session between an input thread and a
//! rendering thread.
//!
//! All mutations run under a single lock, one at a time, and snapshots are
//! copied under the same lock. A reader can therefore only ever observe the
//! state before or after a complete mutation.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{GraphError, GraphSession, GraphSnapshot, Result};

/// Cloneable, lock-protected [`GraphSession`].
///
/// # Examples
/// ```
/// use std::thread;
///
/// use mstgraph_core::{SessionBuilder, SharedSession};
///
/// let shared = SharedSession::new(SessionBuilder::new().with_initial_vertices(0).build()?);
/// let writer = shared.clone();
/// thread::spawn(move || writer.mutate(|session| session.add_vertex(1.0, 2.0)))
///     .join()
///     .expect("writer thread must not panic")?;
/// assert_eq!(shared.snapshot()?.vertices().len(), 1);
/// # Ok::<(), mstgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SharedSession {
    inner: Arc<Mutex<GraphSession>>,
}

impl SharedSession {
    /// Wraps `session` for shared use.
    #[must_use]
    pub fn new(session: GraphSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Runs `mutation` with exclusive access to the session.
    ///
    /// # Errors
    /// Returns [`GraphError::LockPoisoned`] if a previous holder panicked, or
    /// whatever error `mutation` returns.
    pub fn mutate<T>(&self, mutation: impl FnOnce(&mut GraphSession) -> Result<T>) -> Result<T> {
        let mut guard = self.lock()?;
        mutation(&mut guard)
    }

    /// Copies the most recently committed state.
    ///
    /// # Errors
    /// Returns [`GraphError::LockPoisoned`] if a previous holder panicked.
    pub fn snapshot(&self) -> Result<GraphSnapshot> {
        Ok(self.lock()?.snapshot())
    }

    fn lock(&self) -> Result<MutexGuard<'_, GraphSession>> {
        self.inner.lock().map_err(|_| GraphError::LockPoisoned {
            resource: "graph session",
        })
    }
}
