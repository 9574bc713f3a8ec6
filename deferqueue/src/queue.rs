//! The deferred-callback queue and its drain operation.

use crate::config::{DeferConfig, RemovalPolicy};
use crate::errors::DeferError;
use crate::outcome::Outcome;
use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use parking_lot::{Mutex, RwLock};
use std::collections::VecDeque;
use std::future::Future;
use std::sync::Arc;
use tracing::error;

/// A registered async-list callback.
///
/// Stored behind `Arc` so a drain can snapshot the list without invoking
/// user code while the lock is held. The async list is never consumed, so
/// these must be re-invocable (`Fn`).
type AsyncCallback<T, E> = Arc<dyn Fn() -> BoxFuture<'static, Result<T, E>> + Send + Sync>;

/// A registered sync-list callback. The sync list is consumed destructively,
/// so a single-shot closure suffices.
type SyncCallback<T, E> = Box<dyn FnOnce() -> BoxFuture<'static, Result<T, E>> + Send>;

/// A queue of deferred callbacks drained on demand.
///
/// Callbacks are registered on one of two lists and all run during
/// [`defer`](Self::defer):
///
/// - the **async list** is snapshotted at drain start and every entry is
///   awaited jointly; the list itself is left untouched, so a later drain
///   runs the same entries again;
/// - the **sync list** is popped one entry at a time per the configured
///   [`RemovalPolicy`], each awaited to completion before the next is
///   removed, until the list is empty. The list is re-read on every
///   iteration, so entries appended mid-drain are picked up.
///
/// Both units run concurrently with each other, interleaved cooperatively on
/// the calling task. A failing callback is logged with the queue's name and
/// recorded as a failed [`Outcome`]; it never aborts its siblings, the other
/// unit, or the drain itself.
pub struct DeferQueue<T, E = DeferError> {
    /// Human-readable name used in diagnostics. Not required to be unique.
    name: String,
    /// Drain configuration.
    config: DeferConfig,
    /// Callbacks run jointly by the async unit.
    async_list: RwLock<Vec<AsyncCallback<T, E>>>,
    /// Callbacks run one at a time by the sync unit.
    sync_list: Mutex<VecDeque<SyncCallback<T, E>>>,
}

impl<T: 'static, E: 'static> DeferQueue<T, E> {
    /// Creates a queue with the default configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, DeferConfig::default())
    }

    /// Creates a queue with an explicit configuration.
    #[must_use]
    pub fn with_config(name: impl Into<String>, config: DeferConfig) -> Self {
        Self {
            name: name.into(),
            config,
            async_list: RwLock::new(Vec::new()),
            sync_list: Mutex::new(VecDeque::new()),
        }
    }

    /// Returns the queue's diagnostic name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the queue's configuration.
    #[must_use]
    pub const fn config(&self) -> &DeferConfig {
        &self.config
    }

    /// Appends a callback to the end of the async list.
    ///
    /// Async-list callbacks are run jointly by the next drain and are not
    /// removed by it, so every subsequent drain re-runs them as well.
    pub fn append_async<F, Fut>(&self, callback: F)
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.async_list
            .write()
            .push(Arc::new(move || callback().boxed()));
    }

    /// Appends a callback to the end of the sync list.
    ///
    /// Sync-list callbacks are run one at a time by the next drain, which
    /// removes them as it goes.
    pub fn append_sync<F, Fut>(&self, callback: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        self.sync_list
            .lock()
            .push_back(Box::new(move || callback().boxed()));
    }

    /// Returns the number of pending async-list callbacks.
    #[must_use]
    pub fn async_len(&self) -> usize {
        self.async_list.read().len()
    }

    /// Returns the number of pending sync-list callbacks.
    #[must_use]
    pub fn sync_len(&self) -> usize {
        self.sync_list.lock().len()
    }

    /// Returns true if both lists are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.async_len() == 0 && self.sync_len() == 0
    }

    /// Clears the async list without running its callbacks.
    pub fn clear_async(&self) {
        self.async_list.write().clear();
    }

    /// Clears the sync list without running its callbacks.
    pub fn clear_sync(&self) {
        self.sync_list.lock().clear();
    }
}

impl<T, E> DeferQueue<T, E>
where
    T: Send + 'static,
    E: std::fmt::Display + Send + 'static,
{
    /// Drains the queue: runs every registered callback and returns the
    /// recorded outcomes.
    ///
    /// The async unit snapshots the async list at call time; callbacks
    /// appended to the async list while the drain is in flight are NOT run
    /// by it. The sync unit re-reads its list on every iteration; callbacks
    /// appended to the sync list mid-drain (for example from inside a
    /// running sync callback) ARE run by it. This asymmetry is part of the
    /// contract.
    ///
    /// Returns outcomes in settle order when outcome reporting is enabled,
    /// an empty vec otherwise. Never fails: callback errors are logged and
    /// absorbed into the outcome records.
    pub async fn defer(&self) -> Vec<Outcome<T, E>> {
        let report = self.config.report_outcomes;
        let outcomes = Mutex::new(Vec::new());

        // Snapshot before racing with the sync unit, without holding the
        // lock while user code runs.
        let snapshot: Vec<AsyncCallback<T, E>> =
            self.async_list.read().iter().map(Arc::clone).collect();

        let async_unit = async {
            let invocations = snapshot.into_iter().map(|callback| {
                let outcomes = &outcomes;
                async move {
                    match callback().await {
                        Ok(value) => {
                            if report {
                                outcomes.lock().push(Outcome::Success(value));
                            }
                        }
                        Err(err) => {
                            error!(
                                queue = %self.name,
                                error = %err,
                                "failed to perform async deferred function"
                            );
                            if report {
                                outcomes.lock().push(Outcome::Failed(err));
                            }
                        }
                    }
                }
            });
            join_all(invocations).await;
        };

        let sync_unit = async {
            loop {
                let next = {
                    let mut list = self.sync_list.lock();
                    match self.config.removal_policy {
                        RemovalPolicy::Lifo => list.pop_back(),
                        RemovalPolicy::Fifo => list.pop_front(),
                    }
                };
                let Some(callback) = next else { break };

                match callback().await {
                    Ok(value) => {
                        if report {
                            outcomes.lock().push(Outcome::Success(value));
                        }
                    }
                    Err(err) => {
                        error!(
                            queue = %self.name,
                            error = %err,
                            "Failed to run sync deferred callback"
                        );
                        if report {
                            outcomes.lock().push(Outcome::Failed(err));
                        }
                    }
                }
            }
        };

        futures::join!(async_unit, sync_unit);

        outcomes.into_inner()
    }
}

impl<T: 'static, E: 'static> Default for DeferQueue<T, E> {
    fn default() -> Self {
        Self::new("")
    }
}

impl<T, E> std::fmt::Debug for DeferQueue<T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferQueue")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("async_len", &self.async_list.read().len())
            .field("sync_len", &self.sync_list.lock().len())
            .finish()
    }
}
