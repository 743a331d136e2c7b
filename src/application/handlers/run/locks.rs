//! Per-run serialization of load-modify-save cycles.

use std::collections::HashMap;
use std::sync::{Arc, Weak};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::foundation::RunId;

/// One async mutex per run id.
///
/// Holding the guard for a run excludes every other handler working on the
/// same run. Different runs never contend.
///
/// The table keeps only weak references: an entry lives as long as some
/// guard or waiter holds its mutex, and dead entries are pruned on the next
/// acquire. Requests for unknown or deleted runs therefore leave nothing
/// behind.
#[derive(Debug, Clone, Default)]
pub struct RunLocks {
    inner: Arc<Mutex<HashMap<RunId, Weak<Mutex<()>>>>>,
}

impl RunLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `id`.
    pub async fn acquire(&self, id: RunId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.inner.lock().await;
            locks.retain(|_, weak| weak.strong_count() > 0);
            match locks.get(&id).and_then(Weak::upgrade) {
                Some(lock) => lock,
                None => {
                    let lock = Arc::new(Mutex::new(()));
                    locks.insert(id, Arc::downgrade(&lock));
                    lock
                }
            }
        };
        lock.lock_owned().await
    }

    /// Number of runs whose lock is currently held or awaited.
    pub async fn tracked(&self) -> usize {
        self.inner
            .lock()
            .await
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_run_is_exclusive() {
        let locks = RunLocks::new();
        let id = RunId::new();

        let guard = locks.acquire(id).await;
        let contender = tokio::time::timeout(Duration::from_millis(50), locks.acquire(id)).await;
        assert!(contender.is_err());

        drop(guard);
        let reacquired = tokio::time::timeout(Duration::from_millis(50), locks.acquire(id)).await;
        assert!(reacquired.is_ok());
    }

    #[tokio::test]
    async fn waiter_shares_the_held_lock() {
        let locks = RunLocks::new();
        let id = RunId::new();

        let guard = locks.acquire(id).await;
        let waiter = {
            let locks = locks.clone();
            tokio::spawn(async move {
                let _guard = locks.acquire(id).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!waiter.is_finished());
        assert_eq!(locks.tracked().await, 1);

        drop(guard);
        waiter.await.unwrap();
        assert_eq!(locks.tracked().await, 0);
    }

    #[tokio::test]
    async fn different_runs_do_not_contend() {
        let locks = RunLocks::new();
        let _first = locks.acquire(RunId::new()).await;
        let second = tokio::time::timeout(Duration::from_millis(50), locks.acquire(RunId::new())).await;
        assert!(second.is_ok());
        assert_eq!(locks.tracked().await, 2);
    }

    #[tokio::test]
    async fn released_locks_are_pruned() {
        let locks = RunLocks::new();
        for _ in 0..100 {
            drop(locks.acquire(RunId::new()).await);
        }

        assert_eq!(locks.tracked().await, 0);

        let _held = locks.acquire(RunId::new()).await;
        assert_eq!(locks.inner.lock().await.len(), 1);
    }
}
