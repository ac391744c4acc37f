pub mod profile_saver;

use std::collections::HashMap;
use std::future::Future;
use tokio::task::JoinHandle;

/// Task id of the simulated profile save
pub const PROFILE_SAVE_TASK: &str = "save_profile";

/// Owns the join handles of spawned tasks, keyed by task id, so they can be
/// aborted on logout and shutdown.
pub struct BackgroundTaskManager {
    tasks: HashMap<String, JoinHandle<()>>,
}

impl BackgroundTaskManager {
    pub fn new() -> Self {
        Self {
            tasks: HashMap::new(),
        }
    }

    /// Spawn `future` under `task_id`, aborting any task already holding that id
    pub fn spawn_task<F>(&mut self, task_id: &str, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel(task_id);

        let handle = tokio::spawn(future);
        self.tasks.insert(task_id.to_string(), handle);
    }

    /// Abort a task if it is still tracked. Returns whether one was found.
    pub fn cancel(&mut self, task_id: &str) -> bool {
        match self.tasks.remove(task_id) {
            Some(handle) => {
                if !handle.is_finished() {
                    tracing::debug!("Cancelling background task {}", task_id);
                }
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self, task_id: &str) -> bool {
        self.tasks
            .get(task_id)
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn cancel_all(&mut self) {
        self.tasks.drain().for_each(|(_, handle)| handle.abort());
    }
}

impl Default for BackgroundTaskManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for BackgroundTaskManager {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_respawn_replaces_task() {
        let mut manager = BackgroundTaskManager::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        let first = tx.clone();
        manager.spawn_task("job", async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = first.send(1);
        });
        manager.spawn_task("job", async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = tx.send(2);
        });

        assert_eq!(rx.recv().await, Some(2));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_task() {
        let mut manager = BackgroundTaskManager::new();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<()>();

        manager.spawn_task("job", async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let _ = tx.send(());
        });
        assert!(manager.is_running("job"));
        assert!(manager.cancel("job"));
        assert!(!manager.cancel("job"));

        assert_eq!(rx.recv().await, None);
    }
}
