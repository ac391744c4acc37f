use crate::events::DataEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Simulates persisting the profile: waits, then reports completion.
#[derive(Clone)]
pub struct ProfileSaver {
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
    pub delay: Duration,
}

impl ProfileSaver {
    pub fn new(data_tx: mpsc::UnboundedSender<DataEvent>, delay: Duration) -> Self {
        Self { data_tx, delay }
    }

    pub async fn save(&self, generation: u64, name: String, email: String) {
        tracing::info!("Saving profile ({} ms)", self.delay.as_millis());
        tokio::time::sleep(self.delay).await;

        // The receiver only goes away during shutdown
        if self
            .data_tx
            .send(DataEvent::ProfileSaved {
                generation,
                name,
                email,
            })
            .is_err()
        {
            tracing::debug!("Profile saved after the event loop exited");
        }
    }
}
