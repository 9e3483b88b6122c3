use crate::events::Event;
use countdown_core::{CountdownError, CountdownResult};
use countdown_domain::commands::{Command, CommandContext};
use countdown_domain::{CountdownEntry, PageState};
use countdown_persistence::RemoteStore;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

pub use countdown_domain::commands;

pub type SaveReceiver = mpsc::UnboundedReceiver<Vec<CountdownEntry>>;

/// Applies list commands and queues the resulting list for saving.
///
/// # Save Behavior
///
/// Every successful mutation queues a full copy of the list. The save
/// worker sends each copy on its own task, so saves are best-effort,
/// unordered and never confirmed back to the list. Only failures come back,
/// as [`Event::SaveFailed`].
pub struct StateManager {
    save_tx: Option<mpsc::UnboundedSender<Vec<CountdownEntry>>>,
    saves_queued: usize,
}

impl StateManager {
    pub fn new() -> (Self, SaveReceiver) {
        let (save_tx, save_rx) = mpsc::unbounded_channel();
        (
            Self {
                save_tx: Some(save_tx),
                saves_queued: 0,
            },
            save_rx,
        )
    }

    /// Run a command against the list. Only a ready page accepts commands.
    pub fn execute(&mut self, state: &mut PageState, command: Box<dyn Command>) -> CountdownResult<()> {
        let description = command.description();
        let entries = state.entries_mut().ok_or_else(|| {
            CountdownError::Validation("The countdown list has not loaded".to_string())
        })?;

        tracing::debug!("Executing: {}", description);
        let mut context = CommandContext { entries };
        command.execute(&mut context)
    }

    pub fn queue_save(&mut self, state: &PageState) {
        let Some(entries) = state.entries() else {
            tracing::debug!("Page not ready - skipping save");
            return;
        };

        let Some(save_tx) = &self.save_tx else {
            tracing::warn!("Saves already closed - dropping save");
            return;
        };

        match save_tx.send(entries.to_vec()) {
            Ok(()) => {
                self.saves_queued += 1;
                tracing::debug!("Queued save of {} countdowns", entries.len());
            }
            Err(e) => {
                tracing::error!("Failed to queue save: channel closed: {:?}", e);
            }
        }
    }

    pub fn saves_queued(&self) -> usize {
        self.saves_queued
    }

    /// Stop accepting saves so the worker can finish what is in flight.
    pub fn close(&mut self) {
        self.save_tx = None;
    }
}

/// Fetch the list once and report the outcome as [`Event::Loaded`].
pub fn spawn_load(
    store: Arc<dyn RemoteStore>,
    events_tx: mpsc::UnboundedSender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!("Loading countdowns...");
        let result = store.fetch_all().await;
        if let Err(e) = &result {
            tracing::error!("Error fetching countdowns: {}", e);
        }
        let _ = events_tx.send(Event::Loaded(result));
    })
}

/// Drain queued lists, sending each on an independent task.
///
/// Runs until the [`StateManager`] is closed or dropped, then waits for
/// the saves still in flight.
pub fn spawn_save_worker(
    store: Arc<dyn RemoteStore>,
    mut save_rx: SaveReceiver,
    events_tx: mpsc::UnboundedSender<Event>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut in_flight = JoinSet::new();

        while let Some(entries) = save_rx.recv().await {
            let store = Arc::clone(&store);
            let events_tx = events_tx.clone();

            in_flight.spawn(async move {
                tracing::info!("Saving {} countdowns...", entries.len());
                match store.replace_all(&entries).await {
                    Ok(()) => tracing::info!("Save sent"),
                    Err(e) => {
                        tracing::error!("Error saving countdowns: {}", e);
                        let _ = events_tx.send(Event::SaveFailed(e.user_message()));
                    }
                }
            });
            while in_flight.try_join_next().is_some() {}
        }

        while in_flight.join_next().await.is_some() {}
        tracing::debug!("Save worker stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use countdown_domain::commands::{AddCountdown, DeleteCountdown};

    fn ready() -> PageState {
        PageState::Ready(vec![
            CountdownEntry::new("Launch", "2099-01-01"),
            CountdownEntry::new("Trip", "2099-06-30"),
        ])
    }

    #[test]
    fn test_execute_mutates_ready_list() {
        let (mut manager, _save_rx) = StateManager::new();
        let mut state = ready();

        manager
            .execute(&mut state, Box::new(DeleteCountdown { index: 0 }))
            .unwrap();

        assert_eq!(
            state.entries().unwrap(),
            &[CountdownEntry::new("Trip", "2099-06-30")]
        );
    }

    #[test]
    fn test_execute_refuses_unready_page() {
        let (mut manager, _save_rx) = StateManager::new();

        for mut state in [PageState::Loading, PageState::Error("HTTP 500".to_string())] {
            let err = manager
                .execute(&mut state, Box::new(AddCountdown::new("Launch", "2099-01-01")))
                .unwrap_err();
            assert!(matches!(err, CountdownError::Validation(_)));
        }
    }

    #[test]
    fn test_queue_save_sends_full_list() {
        let (mut manager, mut save_rx) = StateManager::new();
        let state = ready();

        manager.queue_save(&state);

        assert_eq!(save_rx.try_recv().unwrap(), state.entries().unwrap().to_vec());
        assert!(save_rx.try_recv().is_err());
        assert_eq!(manager.saves_queued(), 1);
    }

    #[test]
    fn test_close_stops_queueing() {
        let (mut manager, mut save_rx) = StateManager::new();
        manager.close();
        manager.queue_save(&ready());

        assert!(save_rx.try_recv().is_err());
        assert_eq!(manager.saves_queued(), 0);
    }

    #[test]
    fn test_queue_save_skips_unready_page() {
        let (mut manager, mut save_rx) = StateManager::new();
        manager.queue_save(&PageState::Loading);

        assert!(save_rx.try_recv().is_err());
        assert_eq!(manager.saves_queued(), 0);
    }
}
