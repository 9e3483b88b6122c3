use countdown_core::CountdownResult;
use countdown_domain::CountdownEntry;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Everything the event loop reacts to, funnelled through one channel.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Loaded(CountdownResult<Vec<CountdownEntry>>),
    SaveFailed(String),
}

pub struct EventHandler {
    tx: mpsc::UnboundedSender<Event>,
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: Option<mpsc::UnboundedSender<()>>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            tx,
            rx,
            shutdown_tx: None,
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.tx.clone()
    }

    /// Start forwarding terminal key presses into the channel.
    pub fn start_input(&mut self) {
        let tx = self.tx.clone();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        if !event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            continue;
                        }
                        if let Ok(CrosstermEvent::Key(key)) = event::read() {
                            if key.kind != KeyEventKind::Press {
                                continue;
                            }
                            if tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                    }
                }
            }
        });

        self.shutdown_tx = Some(shutdown_tx);
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        if let Some(shutdown_tx) = &self.shutdown_tx {
            let _ = shutdown_tx.send(());
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// The one-second cadence that refreshes countdown labels.
///
/// At most one ticker task is alive: `restart` aborts the previous task
/// before spawning its replacement.
pub struct Ticker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
    restarts: u64,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
            restarts: 0,
        }
    }

    pub fn restart(&mut self, tx: mpsc::UnboundedSender<Event>) {
        self.stop();

        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                if tx.send(Event::Tick).is_err() {
                    break;
                }
            }
        }));
        self.restarts += 1;
        tracing::debug!("Ticker restarted ({} so far)", self.restarts);
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn restarts(&self) -> u64 {
        self.restarts
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
