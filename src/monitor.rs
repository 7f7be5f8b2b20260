//! Cycle scheduler: connection state machine and fixed-interval loop.

use log::{error, info};
use std::thread;
use std::time::Duration;

use crate::domain::pipeline;
use crate::ports::connector_port::ConnectorPort;
use crate::ports::presentation_port::PresentationPort;
use crate::ports::snapshot_port::SnapshotStore;

/// Refresh period of the desktop monitor.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(2000);

/// Drives the pipeline once per tick while connected and not paused.
///
/// Single-threaded by construction: a tick runs the whole cycle to
/// completion before control returns, so cycles never overlap and no other
/// component touches the store concurrently.
pub struct Monitor {
    connector: Box<dyn ConnectorPort>,
    store: Box<dyn SnapshotStore>,
    sink: Box<dyn PresentationPort>,
    account: u32,
    connected: bool,
    paused: bool,
}

impl Monitor {
    pub fn new(
        connector: Box<dyn ConnectorPort>,
        store: Box<dyn SnapshotStore>,
        sink: Box<dyn PresentationPort>,
        account: u32,
    ) -> Self {
        Self {
            connector,
            store,
            sink,
            account,
            connected: false,
            paused: false,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Acquire the connector and run an immediate first cycle, the way the
    /// desktop monitor refreshes right after connecting.
    pub fn connect(&mut self) {
        match self.connector.connect() {
            Ok(()) => {
                self.connected = true;
                self.sink.connection_changed(true);
                info!("connected, account {}", self.account);
                self.tick();
            }
            Err(e) => {
                self.connected = false;
                self.sink.connection_changed(false);
                error!("connection failed: {e}");
            }
        }
    }

    /// Unconditional, user-triggered.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.sink.connection_changed(false);
        info!("disconnected");
    }

    /// Pause and resume gate ticks; they take effect at the next tick
    /// boundary, never mid-cycle.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// One scheduler tick. No-op while disconnected or paused. A failing
    /// fetch logs, drops the connection, and signals the sink; there is no
    /// blind retry.
    pub fn tick(&mut self) {
        if !self.connected || self.paused {
            return;
        }
        match self.connector.fetch(self.account) {
            Ok(raw) => {
                let table = pipeline::run_cycle(raw, self.store.as_ref());
                self.sink.render(&table);
            }
            Err(e) => {
                error!("cycle failed: {e}");
                self.connected = false;
                self.sink.connection_changed(false);
            }
        }
    }

    /// Connect, then tick at a fixed interval until the requested number of
    /// cycles has run or the connection drops. In-flight cycles always
    /// complete.
    pub fn run(&mut self, interval: Duration, cycles: Option<u64>) {
        self.connect();
        let mut completed: u64 = 1; // connect ran the first cycle
        while self.connected {
            if let Some(limit) = cycles
                && completed >= limit
            {
                break;
            }
            thread::sleep(interval);
            self.tick();
            completed += 1;
        }
    }
}
