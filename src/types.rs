use crate::estimate::Estimate;
use crate::render::CounterTask;
use crate::sink::SnapshotSink;

/// TUI application state.
///
/// `slots` is the dashboard's rendering surface; the renderer writes into it
/// and the draw code reads the latest values back out. `counters` holds the
/// count-ups still in flight.
pub struct App {
    pub estimate: Estimate,
    pub slots: SnapshotSink,
    pub counters: Vec<CounterTask>,
}

impl App {
    pub fn new(estimate: Estimate) -> Self {
        App {
            estimate,
            slots: SnapshotSink::new(),
            counters: Vec::new(),
        }
    }

    /// Whether the count-up animation is still running.
    pub fn animating(&self) -> bool {
        !self.counters.is_empty()
    }
}
