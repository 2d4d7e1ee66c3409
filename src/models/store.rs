// file: src/models/store.rs
use log::info;

use super::event::EventRecord;

/// Owned, append-only list of events.
///
/// `version` changes on every append so derived per-day views can be keyed
/// on `(version, day)`.
#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<EventRecord>,
    version: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn push(&mut self, event: EventRecord) {
        self.events.push(event);
        self.version += 1;
    }

    /// Append a whole imported batch. An empty batch leaves the version alone.
    pub fn extend(&mut self, events: Vec<EventRecord>) {
        if events.is_empty() {
            return;
        }
        info!("Appending {} imported events", events.len());
        self.events.extend(events);
        self.version += 1;
    }
}
