use std::collections::{HashMap, HashSet};

use crate::ring::RingDash;

/// Display slots, named after the element ids in the widget markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    AiLines,
    HumanLines,
    TotalLines,
    AiPct,
    RingFg,
    UpdatedAt,
    Notes,
}

impl Slot {
    pub const ALL: [Slot; 7] = [
        Slot::AiLines,
        Slot::HumanLines,
        Slot::TotalLines,
        Slot::AiPct,
        Slot::RingFg,
        Slot::UpdatedAt,
        Slot::Notes,
    ];

    /// Element id on the rendering surface.
    pub fn id(&self) -> &'static str {
        match self {
            Slot::AiLines => "aiLines",
            Slot::HumanLines => "humanLines",
            Slot::TotalLines => "totalLines",
            Slot::AiPct => "aiPct",
            Slot::RingFg => "ringFg",
            Slot::UpdatedAt => "updatedAt",
            Slot::Notes => "notes",
        }
    }
}

/// Value written into a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum SlotValue {
    /// Plain text content.
    Text(String),
    /// Animated numeric display: abbreviated text plus the full-precision
    /// tooltip text and the raw value for the data attribute.
    Stat {
        text: String,
        title: String,
        raw: u64,
    },
    /// Stroke-dash geometry for the progress ring.
    Ring(RingDash),
    /// Pre-escaped HTML content.
    Html(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Ok,
    Absent,
}

/// A rendering surface with optional slot presence.
///
/// Writing to a slot the surface does not have reports `Absent`; the renderer
/// treats that as a no-op so pages missing elements still work.
pub trait Sink {
    fn try_set(&mut self, slot: Slot, value: SlotValue) -> SetOutcome;
}

/// Sink that stores the latest value per slot. Front-ends read the finished
/// state out of it; tests construct it with a subset of slots present.
#[derive(Debug, Clone)]
pub struct SnapshotSink {
    present: HashSet<Slot>,
    values: HashMap<Slot, SlotValue>,
}

impl SnapshotSink {
    /// A sink with every slot present.
    pub fn new() -> Self {
        Self::with_slots(Slot::ALL)
    }

    /// A sink where only the given slots exist.
    pub fn with_slots(slots: impl IntoIterator<Item = Slot>) -> Self {
        SnapshotSink {
            present: slots.into_iter().collect(),
            values: HashMap::new(),
        }
    }

    pub fn get(&self, slot: Slot) -> Option<&SlotValue> {
        self.values.get(&slot)
    }

    /// Text content of a slot, if it holds any.
    pub fn text(&self, slot: Slot) -> Option<&str> {
        match self.values.get(&slot) {
            Some(SlotValue::Text(text)) => Some(text),
            Some(SlotValue::Stat { text, .. }) => Some(text),
            Some(SlotValue::Html(html)) => Some(html),
            _ => None,
        }
    }

    pub fn ring(&self, slot: Slot) -> Option<RingDash> {
        match self.values.get(&slot) {
            Some(SlotValue::Ring(ring)) => Some(*ring),
            _ => None,
        }
    }
}

impl Default for SnapshotSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for SnapshotSink {
    fn try_set(&mut self, slot: Slot, value: SlotValue) -> SetOutcome {
        if !self.present.contains(&slot) {
            return SetOutcome::Absent;
        }
        self.values.insert(slot, value);
        SetOutcome::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_slot_is_not_stored() {
        let mut sink = SnapshotSink::with_slots([Slot::AiPct]);
        let outcome = sink.try_set(Slot::Notes, SlotValue::Text("x".to_string()));
        assert_eq!(outcome, SetOutcome::Absent);
        assert!(sink.get(Slot::Notes).is_none());

        let outcome = sink.try_set(Slot::AiPct, SlotValue::Text("25.0%".to_string()));
        assert_eq!(outcome, SetOutcome::Ok);
        assert_eq!(sink.text(Slot::AiPct), Some("25.0%"));
    }

    #[test]
    fn test_latest_write_wins() {
        let mut sink = SnapshotSink::new();
        sink.try_set(
            Slot::AiLines,
            SlotValue::Stat {
                text: "0".to_string(),
                title: "0".to_string(),
                raw: 0,
            },
        );
        sink.try_set(
            Slot::AiLines,
            SlotValue::Stat {
                text: "1.5K".to_string(),
                title: "1,500".to_string(),
                raw: 1500,
            },
        );
        assert_eq!(sink.text(Slot::AiLines), Some("1.5K"));
    }
}
