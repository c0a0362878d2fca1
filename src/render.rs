use std::time::Instant;

use chrono::{DateTime, Local};

use crate::anim::CountUp;
use crate::estimate::Estimate;
use crate::format::Formatters;
use crate::markup::notes_html;
use crate::ring::RingDash;
use crate::sink::{Sink, Slot, SlotValue};

/// A running count-up bound to its display slot.
#[derive(Debug, Clone, Copy)]
pub struct CounterTask {
    pub slot: Slot,
    pub counter: CountUp,
}

/// Human-readable "updated" label. Unparseable or missing timestamps render
/// the explicit unknown marker rather than an empty string.
pub fn updated_label(updated_at: Option<&str>) -> String {
    match updated_at.and_then(|s| DateTime::parse_from_rfc3339(s).ok()) {
        Some(parsed) => format!(
            "Updated {}",
            parsed.with_timezone(&Local).format("%Y-%m-%d %H:%M")
        ),
        None => "Updated —".to_string(),
    }
}

/// Turns an estimate into slot writes.
///
/// Rendering never fails: a sink may report any slot absent and the write is
/// simply skipped. The three numeric slots come back as counter tasks for the
/// caller's tick loop; everything else is set once.
pub struct Renderer {
    fmt: Formatters,
}

impl Renderer {
    pub fn new(fmt: Formatters) -> Self {
        Renderer { fmt }
    }

    /// Write all static slots and start the count-ups. The returned tasks
    /// share a start instant but animate independently.
    pub fn render(&self, estimate: &Estimate, sink: &mut dyn Sink) -> Vec<CounterTask> {
        let total = estimate.total();
        let fraction = estimate.ai_fraction();
        let start = Instant::now();

        let tasks = vec![
            self.start_counter(Slot::AiLines, estimate.ai_lines, start, sink),
            self.start_counter(Slot::HumanLines, estimate.human_lines, start, sink),
            self.start_counter(Slot::TotalLines, total, start, sink),
        ];

        sink.try_set(Slot::AiPct, SlotValue::Text(self.fmt.percent(fraction)));
        sink.try_set(Slot::RingFg, SlotValue::Ring(RingDash::for_fraction(fraction)));
        sink.try_set(
            Slot::UpdatedAt,
            SlotValue::Text(updated_label(estimate.updated_at.as_deref())),
        );
        sink.try_set(Slot::Notes, SlotValue::Html(notes_html(estimate)));

        tasks
    }

    fn start_counter(
        &self,
        slot: Slot,
        target: u64,
        start: Instant,
        sink: &mut dyn Sink,
    ) -> CounterTask {
        let task = CounterTask {
            slot,
            counter: CountUp::starting_at(start, target, crate::anim::COUNT_UP_DURATION),
        };
        self.write_frame(&task, start, sink);
        task
    }

    fn write_frame(&self, task: &CounterTask, now: Instant, sink: &mut dyn Sink) {
        let value = task.counter.value_at(now);
        sink.try_set(
            task.slot,
            SlotValue::Stat {
                text: self.fmt.count(value),
                title: self.fmt.int(value),
                raw: value,
            },
        );
    }

    /// Advance every counter one frame and drop the finished ones. The
    /// terminal frame writes exactly the target value.
    pub fn tick(&self, tasks: &mut Vec<CounterTask>, now: Instant, sink: &mut dyn Sink) {
        for task in tasks.iter() {
            self.write_frame(task, now, sink);
        }
        tasks.retain(|task| !task.counter.is_done(now));
    }

    /// Drive all counters straight to their terminal frame (one-shot modes).
    pub fn finish(&self, tasks: &mut Vec<CounterTask>, sink: &mut dyn Sink) {
        for task in tasks.drain(..) {
            let target = task.counter.target();
            sink.try_set(
                task.slot,
                SlotValue::Stat {
                    text: self.fmt.count(target),
                    title: self.fmt.int(target),
                    raw: target,
                },
            );
        }
    }
}
