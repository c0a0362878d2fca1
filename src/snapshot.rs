use crate::estimate::Estimate;
use crate::format::Formatters;
use crate::markup::escape_html;
use crate::render::Renderer;
use crate::ring::RING_RADIUS;
use crate::sink::{Slot, SlotValue, SnapshotSink};

/// Render a standalone HTML snapshot of the widget: the same slots the live
/// page has, with the counters at their final values.
pub fn render_html(estimate: &Estimate, fmt: Formatters) -> String {
    let renderer = Renderer::new(fmt);
    let mut sink = SnapshotSink::new();
    let mut counters = renderer.render(estimate, &mut sink);
    renderer.finish(&mut counters, &mut sink);
    build_page(&sink)
}

fn build_page(sink: &SnapshotSink) -> String {
    let ring = sink
        .ring(Slot::RingFg)
        .unwrap_or_else(|| crate::ring::RingDash::for_fraction(0.0));
    let pct = text_of(sink, Slot::AiPct);
    let updated = text_of(sink, Slot::UpdatedAt);
    let notes = match sink.get(Slot::Notes) {
        Some(SlotValue::Html(html)) => html.clone(),
        _ => String::new(),
    };

    format!(
        r##"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8" />
<title>Line Estimate</title>
</head>
<body>
<main class="estimate">
  <section class="stats">
    <div class="stat"><span class="label">AI-written lines</span> {ai}</div>
    <div class="stat"><span class="label">Human-written lines</span> {human}</div>
    <div class="stat"><span class="label">Total lines</span> {total}</div>
  </section>
  <section class="share">
    <svg width="120" height="120" viewBox="0 0 120 120" role="img">
      <circle id="ringBg" cx="60" cy="60" r="{radius}" fill="none" stroke="#ddd" stroke-width="10" />
      <circle id="ringFg" cx="60" cy="60" r="{radius}" fill="none" stroke="#46a" stroke-width="10"
              transform="rotate(-90 60 60)"
              style="stroke-dasharray: {circ:.3}; stroke-dashoffset: {offset:.3}" />
    </svg>
    <span id="aiPct">{pct}</span>
  </section>
  <div id="updatedAt">{updated}</div>
  <div id="notes">{notes}</div>
</main>
</body>
</html>
"##,
        ai = stat_span(sink, Slot::AiLines),
        human = stat_span(sink, Slot::HumanLines),
        total = stat_span(sink, Slot::TotalLines),
        radius = RING_RADIUS,
        circ = ring.circumference,
        offset = ring.offset(),
        pct = escape_html(&pct),
        updated = escape_html(&updated),
        notes = notes,
    )
}

fn text_of(sink: &SnapshotSink, slot: Slot) -> String {
    match sink.get(slot) {
        Some(SlotValue::Text(text)) => text.clone(),
        _ => String::new(),
    }
}

fn stat_span(sink: &SnapshotSink, slot: Slot) -> String {
    match sink.get(slot) {
        Some(SlotValue::Stat { text, title, raw }) => format!(
            r#"<span id="{id}" title="{title}" data-raw="{raw}">{text}</span>"#,
            id = slot.id(),
            title = escape_html(title),
            raw = raw,
            text = escape_html(text),
        ),
        _ => format!(r#"<span id="{id}"></span>"#, id = slot.id()),
    }
}
