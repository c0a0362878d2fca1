use ratatui::{
    widgets::{Block, Borders, Paragraph, Gauge},
    layout::{Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    text::{Line, Span, Text},
    Frame
};
use crate::markup::notes_lines;
use crate::sink::{Slot, SlotValue};
use crate::types::App;

/// Render the estimate dashboard
pub fn render(f: &mut Frame, app: &App) {
    // Main layout: Title (with navigation) + stat tiles + share gauge + details
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Title (header with navigation)
            Constraint::Length(5),  // Count tiles
            Constraint::Length(3),  // AI share gauge
            Constraint::Min(5),     // Updated label + notes
        ])
        .split(f.size());

    render_title(f, app, main_chunks[0]);
    render_count_tiles(f, app, main_chunks[1]);
    render_share_gauge(f, app, main_chunks[2]);
    render_details(f, app, main_chunks[3]);
}

/// Render the title header with navigation inside
fn render_title(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let block = Block::default().title("Line Estimate Dashboard").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let nav_text = if app.animating() {
        "q: quit | counting..."
    } else {
        "q: quit | r: replay count-up"
    };
    let nav_paragraph = Paragraph::new(nav_text);
    f.render_widget(nav_paragraph, inner);
}

/// Render the three animated count tiles
fn render_count_tiles(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let tile_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_count_tile(f, app, "AI-written", Slot::AiLines, Color::Cyan, tile_chunks[0]);
    render_count_tile(f, app, "Human-written", Slot::HumanLines, Color::Magenta, tile_chunks[1]);
    render_count_tile(f, app, "Total", Slot::TotalLines, Color::White, tile_chunks[2]);
}

fn render_count_tile(
    f: &mut Frame,
    app: &App,
    label: &str,
    slot: Slot,
    color: Color,
    area: ratatui::layout::Rect,
) {
    let (value, exact) = match app.slots.get(slot) {
        Some(SlotValue::Stat { text, title, .. }) => (text.clone(), title.clone()),
        _ => ("—".to_string(), String::new()),
    };

    let mut lines = vec![Line::from(Span::styled(
        value,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    // The exact count plays the role of the web widget's tooltip
    if !exact.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("exact: {}", exact),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let tile = Paragraph::new(Text::from(lines))
        .block(Block::default().title(format!("{} lines", label)).borders(Borders::ALL));
    f.render_widget(tile, area);
}

/// Render the AI share gauge (the terminal's progress ring)
fn render_share_gauge(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let fraction = app
        .slots
        .ring(Slot::RingFg)
        .map(|ring| ring.fraction())
        .unwrap_or(0.0);
    let pct_text = app.slots.text(Slot::AiPct).unwrap_or("0.0%").to_string();

    let gauge_color = if fraction >= 0.8 {
        Color::Red
    } else if fraction >= 0.5 {
        Color::Yellow
    } else {
        Color::Green
    };

    let share_gauge = Gauge::default()
        .block(Block::default().title("AI Share").borders(Borders::ALL))
        .gauge_style(Style::default().fg(gauge_color).bg(Color::Black))
        .ratio(fraction)
        .label(format!("{} AI-written", pct_text));
    f.render_widget(share_gauge, area);
}

/// Render the updated label and the scope/notes block
fn render_details(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let mut info_lines = vec![Line::from(Span::styled(
        app.slots.text(Slot::UpdatedAt).unwrap_or("Updated —").to_string(),
        Style::default().fg(Color::Gray),
    ))];

    for note in notes_lines(&app.estimate) {
        info_lines.push(Line::from(vec![
            Span::styled(
                format!("{}: ", note.label),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(note.text),
        ]));
    }

    let details = Paragraph::new(Text::from(info_lines))
        .wrap(ratatui::widgets::Wrap { trim: true })
        .block(Block::default().title("Estimate Details").borders(Borders::ALL));
    f.render_widget(details, area);
}
