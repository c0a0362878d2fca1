use crossterm::event::KeyCode;

use crate::render::Renderer;
use crate::types::App;

/// Handle a key press. Returns true when the app should exit.
pub fn handle_key_event(app: &mut App, renderer: &Renderer, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => true, // Signal to quit
        KeyCode::Char('r') => {
            // Replay the count-up from zero; no refetch involved
            let estimate = app.estimate.clone();
            app.counters = renderer.render(&estimate, &mut app.slots);
            false
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::Estimate;
    use crate::format::Formatters;

    fn app() -> App {
        let estimate: Estimate =
            serde_json::from_str(r#"{"ai_lines": 100, "human_lines": 300}"#).unwrap();
        App::new(estimate)
    }

    #[test]
    fn test_quit_keys() {
        let renderer = Renderer::new(Formatters::default());
        let mut app = app();
        assert!(handle_key_event(&mut app, &renderer, KeyCode::Char('q')));
        assert!(handle_key_event(&mut app, &renderer, KeyCode::Esc));
        assert!(!handle_key_event(&mut app, &renderer, KeyCode::Char('x')));
    }

    #[test]
    fn test_replay_restarts_counters() {
        let renderer = Renderer::new(Formatters::default());
        let mut app = app();
        assert!(!app.animating());
        assert!(!handle_key_event(&mut app, &renderer, KeyCode::Char('r')));
        assert!(app.animating());
        assert_eq!(app.counters.len(), 3);
    }
}
