use crate::estimate::Estimate;

/// Escape text for insertion into HTML markup.
///
/// Ampersand is replaced first so entities introduced by the later
/// replacements are not escaped twice.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// One labelled line of the notes block.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteLine {
    pub label: &'static str,
    pub text: String,
}

/// The notes block as labelled plain-text lines (TUI rendering).
pub fn notes_lines(estimate: &Estimate) -> Vec<NoteLine> {
    let mut lines = Vec::new();
    if let Some(scope) = &estimate.scope {
        lines.push(NoteLine {
            label: "Scope",
            text: scope.clone(),
        });
    }
    if let Some(notes) = &estimate.notes {
        lines.push(NoteLine {
            label: "Notes",
            text: notes.clone(),
        });
    }
    lines
}

/// The notes block as HTML: bold labels, escaped values, `<br />` between
/// lines. Empty when neither scope nor notes is present.
pub fn notes_html(estimate: &Estimate) -> String {
    notes_lines(estimate)
        .iter()
        .map(|line| format!("<strong>{}:</strong> {}", line.label, escape_html(&line.text)))
        .collect::<Vec<_>>()
        .join("<br />")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_with(scope: Option<&str>, notes: Option<&str>) -> Estimate {
        Estimate {
            updated_at: None,
            scope: scope.map(str::to_string),
            ai_lines: 0,
            human_lines: 0,
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_escape_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<b>x</b> & "y""#),
            "&lt;b&gt;x&lt;/b&gt; &amp; &quot;y&quot;"
        );
        assert_eq!(escape_html("it's"), "it&#039;s");
    }

    #[test]
    fn test_escape_ampersand_first() {
        // A pre-existing entity must not survive as one
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_notes_html_both_lines() {
        let estimate = estimate_with(Some("whole repo"), Some("rough guess"));
        assert_eq!(
            notes_html(&estimate),
            "<strong>Scope:</strong> whole repo<br /><strong>Notes:</strong> rough guess"
        );
    }

    #[test]
    fn test_notes_html_single_line() {
        let estimate = estimate_with(Some("whole repo"), None);
        assert_eq!(notes_html(&estimate), "<strong>Scope:</strong> whole repo");
        let estimate = estimate_with(None, Some("rough guess"));
        assert_eq!(notes_html(&estimate), "<strong>Notes:</strong> rough guess");
    }

    #[test]
    fn test_notes_html_empty() {
        assert_eq!(notes_html(&estimate_with(None, None)), "");
    }

    #[test]
    fn test_notes_html_escapes_values() {
        let estimate = estimate_with(Some("<script>alert(1)</script>"), None);
        let html = notes_html(&estimate);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
