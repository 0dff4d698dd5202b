use sumz_core::{AppViewModel, SummaryPanel};

const COPY_ICON: &str = "[copy]";
const TICK_ICON: &str = "[ok]  ";

/// Renders the view as terminal lines: input, history, then the summary area.
pub(crate) fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.articles.len() + 8);
    lines.push(String::new());
    lines.push(format!("URL: {}", view.input));

    if !view.articles.is_empty() {
        lines.push("History:".to_string());
        for row in &view.articles {
            let icon = if row.copied { TICK_ICON } else { COPY_ICON };
            lines.push(format!("  {:>3}. {} {}", row.index + 1, icon, row.url));
        }
    }

    match &view.panel {
        SummaryPanel::Hidden => {}
        SummaryPanel::Loading => lines.push("Summarizing...".to_string()),
        SummaryPanel::Error { message } => {
            lines.push("Well, that wasn't supposed to happen...".to_string());
            lines.push(format!("  {message}"));
        }
        SummaryPanel::Summary(summary) => {
            lines.push("Article Summary".to_string());
            lines.extend(summary.lines().map(|line| format!("  {line}")));
        }
    }
    lines
}
