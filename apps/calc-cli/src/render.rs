//! Terminal rendering of the calculator screen.

use calc_client::Screen;

/// Width of the display box, excluding borders.
const DISPLAY_WIDTH: usize = 24;

/// Renders the display box followed by the history list.
///
/// ```text
/// ┌────────────────────────┐
/// │                     12 │
/// └────────────────────────┘
///   7 + 5 = 12
///   3 + 4 = 7
/// ```
pub fn render(screen: &Screen) -> String {
    let mut out = String::new();
    let border = "─".repeat(DISPLAY_WIDTH + 2);

    let mut display = screen.display.clone();
    if screen.error {
        display = format!("! {display}");
    } else if screen.loading {
        display = format!("… {display}");
    }

    out.push_str(&format!("┌{border}┐\n"));
    out.push_str(&format!("│ {display:>width$} │\n", width = DISPLAY_WIDTH));
    out.push_str(&format!("└{border}┘\n"));

    for line in &screen.history {
        out.push_str(&format!("  {line}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(display: &str, error: bool, history: &[&str]) -> Screen {
        Screen {
            display: display.to_string(),
            error,
            loading: false,
            history: history.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_value_right_aligned() {
        let out = render(&screen("12", false, &[]));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].ends_with(" 12 │"));
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_error_marked() {
        let out = render(&screen("Cannot divide by zero.", true, &[]));
        assert!(out.contains("! Cannot divide by zero."));
    }

    #[test]
    fn test_history_newest_first() {
        let out = render(&screen("12", false, &["7 + 5 = 12", "3 + 4 = 7"]));
        let lines: Vec<&str> = out.lines().skip(3).collect();
        assert_eq!(lines, vec!["  7 + 5 = 12", "  3 + 4 = 7"]);
    }
}
