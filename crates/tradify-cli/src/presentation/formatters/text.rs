use is_terminal::IsTerminal;
use once_cell::sync::Lazy;
use owo_colors::OwoColorize;
use tradify_types::Segment;

static DETECTED: Lazy<TextStyle> = Lazy::new(|| TextStyle {
    color: std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none(),
});

/// Whether plain output may use ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub color: bool,
}

impl TextStyle {
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Colors when stdout is a terminal and `NO_COLOR` is unset
    pub fn detect() -> Self {
        *DETECTED
    }

    /// Join highlight segments, emphasizing matches when colors are on
    pub fn segments(&self, segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| {
                if s.emphasized && self.color {
                    s.text.blue().bold().to_string()
                } else {
                    s.text.clone()
                }
            })
            .collect()
    }

    pub fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn accent(&self, text: &str) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Truncate to `max_chars` characters, respecting UTF-8 boundaries
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_segments_join_verbatim() {
        let segments = vec![Segment::plain("Wireless "), Segment::emphasized("Mouse")];
        assert_eq!(TextStyle::plain().segments(&segments), "Wireless Mouse");
    }

    #[test]
    fn test_colored_segments_wrap_matches() {
        let segments = vec![Segment::plain("Wireless "), Segment::emphasized("Mouse")];
        let out = TextStyle { color: true }.segments(&segments);
        assert!(out.starts_with("Wireless "));
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("Mouse"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("Stainless Steel Water Bottle", 12), "Stainless...");
    }
}
