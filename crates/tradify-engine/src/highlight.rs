use regex::RegexBuilder;
use tradify_types::Segment;

/// Split `text` around every case-insensitive occurrence of `query`.
///
/// The query is trimmed and escaped before it is compiled, so characters
/// such as `+` or `(` match themselves. A segment is emphasized only when it
/// equals the query ignoring case. Empty segments are not emitted.
pub fn highlight(text: &str, query: &str) -> Vec<Segment> {
    let needle = query.trim();
    if needle.is_empty() {
        return vec![Segment::plain(text)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    else {
        return vec![Segment::plain(text)];
    };

    let needle_lower = needle.to_lowercase();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in pattern.find_iter(text) {
        if found.start() > cursor {
            segments.push(Segment::plain(&text[cursor..found.start()]));
        }
        let part = found.as_str();
        segments.push(Segment {
            text: part.to_string(),
            emphasized: part.to_lowercase() == needle_lower,
        });
        cursor = found.end();
    }

    if cursor < text.len() {
        segments.push(Segment::plain(&text[cursor..]));
    }

    if segments.is_empty() {
        segments.push(Segment::plain(text));
    }

    segments
}
