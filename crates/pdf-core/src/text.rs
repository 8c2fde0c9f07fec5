//! Text wrapping utilities

use crate::FontMetrics;

/// Literal rendered in place of any missing field value
pub const PLACEHOLDER: &str = "N/A";

/// Split text into lines based on measured maximum width
///
/// Greedy word-wrap: words accumulate onto the current line while the
/// measured width stays within `max_width`; the word that would exceed it
/// starts the next line. A single word wider than `max_width` is emitted
/// alone (no hyphenation).
///
/// Missing, empty, or whitespace-only text yields a single placeholder
/// line, never an empty sequence - downstream layout always expects a
/// field to occupy vertical space.
///
/// # Arguments
/// * `text` - Text to split, if present
/// * `max_width` - Maximum line width in points
/// * `metrics` - Font metrics used for measurement
/// * `font_size` - Font size in points
pub fn wrap_text(
    text: Option<&str>,
    max_width: f64,
    metrics: &FontMetrics,
    font_size: f32,
) -> Vec<String> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return vec![PLACEHOLDER.to_string()],
    };

    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
            continue;
        }

        let candidate_width =
            metrics.text_width(&current_line, font_size) + metrics.text_width(" ", font_size)
                + metrics.text_width(word, font_size);

        if candidate_width <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // With approximate metrics every character measures 6pt at size 12,
    // so a 72pt max width fits 12 characters per line.
    fn metrics() -> FontMetrics {
        FontMetrics::approximate()
    }

    #[test]
    fn test_wrap_basic() {
        let lines = wrap_text(Some("Hello world this is a test"), 72.0, &metrics(), 12.0);
        assert_eq!(lines, vec!["Hello world", "this is a", "test"]);
    }

    #[test]
    fn test_wrap_single_line() {
        let lines = wrap_text(Some("Short"), 600.0, &metrics(), 12.0);
        assert_eq!(lines, vec!["Short"]);
    }

    #[test]
    fn test_wrap_missing_text() {
        assert_eq!(wrap_text(None, 100.0, &metrics(), 12.0), vec![PLACEHOLDER]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(
            wrap_text(Some(""), 100.0, &metrics(), 12.0),
            vec![PLACEHOLDER]
        );
    }

    #[test]
    fn test_wrap_whitespace_only() {
        assert_eq!(
            wrap_text(Some("   "), 100.0, &metrics(), 12.0),
            vec![PLACEHOLDER]
        );
    }

    #[test]
    fn test_wrap_long_word_emitted_alone() {
        let lines = wrap_text(
            Some("a Supercalifragilisticexpialidocious b"),
            60.0,
            &metrics(),
            12.0,
        );
        assert_eq!(lines, vec!["a", "Supercalifragilisticexpialidocious", "b"]);
    }

    #[test]
    fn test_wrap_collapses_whitespace() {
        let lines = wrap_text(Some("Hello    world"), 600.0, &metrics(), 12.0);
        assert_eq!(lines, vec!["Hello world"]);
    }

    #[test]
    fn test_wrap_join_reconstructs_normalized_text() {
        let original = "The quick  brown fox\tjumps over the lazy dog";
        let lines = wrap_text(Some(original), 72.0, &metrics(), 12.0);
        let rejoined = lines.join(" ");
        let normalized = original.split_whitespace().collect::<Vec<_>>().join(" ");
        assert_eq!(rejoined, normalized);
    }

    #[test]
    fn test_wrap_lines_fit_or_are_single_words() {
        let m = metrics();
        let max_width = 72.0;
        let lines = wrap_text(
            Some("one two three four five six seven eight nine ten"),
            max_width,
            &m,
            12.0,
        );
        for line in &lines {
            let fits = m.text_width(line, 12.0) <= max_width;
            let single_word = !line.contains(' ');
            assert!(fits || single_word, "line {line:?} violates wrap contract");
        }
    }

    #[test]
    fn test_wrap_deterministic() {
        let a = wrap_text(Some("repeatable input text"), 72.0, &metrics(), 12.0);
        let b = wrap_text(Some("repeatable input text"), 72.0, &metrics(), 12.0);
        assert_eq!(a, b);
    }
}
