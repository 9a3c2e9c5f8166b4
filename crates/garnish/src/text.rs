//! Plain-text wrapping.
//!
//! Width handling counts characters, not grapheme clusters or display
//! cells; markup-aware widths come from the formatter, never from here.

/// Word-wrap `text` to at most `width` characters per line.
///
/// Breaks at the last space before the limit; a single word longer than
/// the width is force-broken. Existing line breaks are preserved and runs
/// of spaces survive intact.
pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for input_line in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in input_line.split(' ') {
            let word_len = word.chars().count();

            if current_len > 0 && current_len + 1 + word_len > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }

            let mut remaining = word;
            let mut remaining_len = word_len;
            while remaining_len > width {
                let split_at = remaining
                    .char_indices()
                    .nth(width)
                    .map(|(i, _)| i)
                    .unwrap_or(remaining.len());
                lines.push(remaining[..split_at].to_string());
                remaining = &remaining[split_at..];
                remaining_len -= width;
            }

            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current.push_str(remaining);
            current_len += remaining_len;
        }

        lines.push(current);
    }

    lines
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn wrapped_lines_never_exceed_width(
            text in "[a-z ]{0,120}",
            width in 1usize..40,
        ) {
            for line in word_wrap(&text, width) {
                prop_assert!(line.chars().count() <= width);
            }
        }

        #[test]
        fn wrapping_preserves_non_space_content(text in "[a-z ]{0,120}", width in 1usize..40) {
            let rejoined: String = word_wrap(&text, width).join(" ");
            let squash = |s: &str| s.chars().filter(|c| *c != ' ').collect::<String>();
            prop_assert_eq!(squash(&rejoined), squash(&text));
        }
    }
}
