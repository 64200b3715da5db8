//! Shared rendering utilities.
//!
//! Components append ANSI-styled text to a frame buffer (`&mut String`); the
//! renderer prints the finished frame in one go. All widths are measured in
//! characters, not bytes.

use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Number of characters in `text`.
#[must_use]
pub fn width_of(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `width` characters, ending in `…` when cut.
///
/// ```rust
/// use careboard::ui::helpers::fit;
///
/// assert_eq!(fit("Cardiologist", 6), "Cardi…");
/// assert_eq!(fit("ENT", 6), "ENT");
/// ```
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    if width_of(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// `text` fitted to `width` and right-padded with spaces to exactly `width`.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let fill = width.saturating_sub(width_of(&fitted));
    format!("{fitted}{}", " ".repeat(fill))
}

/// Greedy word wrap. Words longer than `width` are hard-split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            lines.push(word.drain(..width).collect());
        }
        let word: String = word.into_iter().collect();
        if word.is_empty() {
            continue;
        }
        if !line.is_empty() && width_of(&line) + 1 + width_of(&word) > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Writes `text` (already fitted) with search matches highlighted.
///
/// `base` is the escape sequence to restore after each highlighted run, so
/// highlights work inside a selected row too.
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base: &str,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < pos || start >= end {
            continue;
        }
        out.extend(&chars[pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(base);
        pos = end;
    }
    out.extend(&chars[pos..]);
}

/// A bar of `width` cells, filled in proportion to `value / max`.
///
/// ```rust
/// use careboard::ui::helpers::bar;
///
/// assert_eq!(bar(20, 40, 10), "█████░░░░░");
/// assert_eq!(bar(5, 0, 4), "░░░░");
/// ```
#[must_use]
pub fn bar(value: u32, max: u32, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        let ratio = f64::from(value.min(max)) / f64::from(max);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let cells = (ratio * width as f64).round() as usize;
        cells.min(width)
    };
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Writes `text` centered on `row`, styled with `style`, padded to `cols`.
pub fn push_centered(out: &mut String, row: usize, text: &str, style: &str, cols: usize) -> usize {
    let text = fit(text, cols);
    let len = width_of(&text);
    let left = cols.saturating_sub(len) / 2;

    position_cursor(out, row, 1);
    out.push_str(style);
    out.push_str(&" ".repeat(left));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(left + len)));
    out.push_str(Theme::reset());
    row + 1
}

/// Horizontal rule across the full width.
pub fn push_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_fits_exactly() {
        assert_eq!(pad("Dr. Emily Carter", 8), "Dr. Emi…");
        assert_eq!(pad("Ava", 6), "Ava   ");
        assert_eq!(width_of(&pad("Zoë", 5)), 5);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Dedicated to preventive cardiology", 12),
            vec!["Dedicated to", "preventive", "cardiology"]
        );
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn highlights_restore_base_style() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Ava Patel", &[(0, 3)], &theme, "<base>");

        assert!(out.starts_with(&Theme::fg(&theme.colors.match_highlight_fg)));
        assert!(out.ends_with("<base> Patel"));
    }

    #[test]
    fn out_of_range_highlights_are_clamped() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Liam", &[(2, 9)], &theme, "");
        assert!(out.starts_with("Li"));
        assert!(out.contains("am"));
    }
}
