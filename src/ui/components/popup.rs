//! Popup box drawn over the body: doctor profiles and appointment details.

use crate::ui::helpers::{fit, pad, position_cursor, width_of, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PopupView;

const MAX_WIDTH: usize = 72;

/// Renders `popup` horizontally centered, starting at `row`.
///
/// Long values wrap under their label. Rows past `last_row` are not drawn.
///
/// # Returns
///
/// The row after the box.
pub fn render_popup(out: &mut String, row: usize, popup: &PopupView, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let width = cols.saturating_sub(4).min(MAX_WIDTH);
    let inner = width.saturating_sub(4);
    let left = (cols.saturating_sub(width)) / 2 + 1;
    let label_width = popup
        .fields
        .iter()
        .map(|(label, _)| width_of(label))
        .max()
        .unwrap_or(0)
        + 2;
    let value_width = inner.saturating_sub(label_width).max(1);

    let border = Theme::fg(&theme.colors.accent);
    let body = format!("{}{}", Theme::fg(&theme.colors.text_normal), Theme::bg(&theme.colors.selection_fg));
    let mut row = row;

    let title = fit(&format!(" {} ", popup.title), inner);
    position_cursor(out, row, left);
    out.push_str(&border);
    out.push_str(Theme::bold());
    out.push_str(&format!("╭─{title}{}╮", "─".repeat(width.saturating_sub(width_of(&title) + 3))));
    out.push_str(Theme::reset());
    row += 1;

    for (label, value) in &popup.fields {
        for (i, line) in wrap(value, value_width).iter().enumerate() {
            if row >= last_row {
                break;
            }
            let label_cell = if i == 0 { pad(label, label_width) } else { " ".repeat(label_width) };
            position_cursor(out, row, left);
            out.push_str(&border);
            out.push('│');
            out.push_str(&body);
            out.push(' ');
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&label_cell);
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&pad(line, inner.saturating_sub(label_width)));
            out.push(' ');
            out.push_str(Theme::reset());
            out.push_str(&border);
            out.push('│');
            out.push_str(Theme::reset());
            row += 1;
        }
    }

    let hint = " Esc: close ";
    position_cursor(out, row, left);
    out.push_str(&border);
    out.push_str(&format!("╰{}{hint}─╯", "─".repeat(width.saturating_sub(width_of(hint) + 3))));
    out.push_str(Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_long_values_under_their_label() {
        let popup = PopupView {
            title: "Appointment Details".to_string(),
            fields: vec![
                ("Status".to_string(), "Completed".to_string()),
                ("Notes".to_string(), "word ".repeat(40)),
            ],
        };
        let mut out = String::new();
        let next = render_popup(&mut out, 3, &popup, &Theme::default(), 80, 40);

        assert!(next > 3 + 2 + 2);
        assert!(out.contains("Appointment Details"));
        assert!(out.contains("Esc: close"));
    }

    #[test]
    fn clips_at_last_row() {
        let popup = PopupView {
            title: "Dr. Emily Carter".to_string(),
            fields: vec![("About".to_string(), "lorem ipsum ".repeat(60))],
        };
        let mut out = String::new();
        assert_eq!(render_popup(&mut out, 3, &popup, &Theme::default(), 80, 6), 7);
    }
}
