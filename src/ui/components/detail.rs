//! Record detail page: back link, heading, subtitle lines and a section table.

use super::popup::render_popup;
use super::table::render_table;
use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Renders `detail` from `row` down, with its popup (if any) on top.
///
/// # Returns
///
/// The next available row position below the section table.
pub fn render_detail(out: &mut String, row: usize, detail: &DetailView, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let body_top = row;

    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&pad(&format!("← {}  (Esc)", detail.back_label), cols));
    out.push_str(Theme::reset());

    position_cursor(out, row + 1, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&pad(&detail.heading, cols));
    out.push_str(Theme::reset());

    let mut row = row + 2;
    for line in &detail.subtitle_lines {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&pad(line, cols));
        out.push_str(Theme::reset());
        row += 1;
    }
    row += 1;

    let next = render_table(out, row, &detail.section, theme, cols);

    if let Some(popup) = &detail.popup {
        render_popup(out, body_top + 1, popup, theme, cols, last_row);
    }
    next
}
