//! Header component: centered page title and the page tab strip.

use crate::ui::helpers::{position_cursor, push_centered, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title on `row` and the tabs on `row + 1`.
///
/// # Returns
///
/// The next available row position (row + 2)
///
/// # Layout
///
/// ```text
///                         Patient Details
///  1 Dashboard   2 Appointments   3 Doctors  [4 Patients]  5 Reports
/// ```
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let mut style = format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        style.push_str(&Theme::bg(bg));
    }
    let row = push_centered(out, row, &header.title, &style, cols);

    position_cursor(out, row, 1);
    let mut used = 0;
    for tab in &header.tabs {
        let label = format!(" {} {} ", tab.key, tab.label);
        let len = width_of(&label) + 1;
        if used + len > cols {
            break;
        }
        if tab.is_active {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.accent));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&label);
        out.push_str(Theme::reset());
        out.push(' ');
        used += len;
    }
    out.push_str(&" ".repeat(cols.saturating_sub(used)));

    row + 1
}
