//! Search bar component renderer.

use crate::ui::helpers::{fit, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Spaces left and right of the search box.
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the 3-line search box starting at `row`.
///
/// An empty query shows the page's placeholder dimmed. While focused, a block
/// cursor follows the query.
///
/// # Returns
///
/// The next available row position (row + 3)
///
/// # Layout
///
/// ```text
///   ┌──────────────────────────────────────────┐
///   │ / Search by Patient Name, ID, or Phone... │
///   └──────────────────────────────────────────┘
/// ```
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = if search.is_focused {
        Theme::fg(&theme.colors.search_bar_border)
    } else {
        Theme::fg(&theme.colors.border)
    };

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    let (text, style) = if search.query.is_empty() {
        (search.placeholder.as_str(), format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)))
    } else {
        (search.query.as_str(), Theme::fg(&theme.colors.text_normal))
    };
    let cursor = if search.is_focused { "█" } else { "" };
    let content = fit(&format!(" / {text}"), inner_width.saturating_sub(width_of(cursor)));
    let padding = inner_width.saturating_sub(width_of(&content) + width_of(cursor));

    position_cursor(out, row + 1, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&style);
    out.push_str(&content);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(cursor);
    out.push_str(&" ".repeat(padding));
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());

    row + 3
}
