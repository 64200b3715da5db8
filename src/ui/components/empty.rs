//! Empty state component renderer.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered message with a dimmed subtitle beneath it.
///
/// Used while the catalog loads and when a detail record cannot be resolved.
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let row = push_centered(out, row, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);
    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    push_centered(out, row, &empty.subtitle, &subtitle_style, cols)
}
