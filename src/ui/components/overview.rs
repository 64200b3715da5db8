//! Dashboard and reports layout: a row of stat cards, then stacked panels.

use crate::ui::helpers::{bar, fit, pad, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OverviewView, Panel, PanelLine, StatCard};

const CARD_GAP: usize = 2;
const BAR_LABEL_WIDTH: usize = 18;
const BAR_VALUE_WIDTH: usize = 6;

/// Renders `overview` from `row` down, stopping before `last_row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_overview(out: &mut String, row: usize, overview: &OverviewView, theme: &Theme, cols: usize, last_row: usize) -> usize {
    let mut row = row;

    if let Some(heading) = &overview.heading {
        position_cursor(out, row, 1);
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.header_fg));
        out.push_str(&pad(heading, cols));
        out.push_str(Theme::reset());
        row += 1;
    }

    if !overview.cards.is_empty() && row + 4 <= last_row {
        row = render_cards(out, row, &overview.cards, theme, cols);
    }

    for panel in &overview.panels {
        if row + 1 >= last_row {
            break;
        }
        row = render_panel(out, row + 1, panel, theme, cols, last_row);
    }
    row
}

/// Cards share the width evenly, four lines tall.
fn render_cards(out: &mut String, row: usize, cards: &[StatCard], theme: &Theme, cols: usize) -> usize {
    let count = cards.len();
    let width = cols.saturating_sub(CARD_GAP * count.saturating_sub(1)) / count;
    let inner = width.saturating_sub(4);
    let border = Theme::fg(&theme.colors.border);

    for (i, card) in cards.iter().enumerate() {
        let col = i * (width + CARD_GAP) + 1;

        position_cursor(out, row, col);
        out.push_str(&border);
        out.push_str(&format!("╭{}╮", "─".repeat(width.saturating_sub(2))));

        position_cursor(out, row + 1, col);
        out.push_str(&format!("│ {}{} ", Theme::fg(&theme.colors.text_dim), pad(&card.label, inner)));
        out.push_str(&border);
        out.push('│');

        let delta = card.delta.map_or_else(String::new, |d| {
            let arrow = if d >= 0 { '▲' } else { '▼' };
            format!("  {arrow} {}%", d.abs())
        });
        let value = fit(&card.value, inner);
        let delta = fit(&delta, inner.saturating_sub(width_of(&value)));
        let delta_color = match card.delta {
            Some(d) if d < 0 => &theme.colors.trend_down,
            _ => &theme.colors.trend_up,
        };

        position_cursor(out, row + 2, col);
        out.push_str(&format!("│ {}{}{value}{}", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::reset()));
        out.push_str(&Theme::fg(delta_color));
        out.push_str(&delta);
        out.push_str(&" ".repeat(inner.saturating_sub(width_of(&value) + width_of(&delta))));
        out.push_str(&format!(" {border}│"));

        position_cursor(out, row + 3, col);
        out.push_str(&format!("╰{}╯", "─".repeat(width.saturating_sub(2))));
        out.push_str(Theme::reset());
    }
    row + 4
}

fn render_panel(out: &mut String, row: usize, panel: &Panel, theme: &Theme, cols: usize, last_row: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&panel.title);
    out.push_str(Theme::reset());
    if let Some(subtitle) = &panel.subtitle {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("  {subtitle}"));
        out.push_str(Theme::reset());
    }

    let mut row = row + 1;
    for line in &panel.lines {
        if row >= last_row {
            break;
        }
        position_cursor(out, row, 1);
        render_line(out, line, theme, cols);
        row += 1;
    }
    row
}

fn render_line(out: &mut String, line: &PanelLine, theme: &Theme, cols: usize) {
    match line {
        PanelLine::Text(text) => {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&pad(&format!("  {text}"), cols));
        }
        PanelLine::Entry { marker, text, trailing } => {
            let trailing_width = width_of(trailing);
            let text_width = cols.saturating_sub(trailing_width + 6);
            out.push_str(&Theme::fg(&theme.colors.accent));
            out.push_str(&format!("  {marker} "));
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&pad(text, text_width));
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push(' ');
            out.push_str(trailing);
        }
        PanelLine::Bar { label, value, max } => {
            let bar_width = cols.saturating_sub(BAR_LABEL_WIDTH + BAR_VALUE_WIDTH + 4);
            out.push_str(&Theme::fg(&theme.colors.text_normal));
            out.push_str(&format!("  {}", pad(label, BAR_LABEL_WIDTH)));
            out.push_str(&Theme::fg(&theme.colors.bar));
            out.push_str(&bar(*value, *max, bar_width));
            out.push_str(&Theme::fg(&theme.colors.text_dim));
            out.push_str(&format!(" {value:>w$}", w = BAR_VALUE_WIDTH - 1));
        }
    }
    out.push_str(Theme::reset());
}
