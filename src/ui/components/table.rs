//! Table component renderer.
//!
//! Renders a caption line, column headers and the (already windowed) rows.
//! Columns are laid out left to right with a two-space gap; a column of width
//! `0` takes whatever is left of the line.

use crate::ui::helpers::{self, pad, position_cursor, width_of};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Cell, Column, TableRow, TableView};

const GAP: usize = 2;

/// Resolves column widths for a `cols`-wide line.
fn layout(columns: &[Column], cols: usize) -> Vec<usize> {
    let fixed: usize = columns.iter().map(|c| c.width).sum::<usize>()
        + GAP * columns.len().saturating_sub(1);
    let rest = cols.saturating_sub(fixed + 1);
    columns
        .iter()
        .map(|c| if c.width == 0 { rest } else { c.width })
        .collect()
}

/// Renders the whole table starting at `row`.
///
/// # Returns
///
/// The next available row position.
pub fn render_table(out: &mut String, row: usize, table: &TableView, theme: &Theme, cols: usize) -> usize {
    let mut row = render_caption(out, row, table, theme, cols);
    let widths = layout(&table.columns, cols);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    let mut used = 0;
    for (column, width) in table.columns.iter().zip(&widths) {
        out.push_str(&pad(column.label, *width));
        out.push_str(&" ".repeat(GAP));
        used += width + GAP;
    }
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row += 1;

    if table.rows.is_empty() {
        position_cursor(out, row, 1);
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&pad(&table.empty_message, cols));
        out.push_str(Theme::reset());
        return row + 1;
    }

    for table_row in &table.rows {
        row = render_row(out, row, table_row, &widths, theme, cols);
    }
    row
}

fn render_caption(out: &mut String, row: usize, table: &TableView, theme: &Theme, cols: usize) -> usize {
    let summary = table.summary.as_deref().unwrap_or("");
    let caption_width = cols.saturating_sub(width_of(summary) + 1);

    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.accent));
    out.push_str(&pad(&table.caption, caption_width));
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(summary);
    out.push_str(Theme::reset());
    row + 1
}

/// One row. A selected row gets the selection colors across the full width;
/// otherwise status cells take their status color.
fn render_row(out: &mut String, row: usize, table_row: &TableRow, widths: &[usize], theme: &Theme, cols: usize) -> usize {
    let base = if table_row.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    position_cursor(out, row, 1);
    out.push_str(&base);
    let mut used = 0;
    for (cell, width) in table_row.cells.iter().zip(widths) {
        render_cell(out, cell, *width, theme, &base, table_row.is_selected);
        out.push_str(&" ".repeat(GAP));
        used += width + GAP;
    }
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
    out.push_str(Theme::reset());
    row + 1
}

fn render_cell(out: &mut String, cell: &Cell, width: usize, theme: &Theme, base: &str, is_selected: bool) {
    let text = pad(&cell.text, width);
    match cell.status {
        Some(status) if !is_selected => {
            out.push_str(&Theme::fg(theme.status_color(status)));
            out.push_str(&text);
            out.push_str(base);
        }
        _ => helpers::push_highlighted(out, &text, &cell.highlight_ranges, theme, base),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AppointmentStatus;

    fn table(rows: Vec<TableRow>) -> TableView {
        TableView {
            caption: "Today's Appointments".to_string(),
            summary: Some("Total 1".to_string()),
            columns: vec![
                Column { label: "Time", width: 10 },
                Column { label: "Status", width: 0 },
            ],
            rows,
            empty_message: "No appointments match \"zz\"".to_string(),
            popup: None,
        }
    }

    #[test]
    fn last_column_takes_the_rest() {
        let columns = [Column { label: "A", width: 10 }, Column { label: "B", width: 0 }];
        assert_eq!(layout(&columns, 40), vec![10, 27]);
    }

    #[test]
    fn status_cells_are_colored() {
        let theme = Theme::default();
        let row = TableRow {
            cells: vec![Cell::plain("09:00 AM"), Cell::status(AppointmentStatus::Cancelled)],
            is_selected: false,
        };
        let mut out = String::new();

        assert_eq!(render_table(&mut out, 1, &table(vec![row]), &theme, 60), 4);
        let colored = format!("{}Cancelled", Theme::fg(&theme.colors.status.cancelled));
        assert!(out.contains(&colored));
        assert!(out.contains("Total 1"));
    }

    #[test]
    fn empty_tables_show_their_message() {
        let mut out = String::new();
        render_table(&mut out, 1, &table(vec![]), &Theme::default(), 60);
        assert!(out.contains("No appointments match \"zz\""));
    }
}
