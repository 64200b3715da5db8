//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Page title and tab strip
//! - [`footer`]: Keybinding hints
//! - [`search`]: Search input box
//! - [`table`]: Directory tables with status colors and match highlights
//! - [`detail`]: A single record with its history table
//! - [`overview`]: Stat cards and chart panels
//! - [`popup`]: Field box drawn over the body
//! - [`empty`]: Centered message
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header: title]
//! [Header: tabs]
//! [Border]
//! [Notice]              (when present)
//! [Search Bar - 3 lines] (on directory pages)
//! [Body]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod detail;
mod empty;
mod footer;
mod header;
mod overview;
mod popup;
mod search;
mod table;

use crate::ui::helpers::{pad, position_cursor, push_border};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use overview::render_overview;
use popup::render_popup;
use search::render_search_bar;
use table::render_table;

/// Lays out a full frame for a `cols` x `rows` terminal into `out`.
pub fn render_frame(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.max(2);
    let border_row = footer_row - 1;

    let mut row = render_header(out, 2, &vm.header, theme, cols);
    row = push_border(out, row, &theme.colors.border, cols);

    if let Some(notice) = &vm.notice {
        position_cursor(out, row, 1);
        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.notice_fg));
        out.push_str(&pad(&format!(" ! {notice}"), cols));
        out.push_str(Theme::reset());
        row += 1;
    }

    if let Some(search) = &vm.search_bar {
        row = render_search_bar(out, row, search, theme, cols);
    }

    let body_top = row;
    match &vm.body {
        Body::Empty(empty) => {
            render_empty_state(out, body_top + 2, empty, theme, cols);
        }
        Body::Table(table) => {
            render_table(out, body_top, table, theme, cols);
            if let Some(popup) = &table.popup {
                render_popup(out, body_top + 1, popup, theme, cols, border_row);
            }
        }
        Body::Detail(detail) => {
            render_detail(out, body_top, detail, theme, cols, border_row);
        }
        Body::Overview(overview) => {
            render_overview(out, body_top, overview, theme, cols, border_row);
        }
    }

    push_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);
}
