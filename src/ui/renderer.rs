//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the view model from `AppState`, then let
//! the components lay it out into a frame buffer. [`render`] prints the frame;
//! [`render_to_string`] returns it, which is what the tests look at.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the plugin UI to stdout.
///
/// # Parameters
///
/// * `state` - Current application state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_to_string(state, rows, cols));
}

/// Renders one frame into a string of ANSI-positioned output.
#[must_use]
pub fn render_to_string(state: &AppState, rows: usize, cols: usize) -> String {
    let _span = tracing::trace_span!("render", rows, cols).entered();

    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols)
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::new();
    components::render_frame(&mut out, vm, theme, cols, rows);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Page, SearchFocus};
    use crate::catalog::{demo_catalog, Catalog};
    use chrono::NaiveDate;

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let mut state = AppState::new(Catalog::default(), Theme::default(), 42);
        state.replace_catalog(demo_catalog(42, today).unwrap());
        state
    }

    #[test]
    fn loading_frame_before_catalog() {
        let state = AppState::new(Catalog::default(), Theme::default(), 42);
        let frame = render_to_string(&state, 24, 80);
        assert!(frame.contains("Loading catalog..."));
    }

    #[test]
    fn every_page_renders() {
        let mut state = state();
        for page in Page::ALL {
            state.switch_page(page);
            let frame = render_to_string(&state, 30, 110);
            assert!(frame.contains(page.title(false)));
        }
    }

    #[test]
    fn doctor_profile_renders_as_popup() {
        let mut state = state();
        state.switch_page(Page::Doctors);
        state.select();
        let doctor = state.selected_doctor().unwrap().name.clone();

        let frame = render_to_string(&state, 40, 110);
        assert!(frame.contains("Working Hours"));
        assert!(frame.contains(&doctor));
    }

    #[test]
    fn focused_search_shows_query() {
        let mut state = state();
        state.switch_page(Page::Appointments);
        state.enter_search();
        state.set_query("carter");
        assert_eq!(state.input_mode, crate::app::InputMode::Search(SearchFocus::Typing));

        let frame = render_to_string(&state, 30, 110);
        assert!(frame.contains(" / carter"));
    }
}
