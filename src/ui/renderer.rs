//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to UI components. Exactly one content
//! mode renders per frame — form, modal, or list — mirroring the section
//! state machine.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;

/// Renders the plugin UI to stdout.
///
/// Computes the view model from application state and delegates to the
/// appropriate layout. Prints ANSI-styled output using `print!`; does not
/// clear the screen or manage cursor position beyond explicit addressing.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

/// Renders a view model with mode-specific layout.
fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    if let Some(form) = &vm.form {
        components::render_form_mode(vm, form, theme, cols, rows);
    } else if let Some(modal) = &vm.modal {
        components::render_modal_mode(vm, modal, theme, cols, rows);
    } else {
        components::render_list_mode(vm, theme, cols, rows);
    }
}
