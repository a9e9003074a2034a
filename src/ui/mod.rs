pub mod focus_pane;
pub mod history_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod styles;

use crate::app::AppState;
use focus_pane::render_focus_pane;
use history_pane::render_history_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;

/// Main render function - draws the entire UI from the view model
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let vm = app.view_model();
    let layout = create_layout(size, vm.show_history);

    render_keybindings(f, layout.keybindings_area);
    render_focus_pane(f, &vm.focus, layout.focus_area);

    if let Some(history_area) = layout.history_area {
        render_history_pane(f, &vm.history, vm.history_total, history_area);
    }

    // The add-task form floats above everything else
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
