use experiment_visualizer::ExperimentKind;
use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::{PANEL_POSITION, PANEL_SIZE};
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) select: Option<ExperimentKind>,
    pub(crate) simulate: bool,
    pub(crate) copy_svg: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            select: self.select.or(other.select),
            simulate: self.simulate || other.simulate,
            copy_svg: self.copy_svg || other.copy_svg,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        simulate: is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
        ..Default::default()
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let labels = ExperimentKind::labels();
    let mut selected_idx = state.selected.index();

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), PANEL_POSITION, PANEL_SIZE)
        .label("Experiment")
        .ui(&mut *root_ui(), |ui| {
            ui.combo_box(hash!(), "Choose Experiment:", &labels, &mut selected_idx);
            ui.separator();

            // Only the selected experiment's fields are shown; hidden fields
            // keep their text.
            for &field in state.selected.fields() {
                let label = field.label();
                ui.input_text(hash!(field.key()), &label, state.inputs.get_mut(field));
            }
            ui.separator();

            if ui.button(None, "Simulate (Enter)") {
                actions.simulate = true;
            }
            if ui.button(None, "Copy SVG") {
                actions.copy_svg = true;
            }
        });

    if selected_idx != state.selected.index() {
        actions.select = ExperimentKind::from_index(selected_idx);
    }
    actions
}
