use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, HEADER_COLOR, TITLE_Y};
use crate::render::{PlotArea, draw_ui_text};
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, area: PlotArea, screen_h: f32, font: Option<&Font>) {
    draw_header_block(state, area, font);
    draw_status_block(state, area, screen_h, font);
}

fn draw_header_block(state: &AppRuntime, area: PlotArea, font: Option<&Font>) {
    draw_ui_text(
        "Physics Experiment Visualizer",
        18.0,
        TITLE_Y,
        30,
        HEADER_COLOR,
        font,
    );
    let selected = format!("Experiment: {}", state.selected);
    let selected_size = measure_text(&selected, font, 22, 1.0);
    draw_ui_text(
        &selected,
        area.right - selected_size.width,
        TITLE_Y,
        22,
        DARKGRAY,
        font,
    );
    draw_ui_text(
        "Controls: pick an experiment | fill in the fields | Enter or Simulate to plot | Copy SVG for a snapshot",
        30.0,
        CONTROLS_Y,
        18,
        DARKGRAY,
        font,
    );
}

fn draw_status_block(state: &AppRuntime, area: PlotArea, screen_h: f32, font: Option<&Font>) {
    if let Some(figure) = state.plot.figure() {
        draw_ui_text(&figure.summary, area.left, screen_h - 45.0, 22, HEADER_COLOR, font);
    }

    let animation_note = state.animation.as_ref().map_or(String::new(), |animation| {
        let frame = animation.frame_index().map_or(0, |i| i + 1);
        if animation.is_finished() {
            format!(" | Landed after {frame} frames")
        } else {
            format!(
                " | Frame {frame}/{} ({:.0}%)",
                animation.total_frames(),
                animation.progress() * 100.0
            )
        }
    });
    draw_ui_text(
        &format!("{}{}", state.status_line, animation_note),
        area.left,
        screen_h - 14.0,
        18,
        BLUE,
        font,
    );
}
