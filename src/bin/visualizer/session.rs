use experiment_visualizer::core::chart::{DEFAULT_SVG_SIZE, render_svg};
use log::{info, warn};
use macroquad::miniquad::window::clipboard_set;

use crate::controls::FrameActions;
use crate::state::AppRuntime;

pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) {
    if let Some(kind) = actions.select {
        state.select(kind);
    }

    if actions.simulate {
        state.run_simulation();
    }

    if actions.copy_svg {
        match render_svg(&state.plot, state.marker(), DEFAULT_SVG_SIZE) {
            Ok(svg) => {
                clipboard_set(&svg);
                info!("Copied {} byte SVG snapshot", svg.len());
                state.set_copied_status();
            }
            Err(err) => {
                warn!("SVG snapshot failed: {err}");
                state.status_line = format!("Snapshot failed: {err}");
            }
        }
    }
}

pub(crate) fn step_animation(state: &mut AppRuntime, frame_dt: f32) {
    if let Some(animation) = state.animation.as_mut() {
        animation.advance(f64::from(frame_dt));
    }
}
