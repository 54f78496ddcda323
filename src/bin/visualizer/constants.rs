use macroquad::prelude::{Color, Vec2};

pub const INITIAL_WINDOW_WIDTH: i32 = 1440;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_POSITION: Vec2 = Vec2::new(18.0, 110.0);
pub const PANEL_SIZE: Vec2 = Vec2::new(380.0, 330.0);

pub const LEFT_MARGIN: f32 = 500.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 150.0;
pub const BOTTOM_MARGIN: f32 = 140.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 82.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;

pub const BACKGROUND_COLOR: Color = Color::new(0.98, 0.984, 0.992, 1.0);
pub const GRID_COLOR: Color = Color::new(0.89, 0.906, 0.925, 1.0);
pub const LABEL_COLOR: Color = Color::new(0.41, 0.443, 0.486, 1.0);
pub const HEADER_COLOR: Color = Color::new(0.118, 0.118, 0.137, 1.0);
pub const MARKER_OUTLINE_COLOR: Color = Color::new(0.5, 0.0, 0.0, 1.0);
