pub const DEFAULT_PADDING: f32 = 40.0;
pub const DEFAULT_SPACING: f32 = 10.0;
pub const ICON_WIDTH: f32 = 300.0;
pub const WINDOW_WIDTH: f32 = 380.0;
pub const WINDOW_HEIGHT: f32 = 430.0;
