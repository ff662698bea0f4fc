use std::f64::consts::TAU;

pub mod model;
pub mod surface;
pub mod view;

pub use model::{LayoutConfig, LayoutParameters, Point, Segment};
pub use surface::{DrawCall, RecordingSurface, Shadow, Surface, TextAlign, TextBaseline};
pub use view::BoardRenderer;

pub const CANVAS_SIZE: f64 = 600.0;
pub const LABEL_COUNT: usize = 20;
pub const NUMBERS: [u32; LABEL_COUNT] = [
    6, 10, 15, 2, 17, 3, 19, 7, 16, 8, 11, 14, 9, 12, 5, 20, 1, 18, 4, 13,
];
pub const SEGMENT_ANGLE: f64 = TAU / LABEL_COUNT as f64;
pub const HALF_SEGMENT_ANGLE: f64 = SEGMENT_ANGLE / 2.0;
pub const BOARD_CENTER: Point = Point::new(240.0, 240.0);
pub const BOARD_RADIUS: f64 = 230.0;
pub const DOUBLE_RADIUS: f64 = 180.0; // outer edge of the doubling band
pub const TRIPLE_RADIUS: f64 = 110.0; // outer edge of the tripling band
pub const OUTER_BULLSEYE_RADIUS: f64 = 20.0;
pub const INNER_BULLSEYE_RADIUS: f64 = 10.0;
pub const NUMBER_OFFSET: f64 = 205.0; // label distance from center
pub const MULTIPLIER_WIDTH: f64 = 15.0;

pub const BORDER_LINE_WIDTH: f64 = 2.0;
pub const WIRE_SHADOW_BLUR: f64 = 2.0;
pub const WIRE_SHADOW_OFFSET: (f64, f64) = (1.0, 1.0);
