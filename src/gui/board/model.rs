use super::{
    BOARD_CENTER, BOARD_RADIUS, DOUBLE_RADIUS, HALF_SEGMENT_ANGLE, INNER_BULLSEYE_RADIUS,
    LABEL_COUNT, MULTIPLIER_WIDTH, NUMBER_OFFSET, NUMBERS, OUTER_BULLSEYE_RADIUS,
    SEGMENT_ANGLE, TRIPLE_RADIUS,
};
use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point `distance` away from `self` along `angle` (radians, clockwise on screen).
    pub fn polar(self, angle: f64, distance: f64) -> Self {
        Self::new(
            self.x + angle.cos() * distance,
            self.y + angle.sin() * distance,
        )
    }
}

/// Board geometry as read from the `[layout]` config table. Every field falls back to the
/// standard board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub numbers: Vec<u32>,
    pub center: Point,
    pub board_radius: f64,
    pub double_radius: f64,
    pub triple_radius: f64,
    pub outer_bullseye_radius: f64,
    pub inner_bullseye_radius: f64,
    pub number_offset: f64,
    pub multiplier_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            numbers: NUMBERS.to_vec(),
            center: BOARD_CENTER,
            board_radius: BOARD_RADIUS,
            double_radius: DOUBLE_RADIUS,
            triple_radius: TRIPLE_RADIUS,
            outer_bullseye_radius: OUTER_BULLSEYE_RADIUS,
            inner_bullseye_radius: INNER_BULLSEYE_RADIUS,
            number_offset: NUMBER_OFFSET,
            multiplier_width: MULTIPLIER_WIDTH,
        }
    }
}

/// Validated, immutable board geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParameters {
    numbers: [u32; LABEL_COUNT],
    segment_angle: f64,
    half_segment_angle: f64,
    center: Point,
    board_radius: f64,
    double_radius: f64,
    triple_radius: f64,
    outer_bullseye_radius: f64,
    inner_bullseye_radius: f64,
    number_offset: f64,
    multiplier_width: f64,
}

impl LayoutParameters {
    pub fn standard() -> Self {
        Self {
            numbers: NUMBERS,
            segment_angle: SEGMENT_ANGLE,
            half_segment_angle: HALF_SEGMENT_ANGLE,
            center: BOARD_CENTER,
            board_radius: BOARD_RADIUS,
            double_radius: DOUBLE_RADIUS,
            triple_radius: TRIPLE_RADIUS,
            outer_bullseye_radius: OUTER_BULLSEYE_RADIUS,
            inner_bullseye_radius: INNER_BULLSEYE_RADIUS,
            number_offset: NUMBER_OFFSET,
            multiplier_width: MULTIPLIER_WIDTH,
        }
    }

    pub fn new(config: &LayoutConfig) -> Result<Self, ConfigurationError> {
        let numbers: [u32; LABEL_COUNT] =
            config
                .numbers
                .as_slice()
                .try_into()
                .map_err(|_| ConfigurationError::LabelCount {
                    expected: LABEL_COUNT,
                    found: config.numbers.len(),
                })?;

        let mut seen = HashSet::with_capacity(LABEL_COUNT);
        if let Some(&dup) = numbers.iter().find(|&&n| !seen.insert(n)) {
            return Err(ConfigurationError::DuplicateLabel(dup));
        }

        if config.multiplier_width <= 0.0 || !config.multiplier_width.is_finite() {
            return Err(ConfigurationError::MultiplierWidth(config.multiplier_width));
        }

        let w = config.multiplier_width;
        let radii = [
            ("board_radius", config.board_radius),
            ("double_radius", config.double_radius),
            ("double_radius - multiplier_width", config.double_radius - w),
            ("triple_radius", config.triple_radius),
            ("triple_radius - multiplier_width", config.triple_radius - w),
            ("outer_bullseye_radius", config.outer_bullseye_radius),
            ("inner_bullseye_radius", config.inner_bullseye_radius),
            ("center", 0.0),
        ];
        for pair in radii.windows(2) {
            let ((outer, outer_value), (inner, inner_value)) = (pair[0], pair[1]);
            // also rejects NaN
            if !(outer_value > inner_value) {
                return Err(ConfigurationError::RadiiNotDecreasing {
                    outer,
                    outer_value,
                    inner,
                    inner_value,
                });
            }
        }

        if !(config.number_offset > config.double_radius
            && config.number_offset < config.board_radius)
        {
            return Err(ConfigurationError::NumberOffset {
                offset: config.number_offset,
                double: config.double_radius,
                board: config.board_radius,
            });
        }

        Ok(Self {
            numbers,
            segment_angle: SEGMENT_ANGLE,
            half_segment_angle: HALF_SEGMENT_ANGLE,
            center: config.center,
            board_radius: config.board_radius,
            double_radius: config.double_radius,
            triple_radius: config.triple_radius,
            outer_bullseye_radius: config.outer_bullseye_radius,
            inner_bullseye_radius: config.inner_bullseye_radius,
            number_offset: config.number_offset,
            multiplier_width: config.multiplier_width,
        })
    }

    pub fn numbers(&self) -> &[u32; LABEL_COUNT] {
        &self.numbers
    }

    pub fn segment_angle(&self) -> f64 {
        self.segment_angle
    }

    pub fn half_segment_angle(&self) -> f64 {
        self.half_segment_angle
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn board_radius(&self) -> f64 {
        self.board_radius
    }

    pub fn double_radius(&self) -> f64 {
        self.double_radius
    }

    pub fn double_inner_radius(&self) -> f64 {
        self.double_radius - self.multiplier_width
    }

    pub fn triple_radius(&self) -> f64 {
        self.triple_radius
    }

    pub fn triple_inner_radius(&self) -> f64 {
        self.triple_radius - self.multiplier_width
    }

    pub fn outer_bullseye_radius(&self) -> f64 {
        self.outer_bullseye_radius
    }

    pub fn inner_bullseye_radius(&self) -> f64 {
        self.inner_bullseye_radius
    }

    pub fn number_offset(&self) -> f64 {
        self.number_offset
    }

    pub fn multiplier_width(&self) -> f64 {
        self.multiplier_width
    }

    /// Angle of the ray separating segment `index - 1` from segment `index`.
    pub fn ray_angle(&self, index: usize) -> f64 {
        index as f64 * self.segment_angle
    }

    pub fn segment(&self, index: usize) -> Option<Segment> {
        let label = *self.numbers.get(index)?;
        let start_angle = self.ray_angle(index);
        Some(Segment {
            index,
            label,
            start_angle,
            // next segment's start, so neighbours share an exact boundary
            end_angle: self.ray_angle(index + 1),
            label_angle: start_angle + self.half_segment_angle,
            alt: index % 2,
        })
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..LABEL_COUNT).filter_map(|i| self.segment(i))
    }

    pub fn label_position(&self, segment: &Segment) -> Point {
        self.center.polar(segment.label_angle, self.number_offset)
    }
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<&LayoutConfig> for LayoutParameters {
    type Error = ConfigurationError;

    fn try_from(config: &LayoutConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

/// Angular placement of one numbered segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub index: usize,
    pub label: u32,
    pub start_angle: f64,
    pub end_angle: f64,
    pub label_angle: f64,
    /// Which member of each alternating color pair this segment uses.
    pub alt: usize,
}
