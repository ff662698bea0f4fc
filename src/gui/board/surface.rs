use super::Point;
use crate::gui::theme::FontSpec;
use palette::Srgba;
use std::convert::Infallible;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    #[default]
    Alphabetic,
    Middle,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub color: Srgba<f64>,
    pub blur: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Shadow {
    pub fn none() -> Self {
        Self {
            color: Srgba::new(0.0, 0.0, 0.0, 0.0),
            blur: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.color.alpha > 0.0
    }
}

/// A 2D drawing context with canvas semantics: the current path survives `fill` and
/// `stroke` until the next `begin_path`, and angles are radians measured clockwise from
/// the positive x axis.
pub trait Surface {
    type Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error>;
    fn set_fill_color(&mut self, color: Srgba<f64>);
    fn set_stroke_color(&mut self, color: Srgba<f64>);
    fn set_line_width(&mut self, width: f64);
    fn set_text_align(&mut self, align: TextAlign, baseline: TextBaseline);
    fn set_font(&mut self, font: &FontSpec);
    fn set_shadow(&mut self, shadow: Shadow);
    fn begin_path(&mut self);
    fn move_to(&mut self, point: Point);
    fn line_to(&mut self, point: Point);
    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self) -> Result<(), Self::Error>;
    fn stroke(&mut self) -> Result<(), Self::Error>;
    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), Self::Error>;
}

/// One recorded surface operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    ClearRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    FillColor(Srgba<f64>),
    StrokeColor(Srgba<f64>),
    LineWidth(f64),
    TextAlign(TextAlign, TextBaseline),
    Font(FontSpec),
    Shadow(Shadow),
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    },
    Fill,
    Stroke,
    FillText(String, Point),
}

/// Surface that records every call instead of drawing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::ClearRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn set_fill_color(&mut self, color: Srgba<f64>) {
        self.calls.push(DrawCall::FillColor(color));
    }

    fn set_stroke_color(&mut self, color: Srgba<f64>) {
        self.calls.push(DrawCall::StrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn set_text_align(&mut self, align: TextAlign, baseline: TextBaseline) {
        self.calls.push(DrawCall::TextAlign(align, baseline));
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.calls.push(DrawCall::Font(font.clone()));
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        self.calls.push(DrawCall::Shadow(shadow));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn move_to(&mut self, point: Point) {
        self.calls.push(DrawCall::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.calls.push(DrawCall::LineTo(point));
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.calls.push(DrawCall::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn fill(&mut self) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::Stroke);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), Self::Error> {
        self.calls.push(DrawCall::FillText(text.to_string(), at));
        Ok(())
    }
}
