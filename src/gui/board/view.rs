use super::model::{LayoutParameters, Segment};
use super::surface::{Shadow, Surface, TextAlign, TextBaseline};
use super::{BORDER_LINE_WIDTH, CANVAS_SIZE, WIRE_SHADOW_BLUR, WIRE_SHADOW_OFFSET};
use crate::config::Config;
use crate::error::ConfigurationError;
use crate::frame::FrameContext;
use crate::gui::theme::{ColorScheme, FontSpec};
use palette::Srgba;
use std::f64::consts::TAU;

pub struct BoardRenderer {
    layout: LayoutParameters,
    colors: ColorScheme,
    font: FontSpec,
}

impl BoardRenderer {
    pub fn new(layout: LayoutParameters, colors: ColorScheme, font: FontSpec) -> Self {
        Self {
            layout,
            colors,
            font,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigurationError> {
        Ok(Self::new(
            LayoutParameters::new(&config.layout)?,
            ColorScheme::new(&config.colors)?,
            config.font.clone(),
        ))
    }

    pub fn layout(&self) -> &LayoutParameters {
        &self.layout
    }

    pub fn colors(&self) -> &ColorScheme {
        &self.colors
    }

    /// Draws one complete frame. The output depends only on the board, never on the
    /// frame timing.
    pub fn render<S: Surface>(&self, surface: &mut S, frame: &FrameContext) -> Result<(), S::Error> {
        log::trace!(
            "Rendering frame at {:.1}ms (+{:.1}ms)",
            frame.timestamp,
            frame.elapsed
        );

        self.reset(surface)?;
        self.draw_boundary(surface)?;
        for segment in self.layout.segments() {
            self.draw_segment(surface, &segment)?;
        }
        self.draw_bullseye(surface)?;
        self.draw_wire(surface)
    }

    fn reset<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear_rect(0.0, 0.0, CANVAS_SIZE, CANVAS_SIZE)?;
        surface.set_shadow(Shadow::none());
        Ok(())
    }

    fn draw_boundary<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.set_stroke_color(self.colors.outline);
        surface.set_font(&self.font);
        surface.set_line_width(BORDER_LINE_WIDTH);
        surface.set_text_align(TextAlign::Center, TextBaseline::Middle);

        surface.begin_path();
        surface.set_fill_color(self.colors.background);
        surface.arc(self.layout.center(), self.layout.board_radius(), 0.0, TAU);
        surface.fill()?;
        surface.stroke()
    }

    fn draw_segment<S: Surface>(&self, surface: &mut S, segment: &Segment) -> Result<(), S::Error> {
        surface.set_fill_color(self.colors.label);
        surface.fill_text(
            &segment.label.to_string(),
            self.layout.label_position(segment),
        )?;

        let multiplier = self.colors.multiplier[segment.alt];
        let single = self.colors.segment[segment.alt];

        // Each ring is a full sector to the center; painting outer to inner leaves only
        // the band between consecutive radii visible.
        let rings = [
            (self.layout.double_radius(), multiplier),
            (self.layout.double_inner_radius(), single),
            (self.layout.triple_radius(), multiplier),
            (self.layout.triple_inner_radius(), single),
        ];
        for (radius, color) in rings {
            self.fill_sector(surface, segment, radius, color)?;
        }
        Ok(())
    }

    fn fill_sector<S: Surface>(
        &self,
        surface: &mut S,
        segment: &Segment,
        radius: f64,
        color: Srgba<f64>,
    ) -> Result<(), S::Error> {
        let center = self.layout.center();
        surface.begin_path();
        surface.set_fill_color(color);
        surface.arc(center, radius, segment.start_angle, segment.end_angle);
        surface.line_to(center);
        surface.fill()
    }

    fn draw_bullseye<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        self.fill_disc(
            surface,
            self.layout.outer_bullseye_radius(),
            self.colors.outer_bullseye,
        )?;
        self.fill_disc(
            surface,
            self.layout.inner_bullseye_radius(),
            self.colors.inner_bullseye,
        )
    }

    fn fill_disc<S: Surface>(
        &self,
        surface: &mut S,
        radius: f64,
        color: Srgba<f64>,
    ) -> Result<(), S::Error> {
        surface.begin_path();
        surface.set_fill_color(color);
        surface.arc(self.layout.center(), radius, 0.0, TAU);
        surface.fill()
    }

    /// Spokes and ring outlines, stroked as a single path under a drop shadow.
    fn draw_wire<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let center = self.layout.center();
        let (offset_x, offset_y) = WIRE_SHADOW_OFFSET;
        surface.set_shadow(Shadow {
            color: self.colors.shadow,
            blur: WIRE_SHADOW_BLUR,
            offset_x,
            offset_y,
        });

        surface.begin_path();

        for i in 0..self.layout.numbers().len() {
            let angle = self.layout.ray_angle(i);
            surface.move_to(center.polar(angle, self.layout.double_radius()));
            surface.line_to(center.polar(angle, self.layout.outer_bullseye_radius()));
        }

        let circles = [
            self.layout.double_radius(),
            self.layout.double_inner_radius(),
            self.layout.triple_radius(),
            self.layout.triple_inner_radius(),
            self.layout.outer_bullseye_radius(),
            self.layout.inner_bullseye_radius(),
        ];
        for radius in circles {
            // start each circle on its own subpath
            surface.move_to(center.polar(0.0, radius));
            surface.arc(center, radius, 0.0, TAU);
        }

        surface.stroke()
    }
}
