use super::board::{Point, Shadow, Surface, TextAlign, TextBaseline};
use super::theme::{FontSlant, FontSpec, FontWeight};
use cairo::Context;
use palette::Srgba;

/// Adapts a cairo context to canvas-style drawing: separate fill and stroke colors,
/// paths that outlive `fill`/`stroke`, aligned text and stroke shadows.
pub struct CairoSurface<'a> {
    cr: &'a Context,
    fill: Srgba<f64>,
    stroke: Srgba<f64>,
    align: TextAlign,
    baseline: TextBaseline,
    shadow: Shadow,
}

impl<'a> CairoSurface<'a> {
    pub fn new(cr: &'a Context) -> Self {
        Self {
            cr,
            fill: Srgba::new(0.0, 0.0, 0.0, 1.0),
            stroke: Srgba::new(0.0, 0.0, 0.0, 1.0),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            shadow: Shadow::none(),
        }
    }

    fn set_source(&self, color: Srgba<f64>) {
        let (r, g, b, a) = color.into_components();
        self.cr.set_source_rgba(r, g, b, a);
    }

    /// Runs `f` on an empty path, then puts the caller's path back.
    fn with_detached_path(
        &self,
        f: impl FnOnce(&Context) -> Result<(), cairo::Error>,
    ) -> Result<(), cairo::Error> {
        let path = self.cr.copy_path()?;
        self.cr.new_path();
        let result = f(self.cr);
        self.cr.new_path();
        self.cr.append_path(&path);
        result
    }

    /// Cairo has no shadows; the blur is approximated by a widened stroke of the path
    /// shifted by the shadow offset.
    fn stroke_shadow(&self) -> Result<(), cairo::Error> {
        let path = self.cr.copy_path()?;
        let width = self.cr.line_width();
        let shadow = self.shadow;

        self.with_detached_path(|cr| {
            cr.save()?;
            cr.translate(shadow.offset_x, shadow.offset_y);
            cr.append_path(&path);
            self.set_source(shadow.color);
            cr.set_line_width(width + shadow.blur);
            let result = cr.stroke();
            cr.restore()?;
            result
        })
    }

    fn text_origin(&self, text: &str, at: Point) -> Result<Point, cairo::Error> {
        let ext = self.cr.text_extents(text)?;
        let x = match self.align {
            TextAlign::Start => at.x,
            TextAlign::Center => at.x - ext.x_advance() / 2.0,
            TextAlign::End => at.x - ext.x_advance(),
        };
        let y = match self.baseline {
            TextBaseline::Alphabetic => at.y,
            TextBaseline::Middle => at.y - (ext.y_bearing() + ext.height() / 2.0),
            TextBaseline::Top => at.y - ext.y_bearing(),
            TextBaseline::Bottom => at.y - (ext.y_bearing() + ext.height()),
        };
        Ok(Point::new(x, y))
    }
}

impl Surface for CairoSurface<'_> {
    type Error = cairo::Error;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<(), Self::Error> {
        self.with_detached_path(|cr| {
            cr.save()?;
            cr.set_operator(cairo::Operator::Clear);
            cr.rectangle(x, y, width, height);
            let result = cr.fill();
            cr.restore()?;
            result
        })
    }

    fn set_fill_color(&mut self, color: Srgba<f64>) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Srgba<f64>) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.cr.set_line_width(width);
    }

    fn set_text_align(&mut self, align: TextAlign, baseline: TextBaseline) {
        self.align = align;
        self.baseline = baseline;
    }

    fn set_font(&mut self, font: &FontSpec) {
        let slant = match font.slant {
            FontSlant::Normal => cairo::FontSlant::Normal,
            FontSlant::Italic => cairo::FontSlant::Italic,
            FontSlant::Oblique => cairo::FontSlant::Oblique,
        };
        let weight = match font.weight {
            FontWeight::Normal => cairo::FontWeight::Normal,
            FontWeight::Bold => cairo::FontWeight::Bold,
        };
        self.cr.select_font_face(&font.family, slant, weight);
        self.cr.set_font_size(font.size);
    }

    fn set_shadow(&mut self, shadow: Shadow) {
        self.shadow = shadow;
    }

    fn begin_path(&mut self) {
        self.cr.new_path();
    }

    fn move_to(&mut self, point: Point) {
        self.cr.move_to(point.x, point.y);
    }

    fn line_to(&mut self, point: Point) {
        self.cr.line_to(point.x, point.y);
    }

    fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        self.cr.arc(center.x, center.y, radius, start_angle, end_angle);
    }

    fn fill(&mut self) -> Result<(), Self::Error> {
        self.set_source(self.fill);
        self.cr.fill_preserve()
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        if self.shadow.is_visible() {
            self.stroke_shadow()?;
        }
        self.set_source(self.stroke);
        self.cr.stroke_preserve()
    }

    fn fill_text(&mut self, text: &str, at: Point) -> Result<(), Self::Error> {
        let origin = self.text_origin(text, at)?;
        let color = self.fill;
        self.with_detached_path(|cr| {
            cr.move_to(origin.x, origin.y);
            self.set_source(color);
            cr.show_text(text)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_align_uses_advance_width() {
        let image = cairo::ImageSurface::create(cairo::Format::ARgb32, 100, 100).unwrap();
        let cr = Context::new(&image).unwrap();
        let mut surface = CairoSurface::new(&cr);
        surface.set_font(&"bold 22px arial".parse().unwrap());
        surface.set_text_align(TextAlign::Center, TextBaseline::Alphabetic);

        let at = Point::new(50.0, 50.0);
        let origin = surface.text_origin("20", at).unwrap();
        let advance = cr.text_extents("20").unwrap().x_advance();
        assert_eq!(origin, Point::new(50.0 - advance / 2.0, 50.0));
    }
}
