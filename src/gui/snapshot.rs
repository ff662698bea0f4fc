use super::board::{BoardRenderer, CANVAS_SIZE};
use super::canvas::CairoSurface;
use crate::frame::FrameContext;
use cairo::{Context, Format, ImageSurface};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Cairo(#[from] cairo::Error),
    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Renders one frame off-screen onto a canvas-sized ARGB image.
pub fn render_image(
    renderer: &BoardRenderer,
    frame: &FrameContext,
) -> Result<ImageSurface, cairo::Error> {
    let size = CANVAS_SIZE as i32;
    let surface = ImageSurface::create(Format::ARgb32, size, size)?;
    {
        let cr = Context::new(&surface)?;
        renderer.render(&mut CairoSurface::new(&cr), frame)?;
    }
    surface.flush();
    Ok(surface)
}

pub fn write_png(renderer: &BoardRenderer, path: &Path) -> Result<(), SnapshotError> {
    let surface = render_image(renderer, &FrameContext::default())?;
    let mut file = fs_err::File::create(path)?;
    surface.write_to_png(&mut file)?;
    log::info!("Wrote board snapshot to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::gui::board::Point;
    use palette::Srgba;

    fn snapshot() -> (BoardRenderer, ImageSurface) {
        let renderer = BoardRenderer::from_config(&Config::embedded().unwrap()).unwrap();
        let image = render_image(&renderer, &FrameContext::default()).unwrap();
        (renderer, image)
    }

    /// Un-premultiplied (r, g, b, a) at the pixel containing `p`.
    fn pixel(image: &mut ImageSurface, p: Point) -> (u8, u8, u8, u8) {
        let stride = image.stride() as usize;
        let data = image.data().unwrap();
        let offset = p.y as usize * stride + p.x as usize * 4;
        let argb = u32::from_ne_bytes(data[offset..offset + 4].try_into().unwrap());
        let channel = |shift: u32| ((argb >> shift) & 0xff) as u8;
        (channel(16), channel(8), channel(0), channel(24))
    }

    fn assert_color(actual: (u8, u8, u8, u8), expected: Srgba<f64>, what: &str) {
        let e = expected.into_format::<u8, u8>();
        let close = |a: u8, b: u8| a.abs_diff(b) <= 1;
        assert!(
            close(actual.0, e.red)
                && close(actual.1, e.green)
                && close(actual.2, e.blue)
                && close(actual.3, e.alpha),
            "{what}: got {actual:?}, expected {:?}",
            (e.red, e.green, e.blue, e.alpha)
        );
    }

    #[test]
    fn test_bands_are_solid_after_overpainting() {
        let (renderer, mut image) = snapshot();
        let layout = renderer.layout().clone();
        let colors = *renderer.colors();
        let center = layout.center();

        for segment in layout.segments() {
            let at = |r: f64| center.polar(segment.label_angle, r);
            let alt = segment.alt;
            let i = segment.index;

            let samples = [
                (172.5, colors.multiplier[alt], "double band"),
                (137.0, colors.segment[alt], "outer single"),
                (102.5, colors.multiplier[alt], "triple band"),
                (57.0, colors.segment[alt], "inner single"),
            ];
            for (radius, expected, what) in samples {
                assert_color(pixel(&mut image, at(radius)), expected, &format!("{what} {i}"));
            }

            let rim = center.polar(layout.ray_angle(i), 220.0);
            assert_color(pixel(&mut image, rim), colors.background, &format!("rim {i}"));
        }
    }

    #[test]
    fn test_bullseye_and_outside() {
        let (renderer, mut image) = snapshot();
        let colors = *renderer.colors();
        let center = renderer.layout().center();

        assert_color(pixel(&mut image, center), colors.inner_bullseye, "inner bullseye");
        assert_color(
            // (255, 240): clear of both bullseye outlines and their shadows
            pixel(&mut image, center.polar(0.0, 15.0)),
            colors.outer_bullseye,
            "outer bullseye",
        );
        assert_eq!(pixel(&mut image, Point::new(590.0, 590.0)).3, 0);
    }

    #[test]
    fn test_snapshot_is_repeatable() {
        let (renderer, mut first) = snapshot();
        let mut second = render_image(&renderer, &FrameContext::new(1000.0, 16.0)).unwrap();
        assert_eq!(&*first.data().unwrap(), &*second.data().unwrap());
    }
}
