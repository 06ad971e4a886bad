use crate::{
    foundation::core::{Rect, RoundedRect, Rgba8, Size},
    foundation::error::{WeightboxError, WeightboxResult},
    render::plan::{StrokeCap, StrokeStyle},
    render::surface::DrawSurface,
};

/// Flattening tolerance used when converting rounded corners to path segments.
const PATH_TOLERANCE: f64 = 0.1;

#[derive(Clone, Debug)]
/// A rendered RGBA8 image.
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 pixels.
    pub data: Vec<u8>,
    /// Whether color channels are premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as `[r, g, b, a]`, if in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(idx..idx + 4)
            .and_then(|px| px.try_into().ok())
    }
}

/// CPU rasterizing [`DrawSurface`] backed by `vello_cpu`.
///
/// Strokes are always anti-aliased. Elliptical corners are not supported: unequal radii
/// collapse to the smaller one.
pub struct CpuSurface {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuSurface {
    /// Allocate a transparent surface.
    pub fn new(width: u32, height: u32) -> WeightboxResult<Self> {
        if width == 0 || height == 0 {
            return Err(WeightboxError::render(format!(
                "surface must be at least 1x1, got {width}x{height}"
            )));
        }
        let width: u16 = width
            .try_into()
            .map_err(|_| WeightboxError::render("surface width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| WeightboxError::render("surface height exceeds u16"))?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Self { width, height, ctx })
    }

    /// Allocate a surface covering `size`, rounded up to whole pixels.
    pub fn for_size(size: Size) -> WeightboxResult<Self> {
        if !size.width.is_finite() || !size.height.is_finite() {
            return Err(WeightboxError::render("surface size must be finite"));
        }
        Self::new(
            size.width.max(0.0).ceil() as u32,
            size.height.max(0.0).ceil() as u32,
        )
    }

    /// Fill the whole surface with `color`.
    pub fn clear(&mut self, color: Rgba8) {
        self.ctx.set_paint(to_cpu_color(color));
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Rasterize everything drawn so far.
    pub fn finish(mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

impl DrawSurface for CpuSurface {
    fn stroke_round_rect(
        &mut self,
        bounds: Rect,
        radius_x: f64,
        radius_y: f64,
        style: &StrokeStyle,
    ) -> WeightboxResult<()> {
        if !style.width.is_finite() || style.width <= 0.0 {
            return Err(WeightboxError::render(format!(
                "stroke width must be finite and > 0, got {}",
                style.width
            )));
        }
        let radius = radius_x.min(radius_y).max(0.0);
        let path = bezpath_to_cpu(&kurbo::Shape::to_path(
            &RoundedRect::from_rect(bounds, radius),
            PATH_TOLERANCE,
        ));

        let cap = match style.cap {
            StrokeCap::Square => vello_cpu::kurbo::Cap::Square,
            StrokeCap::Butt => vello_cpu::kurbo::Cap::Butt,
            StrokeCap::Round => vello_cpu::kurbo::Cap::Round,
        };
        self.ctx
            .set_stroke(vello_cpu::kurbo::Stroke::new(style.width).with_caps(cap));
        self.ctx.set_paint(to_cpu_color(style.color));
        self.ctx.stroke_path(&path);
        Ok(())
    }
}

fn to_cpu_color(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
