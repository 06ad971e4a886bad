use crate::{
    foundation::core::{Rect, Rgba8},
    foundation::math::non_negative,
    layout::model::LayoutConfig,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Line cap of a stroke.
pub enum StrokeCap {
    /// Square caps extending half the stroke width past the endpoints.
    #[default]
    Square,
    /// Flat caps ending at the endpoints.
    Butt,
    /// Round caps.
    Round,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Paint parameters of a stroke.
pub struct StrokeStyle {
    /// Stroke width in pixels.
    pub width: f64,
    /// Line cap.
    pub cap: StrokeCap,
    /// Stroke color.
    pub color: Rgba8,
    /// Whether edges are anti-aliased.
    pub anti_alias: bool,
}

impl StrokeStyle {
    /// Anti-aliased stroke with square caps.
    pub fn new(width: f64, color: Rgba8) -> Self {
        Self {
            width,
            cap: StrokeCap::Square,
            color,
            anti_alias: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Which decoration a stroke belongs to.
pub enum DecorationPass {
    /// Baseline stroke in the background color, drawn when corners are rounded.
    Corner,
    /// Explicit border stroke, drawn on top of the corner stroke.
    Border,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A rounded-rectangle outline to stroke.
pub struct RoundRectStroke {
    /// Decoration this stroke implements.
    pub pass: DecorationPass,
    /// Outline bounds; the stroke is centered on this outline.
    pub bounds: Rect,
    /// Horizontal corner radius.
    pub radius_x: f64,
    /// Vertical corner radius.
    pub radius_y: f64,
    /// Paint parameters.
    pub style: StrokeStyle,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Ordered strokes decorating every child of a container.
///
/// Strokes are listed child by child; for each child the corner stroke precedes the border
/// stroke so the border paints on top.
pub struct DecorationPlan {
    /// Strokes in paint order.
    pub strokes: Vec<RoundRectStroke>,
}

impl DecorationPlan {
    /// `true` if nothing would be drawn.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }
}

/// Build the decoration strokes for a set of placed child rectangles.
///
/// Each stroke's outline is the child rectangle grown by half the stroke width on every side,
/// so the stroke straddles the child's boundary. Rendering does not affect layout.
pub fn compile_decorations(config: &LayoutConfig, child_rects: &[Rect]) -> DecorationPlan {
    let radius = non_negative(config.corner_radius);
    let border_width = non_negative(config.border_width);
    let decor_width = config.decor_stroke_width();

    let mut strokes = Vec::new();
    for &rect in child_rects {
        if radius > 0.0 {
            strokes.push(outline(
                DecorationPass::Corner,
                rect,
                radius,
                StrokeStyle::new(decor_width, config.decor_color()),
            ));
        }
        if border_width > 0.0 {
            strokes.push(outline(
                DecorationPass::Border,
                rect,
                radius,
                StrokeStyle::new(border_width, config.border_color),
            ));
        }
    }
    tracing::debug!(
        children = child_rects.len(),
        strokes = strokes.len(),
        "compiled decorations"
    );
    DecorationPlan { strokes }
}

fn outline(pass: DecorationPass, rect: Rect, radius: f64, style: StrokeStyle) -> RoundRectStroke {
    let half = style.width / 2.0;
    RoundRectStroke {
        pass,
        bounds: rect.inflate(half, half),
        radius_x: radius,
        radius_y: radius,
        style,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
