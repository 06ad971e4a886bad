use crate::{
    foundation::core::Rect,
    foundation::error::WeightboxResult,
    layout::model::LayoutConfig,
    render::plan::{DecorationPlan, StrokeStyle, compile_decorations},
};

/// A 2D drawing target able to stroke rounded rectangles.
pub trait DrawSurface {
    /// Stroke the outline of `bounds` with the given corner radii.
    fn stroke_round_rect(
        &mut self,
        bounds: Rect,
        radius_x: f64,
        radius_y: f64,
        style: &StrokeStyle,
    ) -> WeightboxResult<()>;
}

/// Replay a compiled plan onto a surface, in order.
pub fn execute_plan<S: DrawSurface + ?Sized>(
    surface: &mut S,
    plan: &DecorationPlan,
) -> WeightboxResult<()> {
    for s in &plan.strokes {
        surface.stroke_round_rect(s.bounds, s.radius_x, s.radius_y, &s.style)?;
    }
    Ok(())
}

/// Draw the decorations of every child of a container.
#[tracing::instrument(skip(surface, config, child_rects), fields(children = child_rects.len()))]
pub fn render<S: DrawSurface + ?Sized>(
    surface: &mut S,
    config: &LayoutConfig,
    child_rects: &[Rect],
) -> WeightboxResult<()> {
    let plan = compile_decorations(config, child_rects);
    execute_plan(surface, &plan)
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
