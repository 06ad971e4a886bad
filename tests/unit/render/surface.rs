use super::*;
use crate::foundation::core::Rgba8;
use crate::foundation::error::WeightboxError;

#[derive(Default)]
struct MockSurface {
    calls: Vec<(Rect, f64, f64, StrokeStyle)>,
    fail_after: Option<usize>,
}

impl DrawSurface for MockSurface {
    fn stroke_round_rect(
        &mut self,
        bounds: Rect,
        radius_x: f64,
        radius_y: f64,
        style: &StrokeStyle,
    ) -> WeightboxResult<()> {
        if self.fail_after == Some(self.calls.len()) {
            return Err(WeightboxError::render("mock surface full"));
        }
        self.calls.push((bounds, radius_x, radius_y, *style));
        Ok(())
    }
}

#[test]
fn render_draws_corner_then_border_per_child() {
    let config = LayoutConfig {
        corner_radius: 6.0,
        border_width: 2.0,
        border_color: Rgba8::BLACK,
        ..LayoutConfig::default()
    };
    let rects = [Rect::new(0.0, 0.0, 20.0, 20.0), Rect::new(20.0, 0.0, 40.0, 20.0)];
    let mut surface = MockSurface::default();
    render(&mut surface, &config, &rects).unwrap();

    assert_eq!(surface.calls.len(), 4);
    let widths: Vec<f64> = surface.calls.iter().map(|c| c.3.width).collect();
    assert_eq!(widths, vec![10.0, 2.0, 10.0, 2.0]);
    assert_eq!(surface.calls[1].0, Rect::new(-1.0, -1.0, 21.0, 21.0));
    assert!(surface.calls.iter().all(|c| c.1 == 6.0 && c.2 == 6.0));
}

#[test]
fn render_leaves_rects_untouched() {
    let config = LayoutConfig {
        border_width: 3.0,
        ..LayoutConfig::default()
    };
    let rects = vec![Rect::new(1.0, 2.0, 3.0, 4.0)];
    let before = rects.clone();
    render(&mut MockSurface::default(), &config, &rects).unwrap();
    assert_eq!(rects, before);
}

#[test]
fn execute_plan_stops_at_first_error() {
    let config = LayoutConfig {
        border_width: 1.0,
        ..LayoutConfig::default()
    };
    let plan = compile_decorations(&config, &[Rect::new(0.0, 0.0, 1.0, 1.0); 3]);
    let mut surface = MockSurface {
        fail_after: Some(1),
        ..MockSurface::default()
    };
    let err = execute_plan(&mut surface, &plan).unwrap_err();
    assert!(err.to_string().contains("mock surface full"));
    assert_eq!(surface.calls.len(), 1);
}
