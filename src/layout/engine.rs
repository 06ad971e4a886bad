use crate::{
    foundation::core::{Rect, Size},
    foundation::math::{non_negative, ratio},
    layout::host::LayoutHost,
    layout::measure::MeasureSpec,
    layout::model::{ChildSpec, LayoutConfig, Orientation, SizeMode},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A child as seen by one layout pass: its request plus its measured natural size.
pub struct LayoutChild {
    /// Layout request.
    pub spec: ChildSpec,
    /// Natural size reported by the measurement pass.
    pub natural: Size,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Numbers derived during a layout pass.
pub struct LayoutReport {
    /// Weight sum used for shares (explicit or inferred).
    pub weight_sum: f64,
    /// Main-axis reservation each child makes on both sides for decorations.
    pub border_inset: f64,
    /// Container extent along the main axis.
    pub main_extent: f64,
    /// Total pre-scale main-axis footprint.
    pub footprint: f64,
    /// Uniform shrink factor in `(0, 1]`.
    pub scale: f64,
}

#[derive(Clone, Debug, PartialEq)]
/// Rectangles and report produced by [`BoxLayout::compute`].
pub struct LayoutOutcome {
    /// One rectangle per input child, in input order, container-local.
    pub rects: Vec<Rect>,
    /// Pass diagnostics.
    pub report: LayoutReport,
}

/// Single-axis weighted box layout.
///
/// The engine owns the container style and the inferred weight sum. Inference happens once;
/// hosts must call [`BoxLayout::invalidate`] after adding or removing children or changing their
/// weights.
#[derive(Clone, Debug)]
pub struct BoxLayout {
    config: LayoutConfig,
    inferred_weight_sum: Option<f64>,
}

impl BoxLayout {
    /// Create an engine for a container style.
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            inferred_weight_sum: None,
        }
    }

    /// Container style.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Forget the inferred weight sum so the next pass recomputes it.
    pub fn invalidate(&mut self) {
        self.inferred_weight_sum = None;
    }

    /// Weight sum the next pass will use, if already known.
    pub fn resolved_weight_sum(&self) -> Option<f64> {
        let explicit = non_negative(self.config.weight_sum);
        if explicit > 0.0 {
            Some(explicit)
        } else {
            self.inferred_weight_sum
        }
    }

    fn weight_sum(&mut self, children: &[LayoutChild]) -> f64 {
        if let Some(ws) = self.resolved_weight_sum() {
            return ws;
        }
        let ws = children
            .iter()
            .map(|c| match non_negative(c.spec.weight) {
                w if w == 0.0 => 1.0,
                w => w,
            })
            .sum::<f64>();
        // An empty container has nothing to memoize.
        if ws > 0.0 {
            self.inferred_weight_sum = Some(ws);
        }
        ws
    }

    /// Compute child rectangles for a container of the given (already resolved) size.
    pub fn compute_layout(&mut self, container: Size, children: &[LayoutChild]) -> Vec<Rect> {
        self.compute(container, children).rects
    }

    /// Compute only the pass diagnostics.
    pub fn compute_report(&mut self, container: Size, children: &[LayoutChild]) -> LayoutReport {
        self.compute(container, children).report
    }

    /// Run both passes: footprint/scale, then placement.
    #[tracing::instrument(skip(self, children), fields(children = children.len()))]
    pub fn compute(&mut self, container: Size, children: &[LayoutChild]) -> LayoutOutcome {
        let orientation = self.config.orientation;
        let weight_sum = self.weight_sum(children);
        let inset = self.config.border_inset();
        let main = non_negative(orientation.main(container));
        let cross = non_negative(orientation.cross(container));
        let cross_inset = match orientation {
            Orientation::Row => inset,
            Orientation::Column => 0.0,
        };

        let footprint = children
            .iter()
            .map(|c| {
                main_extent(c, orientation, container, weight_sum)
                    + non_negative(c.spec.margins.main_leading(orientation))
                    + non_negative(c.spec.margins.main_trailing(orientation))
                    + 2.0 * inset
            })
            .sum::<f64>();

        let scale = if main <= 0.0 || footprint <= main {
            1.0
        } else {
            main / footprint
        };

        // Shares are recomputed here rather than carried over from the footprint pass.
        let mut rects = Vec::with_capacity(children.len());
        let mut cursor = 0.0;
        for c in children {
            let extent = main_extent(c, orientation, container, weight_sum) * scale;
            let leading =
                (non_negative(c.spec.margins.main_leading(orientation)) + inset) * scale;
            let trailing =
                (non_negative(c.spec.margins.main_trailing(orientation)) + inset) * scale;

            cursor += leading;
            let span = extent - leading;

            let cross_extent = non_negative(c.spec.cross_mode(orientation).resolve(
                orientation.cross(c.natural),
                cross,
            ));
            // Far cross edge is measured from the container edge, not from `cross0`. Rows keep
            // the decoration inset on the near edge as well.
            let cross0 = non_negative(c.spec.margins.cross_leading(orientation)) + cross_inset;
            let cross1 = cross_extent + non_negative(c.spec.margins.cross_trailing(orientation));

            rects.push(orientation.rect(
                cursor,
                cursor + span.max(0.0),
                cross0,
                cross1.max(cross0),
            ));
            cursor += span + trailing;
        }

        let report = LayoutReport {
            weight_sum,
            border_inset: inset,
            main_extent: main,
            footprint,
            scale,
        };
        tracing::debug!(
            weight_sum,
            inset,
            footprint,
            scale,
            end = cursor,
            "box layout pass"
        );
        LayoutOutcome { rects, report }
    }

    /// Measurement pass: resolve the container's own size, then measure every attached child
    /// with the container constraints loosened via [`MeasureSpec::for_child`].
    #[tracing::instrument(skip(self, host))]
    pub fn measure<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Size {
        let own = host.measure_self(width, height);
        let (child_w, child_h) = (width.for_child(), height.for_child());
        for index in 0..host.child_count() {
            if host.child(index).is_none() {
                continue;
            }
            host.measure_child(index, child_w, child_h);
        }
        own
    }

    /// Layout pass: compute rectangles for every attached child and hand them to the host.
    #[tracing::instrument(skip(self, host))]
    pub fn layout<H: LayoutHost + ?Sized>(
        &mut self,
        host: &mut H,
        container: Size,
    ) -> LayoutReport {
        let (indices, children): (Vec<usize>, Vec<LayoutChild>) = (0..host.child_count())
            .filter_map(|index| host.child(index).map(|c| (index, c)))
            .unzip();
        let outcome = self.compute(container, &children);
        for (index, rect) in indices.into_iter().zip(outcome.rects) {
            host.place_child(index, rect);
        }
        outcome.report
    }
}

/// Pre-scale main-axis extent of one child.
fn main_extent(
    child: &LayoutChild,
    orientation: Orientation,
    container: Size,
    weight_sum: f64,
) -> f64 {
    let spec = &child.spec;
    let main = non_negative(orientation.main(container));
    let mode = spec.main_mode(orientation);
    let weight = non_negative(spec.weight);

    if weight == 0.0 {
        return non_negative(mode.resolve(orientation.main(child.natural), main));
    }

    let padding = non_negative(spec.padding.main_sum(orientation));
    let share = match mode {
        SizeMode::Fill | SizeMode::Wrap => ratio(weight, weight_sum) + ratio(padding, main),
        // COMPATIBILITY QUIRK: a weighted FIXED child ignores both its own main-axis size and
        // the weight sum. Its share is the fixed cross-axis size plus main-axis padding,
        // normalized by the container's cross extent, times the raw weight. Existing layouts
        // depend on these numbers; do not "fix" this. Rows deliberately use the same cross-axis
        // normalization as columns; older row layouts normalized their own width by the container
        // width instead, so row numbers differ from those.
        SizeMode::Fixed(_) => {
            let cross_fixed = match spec.cross_mode(orientation) {
                SizeMode::Fixed(v) => non_negative(v),
                SizeMode::Wrap | SizeMode::Fill => 0.0,
            };
            ratio(padding + cross_fixed, orientation.cross(container)) * weight
        }
    };
    share * main
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
