use crate::foundation::core::{Rect, Rgba8, Size};
use crate::foundation::error::{WeightboxError, WeightboxResult};

/// Baseline width (in density-independent pixels) of the decorative stroke drawn around every
/// child when the container has rounded corners.
pub const DECOR_STROKE_DP: f64 = 10.0;

/// Fill color of the decorative stroke when the container has no background of its own.
pub const DEFAULT_BACKGROUND: Rgba8 = Rgba8::WHITE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Axis along which children are stacked.
pub enum Orientation {
    /// Children stacked left to right; the main axis is horizontal.
    #[default]
    Row,
    /// Children stacked top to bottom; the main axis is vertical.
    Column,
}

impl Orientation {
    /// Extent of `size` along the main axis.
    pub fn main(self, size: Size) -> f64 {
        match self {
            Self::Row => size.width,
            Self::Column => size.height,
        }
    }

    /// Extent of `size` along the cross axis.
    pub fn cross(self, size: Size) -> f64 {
        match self {
            Self::Row => size.height,
            Self::Column => size.width,
        }
    }

    /// Build a rectangle from main-axis and cross-axis spans.
    pub fn rect(self, main0: f64, main1: f64, cross0: f64, cross1: f64) -> Rect {
        match self {
            Self::Row => Rect::new(main0, cross0, main1, cross1),
            Self::Column => Rect::new(cross0, main0, cross1, main1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Size request of a child along one axis.
pub enum SizeMode {
    /// Explicit size in pixels.
    Fixed(f64),
    /// The child's own measured (natural) size.
    Wrap,
    /// Match the container's extent on this axis.
    Fill,
}

impl SizeMode {
    /// Resolve against the child's natural size and the container extent on the same axis.
    pub fn resolve(self, natural: f64, container: f64) -> f64 {
        match self {
            Self::Fixed(v) => v,
            Self::Wrap => natural,
            Self::Fill => container,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Child margins in pixels.
///
/// `start`/`end` are the main-axis margins of a row container and fall back to
/// `left`/`right` when unset (left-to-right layout direction).
pub struct Margins {
    /// Top margin.
    #[serde(default)]
    pub top: f64,
    /// Bottom margin.
    #[serde(default)]
    pub bottom: f64,
    /// Left margin.
    #[serde(default)]
    pub left: f64,
    /// Right margin.
    #[serde(default)]
    pub right: f64,
    /// Start margin; overrides `left` on the main axis of a row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// End margin; overrides `right` on the main axis of a row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
}

impl Margins {
    /// Same margin on every side.
    pub fn uniform(v: f64) -> Self {
        Self {
            top: v,
            bottom: v,
            left: v,
            right: v,
            start: None,
            end: None,
        }
    }

    /// Margin before the child along the main axis.
    pub fn main_leading(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Row => self.start.unwrap_or(self.left),
            Orientation::Column => self.top,
        }
    }

    /// Margin after the child along the main axis.
    pub fn main_trailing(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Row => self.end.unwrap_or(self.right),
            Orientation::Column => self.bottom,
        }
    }

    /// Margin before the child along the cross axis.
    pub fn cross_leading(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Row => self.top,
            Orientation::Column => self.left,
        }
    }

    /// Margin after the child along the cross axis.
    pub fn cross_trailing(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Row => self.bottom,
            Orientation::Column => self.right,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Child padding in pixels.
pub struct Padding {
    /// Top padding.
    #[serde(default)]
    pub top: f64,
    /// Bottom padding.
    #[serde(default)]
    pub bottom: f64,
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
}

impl Padding {
    /// Total padding along the main axis.
    pub fn main_sum(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Row => self.left + self.right,
            Orientation::Column => self.top + self.bottom,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Layout request of a single child.
pub struct ChildSpec {
    /// Horizontal size request.
    pub width: SizeMode,
    /// Vertical size request.
    pub height: SizeMode,
    /// Relative main-axis share; `0` counts as `1` when the weight sum is inferred.
    #[serde(default)]
    pub weight: f64,
    /// Outer margins.
    #[serde(default)]
    pub margins: Margins,
    /// Inner padding contributed by the child.
    #[serde(default)]
    pub padding: Padding,
}

impl ChildSpec {
    /// Layout params for a child attached without explicit ones.
    ///
    /// Rows wrap on both axes; columns fill horizontally and wrap vertically.
    pub fn default_for(orientation: Orientation) -> Self {
        let width = match orientation {
            Orientation::Row => SizeMode::Wrap,
            Orientation::Column => SizeMode::Fill,
        };
        Self {
            width,
            height: SizeMode::Wrap,
            weight: 0.0,
            margins: Margins::default(),
            padding: Padding::default(),
        }
    }

    /// Size request along the main axis.
    pub fn main_mode(&self, orientation: Orientation) -> SizeMode {
        match orientation {
            Orientation::Row => self.width,
            Orientation::Column => self.height,
        }
    }

    /// Size request along the cross axis.
    pub fn cross_mode(&self, orientation: Orientation) -> SizeMode {
        match orientation {
            Orientation::Row => self.height,
            Orientation::Column => self.width,
        }
    }

    pub(crate) fn validate(&self, ctx: &str) -> WeightboxResult<()> {
        for (axis, mode) in [("width", self.width), ("height", self.height)] {
            if let SizeMode::Fixed(v) = mode {
                check_len(v, &format!("{ctx}.{axis}"))?;
            }
        }
        check_len(self.weight, &format!("{ctx}.weight"))?;
        let m = &self.margins;
        for (name, v) in [
            ("top", m.top),
            ("bottom", m.bottom),
            ("left", m.left),
            ("right", m.right),
        ] {
            check_len(v, &format!("{ctx}.margins.{name}"))?;
        }
        for (name, v) in [("start", m.start), ("end", m.end)] {
            if let Some(v) = v {
                check_len(v, &format!("{ctx}.margins.{name}"))?;
            }
        }
        let p = &self.padding;
        for (name, v) in [
            ("top", p.top),
            ("bottom", p.bottom),
            ("left", p.left),
            ("right", p.right),
        ] {
            check_len(v, &format!("{ctx}.padding.{name}"))?;
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Immutable container style, supplied by the configuration source before layout runs.
pub struct LayoutConfig {
    /// Stacking axis.
    #[serde(default)]
    pub orientation: Orientation,
    /// Explicit weight sum; `0` infers it from the children.
    #[serde(default)]
    pub weight_sum: f64,
    /// Corner radius shared by both decoration passes.
    #[serde(default)]
    pub corner_radius: f64,
    /// Width of the explicit border stroke; `0` disables the border pass.
    #[serde(default)]
    pub border_width: f64,
    /// Color of the explicit border stroke.
    #[serde(default)]
    pub border_color: Rgba8,
    /// Container background, reused as the decorative stroke color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Rgba8>,
    /// Display density multiplier applied to density-independent constants.
    #[serde(default = "default_density")]
    pub density: f64,
}

fn default_density() -> f64 {
    1.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            weight_sum: 0.0,
            corner_radius: 0.0,
            border_width: 0.0,
            border_color: Rgba8::WHITE,
            background: None,
            density: default_density(),
        }
    }
}

impl LayoutConfig {
    /// Width of the decorative stroke in pixels.
    pub fn decor_stroke_width(&self) -> f64 {
        DECOR_STROKE_DP * self.density.max(0.0)
    }

    /// Main-axis space every child reserves on each side for the decorations.
    ///
    /// Rounded corners always reserve at least the decorative stroke.
    pub fn border_inset(&self) -> f64 {
        let border = self.border_width.max(0.0);
        if self.corner_radius > 0.0 {
            self.decor_stroke_width().max(border)
        } else {
            border
        }
    }

    /// Color of the decorative stroke.
    pub fn decor_color(&self) -> Rgba8 {
        self.background.unwrap_or(DEFAULT_BACKGROUND)
    }

    /// Validate numeric ranges.
    pub fn validate(&self) -> WeightboxResult<()> {
        check_len(self.weight_sum, "container.weight_sum")?;
        check_len(self.corner_radius, "container.corner_radius")?;
        check_len(self.border_width, "container.border_width")?;
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(WeightboxError::validation(
                "container.density must be finite and > 0",
            ));
        }
        Ok(())
    }
}

fn check_len(v: f64, field: &str) -> WeightboxResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(WeightboxError::validation(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
