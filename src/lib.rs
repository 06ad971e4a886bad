//! weightbox lays out children along a single axis by weight and decorates each child with a
//! rounded outline.
//!
//! # Pipeline overview
//!
//! 1. **Measure**: the host resolves the container size; each attached child measures itself
//!    under the container constraints, with exact sizes loosened to upper bounds.
//! 2. **Layout**: [`BoxLayout`] computes one rectangle per child in two passes (footprint and
//!    uniform shrink, then placement).
//! 3. **Decorate**: [`compile_decorations`] turns the rectangles into a [`DecorationPlan`] of
//!    rounded-rectangle strokes, which any [`DrawSurface`] can replay ([`CpuSurface`] rasterizes
//!    with `vello_cpu`).
//!
//! Hosts integrate through [`LayoutHost`]; standalone scenes can be described as a JSON
//! [`BoxDocument`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: a pass depends only on its inputs and the memoized weight sum.
//! - **Layout never fails**: degenerate input degrades (zero extents scale by 1, detached
//!   children are skipped); errors only come from parsing, validation, and rendering.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod render;

pub use foundation::core::{Point, Rect, Rgba8, RoundedRect, Size};
pub use foundation::error::{WeightboxError, WeightboxResult};
pub use layout::document::{BoxDocument, ChildNode, DocumentLayout, PlacedChild};
pub use layout::engine::{BoxLayout, LayoutChild, LayoutOutcome, LayoutReport};
pub use layout::host::LayoutHost;
pub use layout::measure::{MeasureMode, MeasureSpec};
pub use layout::model::{
    ChildSpec, DECOR_STROKE_DP, DEFAULT_BACKGROUND, LayoutConfig, Margins, Orientation, Padding,
    SizeMode,
};
pub use render::cpu::{CpuSurface, FrameRGBA};
pub use render::plan::{
    DecorationPass, DecorationPlan, RoundRectStroke, StrokeCap, StrokeStyle, compile_decorations,
};
pub use render::surface::{DrawSurface, execute_plan, render};
