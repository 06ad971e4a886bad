use crate::{
    foundation::core::{Rect, Size},
    layout::engine::LayoutChild,
    layout::measure::MeasureSpec,
};

/// Capabilities the surrounding toolkit provides to [`crate::BoxLayout`].
///
/// Children are addressed by slot index. A slot may be empty (`child` returns `None`); empty
/// slots are skipped by both passes.
pub trait LayoutHost {
    /// Resolve the container's own outer size from its incoming constraints.
    fn measure_self(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Number of child slots.
    fn child_count(&self) -> usize;

    /// Layout request and last measured size of the child in `index`, if attached.
    fn child(&self, index: usize) -> Option<LayoutChild>;

    /// Let the child in `index` measure itself; returns its natural size.
    fn measure_child(&mut self, index: usize, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Assign the final container-local rectangle of the child in `index`.
    fn place_child(&mut self, index: usize, rect: Rect);
}
