const MODE_SHIFT: u32 = 30;
const SIZE_MASK: u32 = (1 << MODE_SHIFT) - 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a measurement constraint bounds the measured extent.
pub enum MeasureMode {
    /// No bound; the child may take any size.
    Unspecified,
    /// The extent is exactly the given size.
    Exactly,
    /// The extent may be at most the given size.
    AtMost,
}

impl MeasureMode {
    fn bits(self) -> u32 {
        match self {
            Self::Unspecified => 0,
            Self::Exactly => 1,
            Self::AtMost => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A measurement constraint along one axis.
pub struct MeasureSpec {
    /// Constraint mode.
    pub mode: MeasureMode,
    /// Constraint size in pixels (ignored for [`MeasureMode::Unspecified`]).
    pub size: f64,
}

impl MeasureSpec {
    /// Exactly `size`.
    pub fn exactly(size: f64) -> Self {
        Self {
            mode: MeasureMode::Exactly,
            size,
        }
    }

    /// At most `size`.
    pub fn at_most(size: f64) -> Self {
        Self {
            mode: MeasureMode::AtMost,
            size,
        }
    }

    /// Unbounded.
    pub fn unspecified() -> Self {
        Self {
            mode: MeasureMode::Unspecified,
            size: 0.0,
        }
    }

    /// Constraint forwarded to children when the container is measured with `self`.
    ///
    /// An exact container size becomes an upper bound for the children so they can never claim
    /// more than the container could grant, while wrap-sized children still size themselves.
    pub fn for_child(self) -> Self {
        match self.mode {
            MeasureMode::Exactly => Self::at_most(self.size),
            MeasureMode::AtMost | MeasureMode::Unspecified => self,
        }
    }

    /// Resolve a desired extent against this constraint.
    pub fn resolve(self, desired: f64) -> f64 {
        match self.mode {
            MeasureMode::Exactly => self.size,
            MeasureMode::AtMost => desired.min(self.size),
            MeasureMode::Unspecified => desired,
        }
    }

    /// Pack into a 32-bit word: mode in the top two bits, whole-pixel size in the low 30.
    pub fn pack(self) -> u32 {
        let size = (self.size.max(0.0) as u32) & SIZE_MASK;
        (self.mode.bits() << MODE_SHIFT) | size
    }

    /// Inverse of [`MeasureSpec::pack`].
    ///
    /// # Panics
    ///
    /// Panics when the mode bits are `0b11`. No host may produce such a word; receiving one
    /// means the host broke the measurement contract.
    pub fn unpack(raw: u32) -> Self {
        let size = f64::from(raw & SIZE_MASK);
        let mode = match raw >> MODE_SHIFT {
            0 => MeasureMode::Unspecified,
            1 => MeasureMode::Exactly,
            2 => MeasureMode::AtMost,
            bits => panic!("unreachable measure mode bits {bits:#04b} in spec {raw:#010x}"),
        };
        Self { mode, size }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/measure.rs"]
mod tests;
