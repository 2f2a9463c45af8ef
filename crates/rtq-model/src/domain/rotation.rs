use serde::{Deserialize, Serialize};

/// Rotation correction in degrees applied to the imported source armature
/// before retargeting.
///
/// Source skeletons are frequently exported with a different up-axis than
/// the target environment expects; the correction is baked into the source
/// rig once, before the retarget operators run. `(0, 0, 0)` means no
/// correction is applied at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationEuler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl RotationEuler {
    /// No correction.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Build a correction from degrees.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `true` if applying this correction would be a no-op.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// The three components converted to radians, in `(x, y, z)` order.
    pub fn to_radians(&self) -> (f64, f64, f64) {
        (
            self.x.to_radians(),
            self.y.to_radians(),
            self.z.to_radians(),
        )
    }
}

impl Default for RotationEuler {
    fn default() -> Self {
        Self::ZERO
    }
}
