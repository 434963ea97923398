use math::{Vector, Vector2};
use crate::{TiltDelta, TiltEstimate};

/// Tracks tilt by integrating angular rate over time. Smooth from tick to
/// tick, but every tick's small error stays in the sum forever, so the
/// running values drift.
///
#[derive(Debug)]
pub struct GyroIntegrator
{
    /// Running tilt according only to the gyroscope.
    pub tilt: TiltEstimate,
}

impl GyroIntegrator
{
    #[inline]
    pub fn new() -> Self {
        GyroIntegrator { tilt: TiltEstimate::zero() }
    }

    /// Fold one angular rate reading into the running tilt and return this
    /// tick's increment.
    ///
    /// `dt` is the fixed interval between ticks in seconds.
    ///
    pub fn step(&mut self, gyro: &Vector, dt: f32) -> TiltDelta {
        // -x rotation results in tilt toward +y, +y rotation results in tilt
        // toward +x. The z (yaw) rate never moves the device off vertical and
        // is left out.
        let vector = Vector2::new(gyro.y, -gyro.x) * dt;
        let angle = vector.magnitude();

        self.tilt.vector += vector;
        // The angle accumulates increment magnitudes, so it keeps growing
        // even while the vector components cancel each other out.
        self.tilt.angle += angle;

        TiltDelta { vector, angle }
    }
}
