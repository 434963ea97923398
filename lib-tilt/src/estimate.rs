use math::Vector2;

/// One tilt reading: the projection of the device's "up" direction onto the
/// horizontal plane, plus the angle off vertical in radians. The projection
/// magnitude stays within [0, 1] for estimates taken straight from the
/// accelerometer; integrated estimates can drift past that.
///
#[derive(Debug, Clone, Copy)]
pub struct TiltEstimate
{
    pub vector: Vector2,
    pub angle: f32,
}

impl TiltEstimate
{
    /// Flat device, no tilt. This is the state every estimator starts from.
    ///
    pub const fn zero() -> Self {
        TiltEstimate { vector: Vector2::zero(), angle: 0.0 }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &TiltEstimate, tol: f32) -> bool {
        self.vector.approx_eq(&other.vector, tol)
            && libm::fabsf(self.angle - other.angle) <= tol
    }
}

/// One tick's worth of tilt change according to the gyroscope. A separate
/// type from [`TiltEstimate`] so the fuser can only ever be handed the
/// per-tick increment, never the integrator's running totals.
///
#[derive(Debug, Clone, Copy)]
pub struct TiltDelta
{
    pub vector: Vector2,
    pub angle: f32,
}

impl TiltDelta
{
    pub const fn zero() -> Self {
        TiltDelta { vector: Vector2::zero(), angle: 0.0 }
    }
}

/// The three estimates published for one processed tick, in the order they
/// were computed.
///
#[derive(Debug, Clone, Copy)]
pub struct TiltReport
{
    /// Straight from the accelerometer: noisy but drift free.
    pub accel: TiltEstimate,

    /// Integrated angular rate: smooth but drifts over time.
    pub gyro: TiltEstimate,

    /// Complementary filter blend of the two.
    pub fused: TiltEstimate,
}
