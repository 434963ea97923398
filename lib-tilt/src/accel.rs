use math::Vector;
use crate::{TiltError, TiltEstimate};

/// Computes the device tilt from a single accelerometer reading based on the
/// direction of gravity. Exact when gravity is the only acceleration the
/// device experiences; any other motion shows up as noise, which is why the
/// session runs this next to the gyro integrator instead of on its own.
///
/// Keeps no state across calls.
///
pub fn tilt_from_accel(accel: &Vector) -> Result<TiltEstimate, TiltError>
{
    let unit = accel.try_normalize().ok_or(TiltError::DegenerateSample)?;
    let vector = unit.xy();

    // The horizontal component of a unit vector equals the sine of its angle
    // off vertical. Clamp to asin's domain, rounding can push the magnitude
    // just past 1.
    let sine = vector.magnitude();
    let sine = if sine > 1.0 { 1.0 } else { sine };

    Ok(TiltEstimate {
        vector,
        angle: libm::asinf(sine),
    })
}
