use crate::*;

#[test]
fn test_magnitude_unit_axes() {
    assert!(libm::fabsf(Vector::new(1.0, 0.0, 0.0).magnitude() - 1.0) < 1e-6);
    assert!(libm::fabsf(Vector::new(0.0, 1.0, 0.0).magnitude() - 1.0) < 1e-6);
    assert!(libm::fabsf(Vector::new(0.0, 0.0, 1.0).magnitude() - 1.0) < 1e-6);
}

#[test]
fn test_magnitude_pythagorean() {
    let v = Vector { x: 3.0, y: 4.0, z: 0.0 };
    assert!(libm::fabsf(v.magnitude() - 5.0) < 1e-6);
}

#[test]
fn test_normalize_scaled_vector() {
    let v = Vector::new(0.0, 0.0, 1.0) * 9.81;
    let result = v.try_normalize().unwrap();
    let expected = Vector { x: 0.0, y: 0.0, z: 1.0 };
    assert!(result.approx_eq(&expected, 1e-6));
}

#[test]
fn test_normalize_unit_vector_unchanged() {
    // Normalizing a vector that is already unit length should give the same
    // vector back.
    let v = Vector { x: 0.6, y: 0.0, z: 0.8 };
    let result = v.try_normalize().unwrap();
    assert!(result.approx_eq(&v, 1e-6));
}

#[test]
fn test_normalize_zero_vector_fails() {
    assert!(Vector::zero().try_normalize().is_none());
}

#[test]
fn test_xy_projection_drops_z() {
    let v = Vector { x: 0.3, y: -0.4, z: 0.86 };
    let projected = v.xy();
    assert!(projected.approx_eq(&Vector2::new(0.3, -0.4), 1e-6));
}

#[test]
fn test_add_and_sub_roundtrip() {
    let gravity = Vector::new(0.0, 0.0, 1.0);
    let noise = Vector::new(0.01, -0.02, 0.0);
    let sum = gravity + noise;
    let back = sum - noise;
    assert!(back.approx_eq(&gravity, 1e-6));
}

#[test]
fn test_add_assign_accumulates() {
    let mut v = Vector::zero();
    v += Vector::new(0.5, 0.25, 0.0);
    v += Vector::new(0.5, 0.25, 1.0);
    assert!(v.approx_eq(&Vector::new(1.0, 0.5, 1.0), 1e-6));
}

#[test]
fn test_div_scales_down() {
    let v = Vector::new(2.0, 4.0, 6.0) / 2.0;
    assert!(v.approx_eq(&Vector::new(1.0, 2.0, 3.0), 1e-6));
}

#[test]
fn test_from_array() {
    let v = Vector::from([1.0, 2.0, 3.0]);
    assert!(v.approx_eq(&Vector::new(1.0, 2.0, 3.0), 1e-6));
}
