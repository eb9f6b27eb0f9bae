// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::config::SCALE;
use crate::math::DEG_90;
use crate::tests::Pcg32;
use crate::types::quat::FixedQuaternion;
use crate::types::scalar::FixedScalar;
use crate::types::vector3::FixedVector3;

fn quat(x: i64, y: i64, z: i64, w: i64) -> FixedQuaternion {
    FixedQuaternion::new(
        FixedScalar::from_raw(x),
        FixedScalar::from_raw(y),
        FixedScalar::from_raw(z),
        FixedScalar::from_raw(w),
    )
}

fn assert_quat_near(actual: FixedQuaternion, expected: FixedQuaternion, tolerance: i64) {
    let pairs = [
        (actual.x, expected.x),
        (actual.y, expected.y),
        (actual.z, expected.z),
        (actual.w, expected.w),
    ];
    for (a, e) in pairs {
        assert!(
            (a.raw() - e.raw()).abs() <= tolerance,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }
}

fn assert_vec_near(actual: FixedVector3, expected: FixedVector3, tolerance: i64) {
    for (a, e) in [(actual.x, expected.x), (actual.y, expected.y), (actual.z, expected.z)] {
        assert!(
            (a.raw() - e.raw()).abs() <= tolerance,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }
}

#[test]
fn test_quat_identity() {
    assert_eq!(FixedQuaternion::default(), FixedQuaternion::IDENTITY);
    assert_eq!(FixedQuaternion::IDENTITY.w, FixedScalar::ONE);

    let samples = [
        FixedQuaternion::angle_axis(300, FixedVector3::UP),
        FixedQuaternion::euler(150, 420, -75),
        quat(-300, 17, 999, 64),
    ];
    for q in samples {
        assert_eq!(q * FixedQuaternion::IDENTITY, q);
        assert_eq!(FixedQuaternion::IDENTITY * q, q);
    }
}

#[test]
fn test_quat_angle_axis() {
    let q = FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP);
    assert_eq!(q, quat(0, 724, 0, 724));

    // The axis is normalized first.
    let scaled_axis = FixedVector3::from_int(0, 4, 0);
    assert_eq!(FixedQuaternion::angle_axis(DEG_90, scaled_axis), q);

    assert_eq!(
        FixedQuaternion::angle_axis(0, FixedVector3::RIGHT),
        FixedQuaternion::IDENTITY
    );
}

#[test]
fn test_quat_rotate_vector() {
    let yaw = FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP);
    assert_eq!(yaw * FixedVector3::RIGHT, FixedVector3::BACK);
    assert_eq!(yaw * FixedVector3::UP, FixedVector3::UP);

    let pitch = FixedQuaternion::angle_axis(DEG_90, FixedVector3::RIGHT);
    assert_eq!(pitch * FixedVector3::FORWARD, FixedVector3::DOWN);

    let v = FixedVector3::from_int(3, -4, 5);
    assert_eq!(FixedQuaternion::IDENTITY * v, v);
}

#[test]
fn test_quat_rotation_preserves_length() {
    let q = FixedQuaternion::euler(333, 1210, -470);
    let v = FixedVector3::from_int(2, -3, 6);
    let rotated = q * v;
    let error = (rotated.sqr_magnitude() - v.sqr_magnitude()).abs();
    // 49 units squared, a fraction of a percent drift.
    assert!(error.raw() <= 49 * SCALE / 100, "rotated={:?}", rotated);
}

#[test]
fn test_quat_composition_matches_sequential_rotation() {
    let a = FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP);
    let b = FixedQuaternion::angle_axis(DEG_90, FixedVector3::RIGHT);
    let v = FixedVector3::FORWARD;
    assert_vec_near((a * b) * v, a * (b * v), 4);
}

#[test]
fn test_quat_conjugate_inverts() {
    let q = FixedQuaternion::euler(250, -600, 900).normalized();
    assert_quat_near(q * q.conjugate(), FixedQuaternion::IDENTITY, 4);
}

#[test]
fn test_quat_euler_order() {
    let yaw_only = FixedQuaternion::euler(0, DEG_90, 0);
    assert_eq!(yaw_only, FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP));

    // Pitch is applied before yaw: FORWARD pitches down, and yaw about Y
    // leaves DOWN where it is.
    let q = FixedQuaternion::euler(DEG_90, DEG_90, 0);
    assert_eq!(q * FixedVector3::FORWARD, FixedVector3::DOWN);

    let expected = FixedQuaternion::angle_axis(400, FixedVector3::UP)
        * FixedQuaternion::angle_axis(-200, FixedVector3::RIGHT)
        * FixedQuaternion::angle_axis(100, FixedVector3::FORWARD);
    assert_eq!(FixedQuaternion::euler(-200, 400, 100), expected);
}

#[test]
fn test_quat_normalized() {
    let q = FixedQuaternion::new(
        FixedScalar::from_int(1),
        FixedScalar::from_int(2),
        FixedScalar::from_int(3),
        FixedScalar::from_int(4),
    );
    let n = q.normalized();
    assert!((n.sqr_magnitude().raw() - SCALE).abs() <= 4, "n={:?}", n);

    assert_eq!(quat(0, 0, 0, 0).normalized(), FixedQuaternion::IDENTITY);
    assert_eq!(FixedQuaternion::IDENTITY.normalized(), FixedQuaternion::IDENTITY);
}

#[test]
fn test_quat_normalized_sub_unit() {
    // Magnitudes well below one raw unit squared still reach unit length.
    assert_eq!(quat(40, 0, 0, 0).normalized(), quat(SCALE, 0, 0, 0));
    assert_eq!(quat(20, 0, 0, 0).normalized(), quat(SCALE, 0, 0, 0));
    assert_eq!(quat(0, 0, 0, 1).normalized(), FixedQuaternion::IDENTITY);

    let n = quat(20, 30, 0, 10).normalized();
    assert_eq!(n, quat(554, 830, 0, 277));
    assert!((n.sqr_magnitude().raw() - SCALE).abs() <= 32, "n={:?}", n);
}

#[test]
fn test_quat_normalized_random_small() {
    let mut rng = Pcg32::new(7);
    for _ in 0..300 {
        let q = quat(rng.next_in(256), rng.next_in(256), rng.next_in(256), rng.next_in(256));
        let raw_sqr: i64 = [q.x, q.y, q.z, q.w].iter().map(|c| c.raw() * c.raw()).sum();
        if raw_sqr < 128 * 128 {
            continue;
        }
        let error = (q.normalized().sqr_magnitude().raw() - SCALE).abs();
        assert!(error <= 16, "q={:?} error={}", q, error);
    }
}

#[test]
fn test_quat_normalized_extreme_components() {
    let q = FixedQuaternion::new(
        FixedScalar::MAX,
        FixedScalar::MAX,
        FixedScalar::MIN,
        FixedScalar::ZERO,
    );
    let n = q.normalized();
    assert_eq!(n, quat(591, 591, -591, 0));
    assert!((n.sqr_magnitude().raw() - SCALE).abs() <= 4);
}

#[test]
fn test_quat_slerp_endpoints() {
    let a = FixedQuaternion::angle_axis(200, FixedVector3::UP);
    let b = FixedQuaternion::euler(450, -300, 800);
    assert_eq!(a.slerp(b, FixedScalar::ZERO), a);
    assert_eq!(a.slerp(b, FixedScalar::ONE), b);
    assert_eq!(a.slerp(b, FixedScalar::NEG_ONE), a);
    assert_eq!(a.slerp(b, FixedScalar::TWO), b);
}

#[test]
fn test_quat_slerp_midpoint() {
    let a = FixedQuaternion::IDENTITY;
    let b = FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP);
    let mid = a.slerp(b, FixedScalar::HALF);
    assert_quat_near(mid, FixedQuaternion::angle_axis(450, FixedVector3::UP), 2);
}

#[test]
fn test_quat_slerp_shortest_path() {
    let a = FixedQuaternion::IDENTITY;
    let b = FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP);
    let t = FixedScalar::from_f64(0.25);
    assert_quat_near(a.slerp(-b, t), a.slerp(b, t), 2);
}

#[test]
fn test_quat_slerp_nearly_parallel() {
    let a = FixedQuaternion::IDENTITY;
    let b = FixedQuaternion::angle_axis(10, FixedVector3::UP);
    let mid = a.slerp(b, FixedScalar::HALF);
    assert!((mid.sqr_magnitude().raw() - SCALE).abs() <= 4);
    assert!(mid.y >= a.y && mid.y <= b.y, "mid={:?}", mid);
}

#[test]
fn test_quat_slerp_threshold_uses_lerp() {
    // cos(1.8 degrees) is raw 1023, exactly the fallback threshold.
    let a = FixedQuaternion::IDENTITY;
    let b = FixedQuaternion::angle_axis(36, FixedVector3::UP);
    assert_eq!(a.dot(b).raw(), 1023);

    let t = FixedScalar::from_f64(0.25);
    let expected = a.lerp(b, t).normalized();
    assert_eq!(expected, quat(0, 8, 0, SCALE));
    assert_eq!(a.slerp(b, t), expected);
}

#[test]
fn test_quat_lerp() {
    let a = quat(0, 0, 0, 1024);
    let b = quat(1024, 0, 0, 0);
    assert_eq!(a.lerp(b, FixedScalar::HALF), quat(512, 0, 0, 512));
    assert_eq!(a.lerp(b, FixedScalar::ZERO), a);
    assert_eq!(a.lerp(b, FixedScalar::ONE), b);
}

#[test]
fn test_quat_dot() {
    let a = FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP);
    assert_eq!(FixedQuaternion::IDENTITY.dot(a), FixedScalar::from_raw(724));
    assert_eq!(FixedQuaternion::IDENTITY.sqr_magnitude(), FixedScalar::ONE);
}
