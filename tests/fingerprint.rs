use fxp_kernel::math::{self, DEG_90};
use fxp_kernel::{
    FixedQuaternion, FixedScalar, FixedVector2, FixedVector3, FxpError, WireFormat,
};

/// Hasher that only ever sees the canonical raw bytes of a value.
struct Fingerprint {
    hasher: blake3::Hasher,
}

impl Fingerprint {
    fn new() -> Self {
        Self { hasher: blake3::Hasher::new() }
    }

    fn absorb<T: WireFormat>(&mut self, value: &T) {
        let mut buf = [0u8; 32];
        let len = value.write_wire(&mut buf).expect("32 bytes fits every value type");
        self.hasher.update(&buf[..len]);
    }

    fn finish(self) -> [u8; 32] {
        *self.hasher.finalize().as_bytes()
    }
}

/// Reference digest of `scenario_fingerprint`. Any change to a rounding
/// rule, the sine table or the wire layout moves it; update it only together
/// with a deliberate change to the arithmetic.
const SCENARIO_DIGEST: &str = "046023a6bf06c48fd8a61b6ecc3e324266a1041b5e6a39f45df96b4b4d1a8a8e";

/// A fixed battery touching every operation family; a peer that disagrees on
/// any single rounding step produces a different digest.
fn scenario_fingerprint() -> [u8; 32] {
    let mut fp = Fingerprint::new();

    let a = FixedScalar::from_f64(10.5);
    let b = FixedScalar::from_f64(2.25);
    for value in [a + b, a - b, a * b, a / b, -a, a.abs(), b.sqrt().unwrap()] {
        fp.absorb(&value);
    }
    fp.absorb(&FixedScalar::MAX.saturating_add(FixedScalar::ONE));

    for angle in (-3600..=3600).step_by(37) {
        fp.absorb(&math::sin(angle));
        fp.absorb(&math::cos(angle));
        fp.absorb(&math::tan(angle));
    }
    for raw in (-1024..=1024).step_by(17) {
        fp.absorb(&FixedScalar::from_raw(math::acos01(FixedScalar::from_raw(raw)) as i64));
    }

    let mut walker = FixedVector2::from_int(-30, 12);
    let goal = FixedVector2::from_f32(4.25, -7.5);
    for step in 0..64 {
        walker = walker.move_towards(goal, FixedScalar::from_f64(0.75)).rotate(step);
        fp.absorb(&walker);
        fp.absorb(&walker.normalized());
    }

    let mut orientation = FixedQuaternion::IDENTITY;
    let mut heading = FixedVector3::FORWARD;
    for step in 0..64 {
        let spin = FixedQuaternion::euler(step * 7, step * 13, -step * 5);
        orientation = (orientation * spin).normalized();
        heading = (orientation * heading).normalized();
        fp.absorb(&orientation);
        fp.absorb(&heading);
        fp.absorb(&heading.cross(FixedVector3::UP));
        let t = FixedScalar::from_raw(step as i64 * 16);
        fp.absorb(&orientation.slerp(FixedQuaternion::IDENTITY, t));
    }

    fp.finish()
}

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

#[test]
fn fingerprint_matches_reference_digest() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("fxp_kernel=debug")
        .with_test_writer()
        .try_init();

    assert_eq!(to_hex(&scenario_fingerprint()), SCENARIO_DIGEST);
}

#[test]
fn fingerprint_tracks_raw_values_only() {
    // Equal raw values hash equally however they were produced.
    let mut direct = Fingerprint::new();
    direct.absorb(&FixedScalar::from_raw(3 * 1024));

    let mut computed = Fingerprint::new();
    computed.absorb(&(FixedScalar::from_int(9) / FixedScalar::from_int(3)));

    let mut via_json = Fingerprint::new();
    let json = serde_json::to_string(&FixedScalar::from(3)).unwrap();
    via_json.absorb(&serde_json::from_str::<FixedScalar>(&json).unwrap());

    let expected = direct.finish();
    assert_eq!(computed.finish(), expected);
    assert_eq!(via_json.finish(), expected);
}

#[test]
fn public_api_reports_errors() {
    assert_eq!(
        FixedScalar::ONE.checked_div(FixedScalar::ZERO),
        Err(FxpError::DivideByZero)
    );
    assert!(matches!(
        FixedScalar::NEG_ONE.sqrt(),
        Err(FxpError::InvalidArgument(_))
    ));
    assert_eq!(
        FixedQuaternion::read_wire(&[0u8; 31]),
        Err(FxpError::BufferTooShort { expected: 32, found: 31 })
    );
    assert_eq!(
        FixedQuaternion::angle_axis(DEG_90, FixedVector3::UP) * FixedVector3::RIGHT,
        FixedVector3::BACK
    );
}
