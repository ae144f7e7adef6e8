use super::*;

fn approx(a: DVec3, b: DVec3) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn axis_parse_accepts_both_cases() {
    assert_eq!(Axis::parse("x").unwrap(), Axis::X);
    assert_eq!(Axis::parse("Y").unwrap(), Axis::Y);
    assert_eq!(Axis::parse(" z ").unwrap(), Axis::Z);
    assert!(Axis::parse("w").is_err());
}

#[test]
fn compose_applies_elementary_first() {
    let mut m = make_translate(10.0, 0.0, 0.0);
    compose_into(&mut m, &make_scale(2.0, 2.0, 2.0));
    let p = transform_point(&m, DVec3::new(1.0, 1.0, 1.0));
    assert!(approx(p, DVec3::new(12.0, 2.0, 2.0)));
}

#[test]
fn rotate_z_quarter_turn_maps_x_to_y() {
    let m = make_rotation(Axis::Z, std::f64::consts::FRAC_PI_2);
    let p = transform_point(&m, DVec3::new(1.0, 0.0, 0.0));
    assert!(approx(p, DVec3::new(0.0, 1.0, 0.0)));
}

#[test]
fn rotate_y_quarter_turn_maps_z_to_x() {
    let m = make_rotation(Axis::Y, std::f64::consts::FRAC_PI_2);
    let p = transform_point(&m, DVec3::new(0.0, 0.0, 1.0));
    assert!(approx(p, DVec3::new(1.0, 0.0, 0.0)));
}

#[test]
fn identity_is_neutral() {
    let p = DVec3::new(3.0, -4.0, 5.0);
    assert!(approx(transform_point(&identity(), p), p));
}
