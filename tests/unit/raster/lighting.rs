use super::*;

#[test]
fn surface_facing_away_from_light_gets_ambient_only() {
    let lighting = Lighting::default();
    let white = Material::uniform(0.2, 0.5, 0.5);
    let c = lighting.shade(DVec3::new(0.0, 0.0, -1.0), &white);
    assert_eq!(c, Rgb8::new(10, 10, 10));
}

#[test]
fn head_on_light_adds_diffuse_and_specular() {
    let lighting = Lighting {
        light: PointLight {
            direction: DVec3::new(0.0, 0.0, 1.0),
            color: [255.0, 255.0, 255.0],
        },
        ..Lighting::default()
    };
    let m = Material::uniform(0.0, 0.25, 0.25);
    assert_eq!(
        lighting.shade(DVec3::new(0.0, 0.0, 10.0), &m),
        Rgb8::new(128, 128, 128)
    );
}

#[test]
fn channels_are_shaded_independently_and_clamped() {
    let lighting = Lighting::default();
    let mut m = Material::uniform(0.0, 0.0, 0.0);
    m.red.ambient = 10.0;
    let c = lighting.shade(DVec3::new(0.0, 0.0, 1.0), &m);
    assert_eq!(c, Rgb8::new(255, 0, 0));
}
