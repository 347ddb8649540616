use super::*;
use crate::ocean::wave::{Trig, WaveBand};

#[test]
fn float_literals_always_have_a_point() {
    assert_eq!(glsl_float(1.0), "1.0");
    assert_eq!(glsl_float(-2.0), "-2.0");
    assert_eq!(glsl_float(0.15), "0.15");
    assert_eq!(glsl_float(1e-7), "1e-7");
}

#[test]
fn height_function_lists_every_band() {
    let src = height_function(&WaveField::diorama());
    assert!(src.starts_with("float swellHeight(vec2 p, float t) {"));
    assert!(src.contains("h += 0.6 * sin(dot(p, u_windDirection) * 0.15 + t * 1.0);"));
    assert!(src.contains("cos(dot(p, u_windDirection)"));
    assert!(src.contains("+ t * 2.5);"));
    assert!(src.contains("return h * 0.8;"));
}

#[test]
fn band_direction_override_is_inlined() {
    let field = WaveField::new(1.0, 1.0, 1.0)
        .unwrap()
        .with_bands(vec![
            WaveBand::new(Trig::Sin, 1.0).direction(Vec2::new(0.0, -1.0)),
        ])
        .unwrap();
    let src = height_function(&field);
    assert!(src.contains("dot(p, vec2(0.0, -1.0))"));
}

#[test]
fn vertex_shader_declares_uniforms_and_displaces_top_face() {
    let src = vertex_shader(&WaveField::diorama());
    for needle in [
        "uniform float u_time;",
        "uniform vec2 u_windDirection;",
        "uniform vec3 u_boxSize;",
        "float swellHeight(vec2 p, float t)",
        "pos.y += waveHeight * isTop;",
        "void main() {",
    ] {
        assert!(src.contains(needle), "missing {needle}");
    }
}

#[test]
fn uniforms_carry_wind_and_time() {
    let field = WaveField::diorama();
    let mut u = WaterUniforms::new(&field, Vec3::new(60.0, 15.0, 60.0));
    assert_eq!(u.u_time, 0.0);
    assert_eq!(u.u_box_size, [60.0, 15.0, 60.0]);
    assert_eq!(
        u.u_wind_direction,
        [field.wind.x as f32, field.wind.y as f32]
    );
    u.set_time(2.5);
    assert_eq!(u.u_time, 2.5);
}
