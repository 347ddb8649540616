//! GPU side of the wave field.
//!
//! The vertex shader re-derives per-vertex height from the same band table the CPU sampler
//! uses; only the time uniform changes per frame.

use crate::{
    foundation::core::{Vec2, Vec3},
    ocean::wave::WaveField,
};

/// Per-frame uniform block for the water material, in the precision the GPU receives.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct WaterUniforms {
    pub u_time: f32,
    pub u_wind_direction: [f32; 2],
    pub u_box_size: [f32; 3],
}

impl WaterUniforms {
    pub fn new(field: &WaveField, box_size: Vec3) -> Self {
        Self {
            u_time: 0.0,
            u_wind_direction: vec2_f32(field.wind),
            u_box_size: [box_size.x as f32, box_size.y as f32, box_size.z as f32],
        }
    }

    /// Upload the presented time for this frame.
    pub fn set_time(&mut self, t: f64) {
        self.u_time = t as f32;
    }
}

fn vec2_f32(v: Vec2) -> [f32; 2] {
    [v.x as f32, v.y as f32]
}

/// GLSL float literal that always carries a decimal point or exponent.
fn glsl_float(v: f64) -> String {
    let s = format!("{v:?}");
    if s.contains(['.', 'e', 'E']) || !v.is_finite() {
        s
    } else {
        format!("{s}.0")
    }
}

const HEADER: &str = "\
uniform float u_time;
uniform vec3 u_boxSize;
uniform vec2 u_windDirection;

varying vec2 vUv;
varying float vIsTop;
varying vec3 vPos;
varying float vWaveHeight;
";

const MAIN: &str = "
void main() {
    vUv = uv;
    vec3 pos = position;
    vPos = pos;

    float topY = u_boxSize.y / 2.0;
    float isTop = step(topY - 0.1, pos.y);
    vIsTop = isTop;

    float waveHeight = swellHeight(pos.xz, u_time);
    pos.y += waveHeight * isTop;

    vWaveHeight = waveHeight;
    gl_Position = projectionMatrix * modelViewMatrix * vec4(pos, 1.0);
}
";

/// The height function alone, for embedding into other shaders.
pub fn height_function(field: &WaveField) -> String {
    let mut out = String::from("float swellHeight(vec2 p, float t) {\n    float h = 0.0;\n");
    for band in &field.bands {
        let dir = match band.direction {
            None => "u_windDirection".to_string(),
            Some(d) => format!("vec2({}, {})", glsl_float(d.x), glsl_float(d.y)),
        };
        out.push_str(&format!(
            "    h += {} * {}(dot(p, {dir}) * {} + t * {});\n",
            glsl_float(band.weight),
            band.trig.glsl_name(),
            glsl_float(field.scale * band.scale_mul),
            glsl_float(field.speed * band.speed_mul),
        ));
    }
    out.push_str(&format!(
        "    return h * {};\n}}\n",
        glsl_float(field.amplitude)
    ));
    out
}

/// Vertex shader for a water box whose top face follows the field.
pub fn vertex_shader(field: &WaveField) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    out.push_str(&height_function(field));
    out.push_str(MAIN);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/ocean/shader.rs"]
mod tests;
