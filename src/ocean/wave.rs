//! Closed-form wave field: surface height as a pure function of horizontal position and time.
//!
//! The same parameters drive the CPU sampler here and the generated vertex shader in
//! [`crate::ocean::shader`], so the rendered surface and anything floating on it agree.

use crate::{
    foundation::core::Vec2,
    foundation::error::{SwellError, SwellResult},
};

const UNIT_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Trig {
    Sin,
    Cos,
}

impl Trig {
    pub fn eval(self, phase: f64) -> f64 {
        match self {
            Self::Sin => phase.sin(),
            Self::Cos => phase.cos(),
        }
    }

    pub fn derivative(self, phase: f64) -> f64 {
        match self {
            Self::Sin => phase.cos(),
            Self::Cos => -phase.sin(),
        }
    }

    pub(crate) fn glsl_name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
        }
    }
}

fn one() -> f64 {
    1.0
}

/// One sinusoid in the superposition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveBand {
    pub weight: f64,
    pub trig: Trig,
    /// Multiplies the field's `scale` for this band.
    #[serde(default = "one")]
    pub scale_mul: f64,
    /// Multiplies the field's `speed` for this band.
    #[serde(default = "one")]
    pub speed_mul: f64,
    /// Overrides the field's wind direction (unit vector).
    #[serde(default)]
    pub direction: Option<Vec2>,
}

impl WaveBand {
    pub fn new(trig: Trig, weight: f64) -> Self {
        Self {
            weight,
            trig,
            scale_mul: 1.0,
            speed_mul: 1.0,
            direction: None,
        }
    }

    pub fn scale_mul(mut self, scale_mul: f64) -> Self {
        self.scale_mul = scale_mul;
        self
    }

    pub fn speed_mul(mut self, speed_mul: f64) -> Self {
        self.speed_mul = speed_mul;
        self
    }

    pub fn direction(mut self, direction: Vec2) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// Parameters of the surface. `height` is bounded by `amplitude` because band weights sum to at most 1.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaveField {
    pub speed: f64,
    pub scale: f64,
    pub amplitude: f64,
    pub wind: Vec2, // unit vector in the xz plane
    pub bands: Vec<WaveBand>,
}

impl WaveField {
    /// Single sine travelling along x: `sin(x * scale + t * speed) * amplitude`.
    pub fn new(speed: f64, scale: f64, amplitude: f64) -> SwellResult<Self> {
        let field = Self {
            speed,
            scale,
            amplitude,
            wind: Vec2::new(1.0, 0.0),
            bands: vec![WaveBand::new(Trig::Sin, 1.0)],
        };
        field.validate()?;
        Ok(field)
    }

    pub fn with_wind(mut self, wind: Vec2) -> SwellResult<Self> {
        self.wind = unit(wind, "wind")?;
        Ok(self)
    }

    pub fn with_bands(mut self, bands: Vec<WaveBand>) -> SwellResult<Self> {
        self.bands = bands;
        self.normalized()
    }

    /// Two wind-aligned bands: a slow swell plus a faster cosine chop.
    pub fn diorama() -> Self {
        let wind = Vec2::new(1.0, 0.5);
        Self {
            speed: 1.0,
            scale: 0.15,
            amplitude: 0.8,
            wind: wind / wind.hypot(),
            bands: vec![
                WaveBand::new(Trig::Sin, 0.6),
                WaveBand::new(Trig::Cos, 0.3)
                    .scale_mul(0.4 / 0.15)
                    .speed_mul(2.5),
            ],
        }
    }

    /// Two crossed sines on a plane that faces up; the second runs against z.
    pub fn night_sea() -> Self {
        Self {
            speed: 1.0,
            scale: 1.0,
            amplitude: 1.0,
            wind: Vec2::new(1.0, 0.0),
            bands: vec![
                WaveBand::new(Trig::Sin, 0.5).scale_mul(2.0).speed_mul(0.5),
                WaveBand::new(Trig::Sin, 0.5)
                    .scale_mul(1.5)
                    .speed_mul(0.3)
                    .direction(Vec2::new(0.0, -1.0)),
            ],
        }
    }

    /// Normalize the wind and every band direction, then validate.
    pub fn normalized(mut self) -> SwellResult<Self> {
        self.wind = unit(self.wind, "wind")?;
        for (i, band) in self.bands.iter_mut().enumerate() {
            if let Some(dir) = band.direction {
                band.direction = Some(unit(dir, &format!("band {i} direction"))?);
            }
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> SwellResult<()> {
        for (name, v) in [
            ("speed", self.speed),
            ("scale", self.scale),
            ("amplitude", self.amplitude),
        ] {
            if !v.is_finite() {
                return Err(SwellError::validation(format!(
                    "wave field {name} must be finite"
                )));
            }
        }
        if self.scale <= 0.0 {
            return Err(SwellError::validation("wave field scale must be > 0"));
        }
        if self.amplitude < 0.0 {
            return Err(SwellError::validation("wave field amplitude must be >= 0"));
        }
        check_unit(self.wind, "wind")?;
        if self.bands.is_empty() {
            return Err(SwellError::validation("wave field needs at least one band"));
        }

        let mut weight_sum = 0.0;
        for (i, band) in self.bands.iter().enumerate() {
            if !(band.weight.is_finite() && band.scale_mul.is_finite() && band.speed_mul.is_finite())
            {
                return Err(SwellError::validation(format!(
                    "band {i} parameters must be finite"
                )));
            }
            if let Some(dir) = band.direction {
                check_unit(dir, &format!("band {i} direction"))?;
            }
            weight_sum += band.weight.abs();
        }
        if weight_sum > 1.0 + UNIT_TOLERANCE {
            return Err(SwellError::validation(format!(
                "band weights sum to {weight_sum}, must be <= 1 to stay within amplitude"
            )));
        }
        Ok(())
    }

    pub fn direction_of(&self, band: &WaveBand) -> Vec2 {
        band.direction.unwrap_or(self.wind)
    }

    fn phase(&self, band: &WaveBand, p: Vec2, t: f64) -> f64 {
        p.dot(self.direction_of(band)) * self.scale * band.scale_mul + t * self.speed * band.speed_mul
    }

    /// Surface height at `(x, z)` after `t` seconds.
    ///
    /// Non-finite input propagates to the output unchanged in kind; nothing is clamped.
    pub fn height(&self, x: f64, z: f64, t: f64) -> f64 {
        let p = Vec2::new(x, z);
        let sum: f64 = self
            .bands
            .iter()
            .map(|band| band.weight * band.trig.eval(self.phase(band, p, t)))
            .sum();
        sum * self.amplitude
    }

    /// Analytic `(∂h/∂x, ∂h/∂z)`.
    pub fn gradient(&self, x: f64, z: f64, t: f64) -> Vec2 {
        let p = Vec2::new(x, z);
        self.bands.iter().fold(Vec2::ZERO, |acc, band| {
            let k = band.weight * band.trig.derivative(self.phase(band, p, t)) * self.scale
                * band.scale_mul
                * self.amplitude;
            acc + self.direction_of(band) * k
        })
    }

    /// Upper bound on `|∂h/∂t|`.
    pub fn max_time_rate(&self) -> f64 {
        self.amplitude
            * self
                .bands
                .iter()
                .map(|band| (band.weight * self.speed * band.speed_mul).abs())
                .sum::<f64>()
    }
}

fn unit(v: Vec2, what: &str) -> SwellResult<Vec2> {
    let len = v.hypot();
    if !len.is_finite() || len == 0.0 {
        return Err(SwellError::validation(format!(
            "{what} must be a finite non-zero vector"
        )));
    }
    Ok(v / len)
}

fn check_unit(v: Vec2, what: &str) -> SwellResult<()> {
    let len = v.hypot();
    if !len.is_finite() || (len - 1.0).abs() > UNIT_TOLERANCE {
        return Err(SwellError::validation(format!(
            "{what} must be a unit vector, got length {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/ocean/wave.rs"]
mod tests;
