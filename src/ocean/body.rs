use crate::{
    foundation::core::{Vec2, Vec3},
    foundation::error::{SwellError, SwellResult},
    foundation::math::{approach, decay_factor},
    ocean::wave::WaveField,
};

/// Instantaneous pose the body should take at one sample point.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BuoyancyTarget {
    pub elevation: f64,
    pub pitch: f64, // about x, positive when the surface falls toward +z
    pub roll: f64,  // about z, positive when the surface rises toward +x
}

/// Four-point finite-difference slope estimator.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct BuoyancyProbe {
    offset: f64,
}

impl BuoyancyProbe {
    pub fn new(offset: f64) -> SwellResult<Self> {
        if !offset.is_finite() || offset <= 0.0 {
            return Err(SwellError::validation("probe offset must be finite and > 0"));
        }
        Ok(Self { offset })
    }

    pub fn offset(self) -> f64 {
        self.offset
    }

    pub fn sample(self, field: &WaveField, at: Vec2, t: f64) -> BuoyancyTarget {
        let d = self.offset;
        let h = |x: f64, z: f64| field.height(x, z, t);

        let elevation = h(at.x, at.y);
        let front = h(at.x, at.y + d);
        let back = h(at.x, at.y - d);
        let right = h(at.x + d, at.y);
        let left = h(at.x - d, at.y);

        BuoyancyTarget {
            elevation,
            pitch: (back - front).atan2(2.0 * d),
            roll: (right - left).atan2(2.0 * d),
        }
    }
}

/// How fast the body's actual transform chases the sampled target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum Smoothing {
    /// Fixed blend per update; responsiveness depends on frame rate.
    PerFrame { factor: f64 },
    /// Exponential decay with time constant `tau_secs`; frame-rate independent.
    TimeConstant { tau_secs: f64 },
}

impl Smoothing {
    pub fn validate(self) -> SwellResult<()> {
        match self {
            Self::PerFrame { factor } => {
                if !(factor > 0.0 && factor <= 1.0) {
                    return Err(SwellError::validation(
                        "per-frame smoothing factor must be in (0, 1]",
                    ));
                }
            }
            Self::TimeConstant { tau_secs } => {
                if !(tau_secs.is_finite() && tau_secs > 0.0) {
                    return Err(SwellError::validation(
                        "smoothing time constant must be finite and > 0",
                    ));
                }
            }
        }
        Ok(())
    }

    /// Blend factor for an update covering `dt` seconds.
    pub fn factor(self, dt: f64) -> f64 {
        match self {
            Self::PerFrame { factor } => factor,
            Self::TimeConstant { tau_secs } => decay_factor(dt, tau_secs),
        }
    }
}

/// Position plus Euler rotation in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// An object riding the wave field (the raft).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FloatingBody {
    pub pose: Pose,
    /// Added to the sampled elevation; the water level plus any freeboard.
    pub rest_height: f64,
    pub probe: BuoyancyProbe,
    pub smoothing: Smoothing,
}

impl FloatingBody {
    pub fn new(
        pose: Pose,
        rest_height: f64,
        probe: BuoyancyProbe,
        smoothing: Smoothing,
    ) -> SwellResult<Self> {
        smoothing.validate()?;
        if !rest_height.is_finite() {
            return Err(SwellError::validation("rest height must be finite"));
        }
        Ok(Self {
            pose,
            rest_height,
            probe,
            smoothing,
        })
    }

    pub fn horizontal(&self) -> Vec2 {
        Vec2::new(self.pose.position.x, self.pose.position.z)
    }

    /// Sample the field under the body and take one smoothing step toward it.
    pub fn update(&mut self, field: &WaveField, t: f64, dt: f64) -> BuoyancyTarget {
        let target = self.probe.sample(field, self.horizontal(), t);
        self.apply(target, self.smoothing.factor(dt));
        target
    }

    /// One low-pass step toward `target`; vertical position, pitch and roll move independently.
    pub fn apply(&mut self, target: BuoyancyTarget, k: f64) {
        let pose = &mut self.pose;
        pose.position.y = approach(pose.position.y, target.elevation + self.rest_height, k);
        pose.pitch = approach(pose.pitch, target.pitch, k);
        pose.roll = approach(pose.roll, target.roll, k);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ocean/body.rs"]
mod tests;
