use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Fps, Rgb, Vec2, Vec3},
    foundation::error::{SwellError, SwellResult},
    ocean::body::{BuoyancyProbe, Smoothing},
    ocean::wave::WaveField,
    scene::clock::StopMotion,
    scene::context::{Camera, Lighting},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaterConfig {
    pub field: WaveField,
    /// World y of the undisturbed surface.
    pub level: f64,
    /// Extent of the water volume; only its top face is displaced.
    pub box_size: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RaftConfig {
    /// Horizontal position (x, z).
    pub start: Vec2,
    pub yaw: f64,
    /// Height of the raft origin above the local surface.
    pub freeboard: f64,
    pub probe_offset: f64,
    pub smoothing: Smoothing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind")]
pub enum Timestep {
    /// One simulation step per host frame, with the host's delta.
    Variable,
    /// Host deltas are accumulated and consumed in whole `1/fps` steps.
    Fixed { fps: Fps },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub water: WaterConfig,
    pub raft: RaftConfig,
    pub camera: Camera,
    pub lighting: Lighting,
    pub background: Rgb,
    pub star_opacity: f64,
    pub stop_motion: Option<StopMotion>,
    pub timestep: Timestep,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::diorama()
    }
}

impl SceneConfig {
    /// Moonlit raft in a glass water tank, presented at stop-motion rate.
    pub fn diorama() -> Self {
        Self {
            water: WaterConfig {
                field: WaveField::diorama(),
                level: -1.5,
                box_size: Vec3::new(60.0, 15.0, 60.0),
            },
            raft: RaftConfig {
                start: Vec2::ZERO,
                yaw: 0.0,
                freeboard: 0.1,
                probe_offset: 3.0,
                smoothing: Smoothing::PerFrame { factor: 0.05 },
            },
            camera: Camera {
                position: Vec3::new(15.0, 10.0, 20.0),
                target: Vec3::ZERO,
                fov_deg: 60.0,
            },
            lighting: Lighting {
                ambient_intensity: 0.6,
                sun_color: Rgb::from_hex(0x8a7a6a),
                sun_position: Vec3::new(50.0, 100.0, -200.0),
                sun_intensity: 2.0,
            },
            background: Rgb::from_hex(0x0a0812),
            star_opacity: 1.0,
            stop_motion: Some(StopMotion::default()),
            timestep: Timestep::Variable,
        }
    }

    /// Open night sea under a rising earth, simulated at a fixed 60 Hz.
    pub fn night_sea() -> Self {
        Self {
            water: WaterConfig {
                field: WaveField::night_sea(),
                level: -1.0,
                box_size: Vec3::new(200.0, 0.0, 200.0),
            },
            raft: RaftConfig {
                start: Vec2::ZERO,
                yaw: 0.0,
                freeboard: 0.2,
                probe_offset: 1.5,
                smoothing: Smoothing::TimeConstant { tau_secs: 0.2 },
            },
            camera: Camera {
                position: Vec3::new(0.0, 2.0, 10.0),
                target: Vec3::ZERO,
                fov_deg: 75.0,
            },
            lighting: Lighting {
                ambient_intensity: 0.5,
                sun_color: Rgb::from_hex(0xffaa33),
                sun_position: Vec3::new(0.0, 10.0, -50.0),
                sun_intensity: 2.0,
            },
            background: Rgb::from_hex(0x050505),
            star_opacity: 1.0,
            stop_motion: None,
            timestep: Timestep::Fixed {
                fps: Fps { num: 60, den: 1 },
            },
        }
    }

    /// Parse, normalize wave directions, and validate.
    pub fn from_json_str(s: &str) -> SwellResult<Self> {
        let mut config: Self =
            serde_json::from_str(s).map_err(|e| SwellError::serde(e.to_string()))?;
        config.water.field = config.water.field.normalized()?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> SwellResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read scene config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> SwellResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SwellError::serde(e.to_string()))
    }

    pub fn validate(&self) -> SwellResult<()> {
        self.water.field.validate()?;
        if !self.water.level.is_finite() {
            return Err(SwellError::validation("water level must be finite"));
        }
        let b = self.water.box_size;
        if !b.is_finite() || b.x <= 0.0 || b.z <= 0.0 || b.y < 0.0 {
            return Err(SwellError::validation(
                "water box_size must be finite with x, z > 0 and y >= 0",
            ));
        }

        let raft = &self.raft;
        if !(raft.start.x.is_finite()
            && raft.start.y.is_finite()
            && raft.yaw.is_finite()
            && raft.freeboard.is_finite())
        {
            return Err(SwellError::validation("raft start/yaw/freeboard must be finite"));
        }
        BuoyancyProbe::new(raft.probe_offset)?;
        raft.smoothing.validate()?;

        self.camera.validate()?;
        self.lighting.validate()?;
        if !self.background.is_finite() {
            return Err(SwellError::validation("background color must be finite"));
        }
        if !(0.0..=1.0).contains(&self.star_opacity) {
            return Err(SwellError::validation("star_opacity must be in [0, 1]"));
        }
        if let Some(sm) = &self.stop_motion {
            sm.validate()?;
        }
        if let Timestep::Fixed { fps } = self.timestep {
            fps.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/config.rs"]
mod tests;
