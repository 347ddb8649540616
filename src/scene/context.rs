//! Explicitly owned scene state, advanced once per frame.
//!
//! [`SceneContext`] holds everything a frame touches: the clock, the water surface and its
//! uniforms, the raft, camera, lights and any running cutscene. It is created from a
//! [`SceneConfig`] and dropped when the view goes away.

use crate::{
    animation::timeline::{Cutscene, Timeline, Value},
    foundation::core::{Rgb, Vec3},
    foundation::error::{SwellError, SwellResult},
    ocean::body::{BuoyancyProbe, BuoyancyTarget, FloatingBody, Pose},
    ocean::shader::WaterUniforms,
    ocean::wave::WaveField,
    scene::clock::SceneClock,
    scene::config::SceneConfig,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_deg: f64,
}

impl Camera {
    pub fn validate(&self) -> SwellResult<()> {
        if !(self.position.is_finite() && self.target.is_finite()) {
            return Err(SwellError::validation("camera position/target must be finite"));
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(SwellError::validation("camera fov_deg must be in (0, 180)"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Lighting {
    pub ambient_intensity: f64,
    pub sun_color: Rgb,
    pub sun_position: Vec3,
    pub sun_intensity: f64,
}

impl Lighting {
    pub fn validate(&self) -> SwellResult<()> {
        let intensities_ok = [self.ambient_intensity, self.sun_intensity]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !intensities_ok {
            return Err(SwellError::validation(
                "light intensities must be finite and >= 0",
            ));
        }
        if !(self.sun_color.is_finite() && self.sun_position.is_finite()) {
            return Err(SwellError::validation("sun color/position must be finite"));
        }
        Ok(())
    }
}

/// Scene values a cutscene may animate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Property {
    CameraPosition,
    CameraTarget,
    AmbientIntensity,
    SunColor,
    SunPosition,
    SunIntensity,
    Background,
    StarOpacity,
}

/// The water surface: one field for both the CPU sampler and the shader.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct WaterSurface {
    pub field: WaveField,
    pub level: f64,
    pub uniforms: WaterUniforms,
}

/// A compiled cutscene and how far into it we are.
#[derive(Clone, Debug)]
pub struct CutscenePlayer {
    cutscene: Cutscene<Property>,
    elapsed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Playback {
    Playing,
    Finished,
}

impl CutscenePlayer {
    pub fn new(cutscene: Cutscene<Property>) -> Self {
        Self {
            cutscene,
            elapsed: 0.0,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn duration(&self) -> f64 {
        self.cutscene.duration
    }

    /// Move the playhead by `dt` and write every animated property into `scene`.
    pub fn advance(&mut self, dt: f64, scene: &mut SceneContext) -> SwellResult<Playback> {
        self.elapsed = (self.elapsed + dt).min(self.cutscene.duration);
        for (property, value) in self.cutscene.sample(self.elapsed)? {
            scene.write(property, value)?;
        }
        if self.elapsed >= self.cutscene.duration {
            Ok(Playback::Finished)
        } else {
            Ok(Playback::Playing)
        }
    }
}

/// What one tick produced, for whoever draws the frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub elapsed: f64,
    /// Time fed to both the wave sampler and `u_time`.
    pub presented: f64,
    pub shader_time: f32,
    pub raft: Pose,
    pub raft_target: BuoyancyTarget,
    /// Camera as presented, stop-motion jitter included.
    pub camera: Camera,
    pub lighting: Lighting,
    pub background: Rgb,
    pub star_opacity: f64,
    pub controls_enabled: bool,
    pub cutscene_active: bool,
}

pub struct SceneContext {
    pub clock: SceneClock,
    pub water: WaterSurface,
    pub raft: FloatingBody,
    pub camera: Camera,
    pub lighting: Lighting,
    pub background: Rgb,
    pub star_opacity: f64,
    /// Orbit controls are locked while a cutscene plays.
    pub controls_enabled: bool,
    cutscene: Option<CutscenePlayer>,
    last_target: BuoyancyTarget,
}

impl SceneContext {
    #[tracing::instrument(skip_all)]
    pub fn new(config: &SceneConfig) -> SwellResult<Self> {
        config.validate()?;

        let water = WaterSurface {
            field: config.water.field.clone(),
            level: config.water.level,
            uniforms: WaterUniforms::new(&config.water.field, config.water.box_size),
        };
        let rest_height = config.water.level + config.raft.freeboard;
        let pose = Pose {
            position: Vec3::new(config.raft.start.x, rest_height, config.raft.start.y),
            pitch: 0.0,
            yaw: config.raft.yaw,
            roll: 0.0,
        };
        let raft = FloatingBody::new(
            pose,
            rest_height,
            BuoyancyProbe::new(config.raft.probe_offset)?,
            config.raft.smoothing,
        )?;
        let last_target = raft
            .probe
            .sample(&water.field, raft.horizontal(), 0.0);

        tracing::debug!(
            stop_motion = config.stop_motion.is_some(),
            bands = water.field.bands.len(),
            "scene created"
        );

        Ok(Self {
            clock: SceneClock::new(config.stop_motion),
            water,
            raft,
            camera: config.camera,
            lighting: config.lighting,
            background: config.background,
            star_opacity: config.star_opacity,
            controls_enabled: true,
            cutscene: None,
            last_target,
        })
    }

    /// Advance one frame by `dt` seconds.
    pub fn tick(&mut self, dt: f64) -> SwellResult<FrameSnapshot> {
        self.clock.advance(dt)?;
        let t = self.clock.presented();

        self.water.uniforms.set_time(t);
        self.last_target = self.raft.update(&self.water.field, t, dt);

        if let Some(mut player) = self.cutscene.take() {
            match player.advance(dt, self)? {
                Playback::Playing => self.cutscene = Some(player),
                Playback::Finished => {
                    self.controls_enabled = true;
                    tracing::debug!(duration = player.duration(), "cutscene finished");
                }
            }
        }

        tracing::trace!(tick = self.clock.ticks(), presented = t, "tick");
        Ok(self.snapshot())
    }

    /// Start `timeline`, using the scene's current values for anything it does not set explicitly.
    pub fn play(&mut self, timeline: &Timeline<Property>) -> SwellResult<()> {
        if self.cutscene.is_some() {
            return Err(SwellError::animation("a cutscene is already playing"));
        }
        let cutscene = timeline.compile(|p| self.read(p))?;
        tracing::debug!(
            duration = cutscene.duration,
            tracks = cutscene.tracks.len(),
            "cutscene started"
        );
        self.controls_enabled = false;
        self.cutscene = Some(CutscenePlayer::new(cutscene));
        Ok(())
    }

    pub fn cutscene(&self) -> Option<&CutscenePlayer> {
        self.cutscene.as_ref()
    }

    pub fn read(&self, property: Property) -> Value {
        match property {
            Property::CameraPosition => Value::Vector(self.camera.position),
            Property::CameraTarget => Value::Vector(self.camera.target),
            Property::AmbientIntensity => Value::Scalar(self.lighting.ambient_intensity),
            Property::SunColor => Value::Color(self.lighting.sun_color),
            Property::SunPosition => Value::Vector(self.lighting.sun_position),
            Property::SunIntensity => Value::Scalar(self.lighting.sun_intensity),
            Property::Background => Value::Color(self.background),
            Property::StarOpacity => Value::Scalar(self.star_opacity),
        }
    }

    pub fn write(&mut self, property: Property, value: Value) -> SwellResult<()> {
        match (property, value) {
            (Property::CameraPosition, Value::Vector(v)) => self.camera.position = v,
            (Property::CameraTarget, Value::Vector(v)) => self.camera.target = v,
            (Property::AmbientIntensity, Value::Scalar(v)) => self.lighting.ambient_intensity = v,
            (Property::SunColor, Value::Color(c)) => self.lighting.sun_color = c,
            (Property::SunPosition, Value::Vector(v)) => self.lighting.sun_position = v,
            (Property::SunIntensity, Value::Scalar(v)) => self.lighting.sun_intensity = v,
            (Property::Background, Value::Color(c)) => self.background = c,
            (Property::StarOpacity, Value::Scalar(v)) => self.star_opacity = v,
            (property, value) => {
                return Err(SwellError::animation(format!(
                    "{property:?} cannot hold a {:?} value",
                    value.kind()
                )));
            }
        }
        Ok(())
    }

    fn presented_camera(&self) -> Camera {
        let Some(sm) = self.clock.stop_motion() else {
            return self.camera;
        };
        let frame = sm.frame_at(self.clock.elapsed());
        let jitter = Vec3::new(sm.jitter(frame, 0), sm.jitter(frame, 1), sm.jitter(frame, 2));
        Camera {
            position: self.camera.position + jitter,
            ..self.camera
        }
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            tick: self.clock.ticks(),
            elapsed: self.clock.elapsed(),
            presented: self.clock.presented(),
            shader_time: self.water.uniforms.u_time,
            raft: self.raft.pose,
            raft_target: self.last_target,
            camera: self.presented_camera(),
            lighting: self.lighting,
            background: self.background,
            star_opacity: self.star_opacity,
            controls_enabled: self.controls_enabled,
            cutscene_active: self.cutscene.is_some(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/context.rs"]
mod tests;
