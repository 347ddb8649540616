//! Swell drives a small ocean scene: a procedural wave field, a raft that rides it, and
//! keyframed cutscenes over the camera and lights.
//!
//! # Overview
//!
//! 1. **Wave field**: [`WaveField::height`] is a pure function of horizontal position and time,
//!    a weighted sum of directional sine/cosine bands.
//! 2. **Buoyancy**: [`FloatingBody`] samples the field at four probe points, estimates pitch and
//!    roll by finite differences, and low-pass filters its pose toward the result.
//! 3. **GPU counterpart**: [`vertex_shader`] emits GLSL that re-derives the same heights from
//!    the same band table; only the time uniform changes per frame.
//! 4. **Scene**: [`SceneContext`] owns clock, water, raft, camera and lights; [`RenderLoop`]
//!    owns the context and feeds it host frame deltas.
//!
//! `unsafe` is forbidden in this crate. Everything except the clock is deterministic for a
//! given input.
#![forbid(unsafe_code)]

mod animation;
mod foundation;
mod ocean;
mod scene;

pub use animation::anim::{InterpMode, Keyframe, Keyframes, Lerp};
pub use animation::ease::Ease;
pub use animation::timeline::{Cutscene, Position, Step, Timeline, Tween, Value, ValueKind};
pub use foundation::core::{FrameIndex, Fps, Rgb, Vec2, Vec3};
pub use foundation::error::{SwellError, SwellResult};
pub use foundation::math::{approach, decay_factor};
pub use ocean::body::{BuoyancyProbe, BuoyancyTarget, FloatingBody, Pose, Smoothing};
pub use ocean::mesh::{GridSpec, HeightGrid};
pub use ocean::shader::{WaterUniforms, height_function, vertex_shader};
pub use ocean::wave::{Trig, WaveBand, WaveField};
pub use scene::clock::{SceneClock, StopMotion};
pub use scene::config::{RaftConfig, SceneConfig, Timestep, WaterConfig};
pub use scene::context::{
    Camera, CutscenePlayer, FrameSnapshot, Lighting, Playback, Property, SceneContext,
    WaterSurface,
};
pub use scene::render_loop::{LoopStats, MAX_STEPS_PER_FRAME, RenderLoop};
pub use scene::story::{DIORAMA_FLOWER, dolly_intro, sunset_story};
