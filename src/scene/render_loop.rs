use crate::{
    foundation::error::{SwellError, SwellResult},
    scene::config::{SceneConfig, Timestep},
    scene::context::{FrameSnapshot, SceneContext},
};

/// Host time within this much of a whole step still counts as reaching it.
const STEP_TOLERANCE: f64 = 1e-9;

/// Most fixed steps one host frame may run; anything beyond is dropped.
pub const MAX_STEPS_PER_FRAME: u32 = 240;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct LoopStats {
    pub frames_total: u64,
    pub steps_simulated: u64,
}

/// Sole owner of a [`SceneContext`]: feeds it host frame deltas until shut down.
pub struct RenderLoop {
    ctx: SceneContext,
    timestep: Timestep,
    /// Host seconds not yet consumed by a fixed step.
    accumulator: f64,
    stats: LoopStats,
}

impl RenderLoop {
    pub fn new(config: &SceneConfig) -> SwellResult<Self> {
        Ok(Self {
            ctx: SceneContext::new(config)?,
            timestep: config.timestep,
            accumulator: 0.0,
            stats: LoopStats::default(),
        })
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SceneContext {
        &mut self.ctx
    }

    pub fn stats(&self) -> LoopStats {
        self.stats
    }

    /// Handle one host frame of `dt` seconds. `sink` sees the snapshot of every simulation
    /// step taken; the return value is how many there were.
    pub fn frame(&mut self, dt: f64, mut sink: impl FnMut(&FrameSnapshot)) -> SwellResult<u32> {
        let steps = match self.timestep {
            Timestep::Variable => {
                sink(&self.ctx.tick(dt)?);
                1
            }
            Timestep::Fixed { fps } => {
                if !dt.is_finite() || dt < 0.0 {
                    return Err(SwellError::simulation(format!(
                        "frame delta must be finite and >= 0, got {dt}"
                    )));
                }
                self.accumulator += dt;
                let step = fps.frame_duration_secs();
                let mut n = 0_u32;
                while self.accumulator + STEP_TOLERANCE >= step {
                    if n == MAX_STEPS_PER_FRAME {
                        tracing::warn!(
                            dropped_secs = self.accumulator,
                            max_steps = MAX_STEPS_PER_FRAME,
                            "fixed timestep fell behind; dropping host time"
                        );
                        self.accumulator = 0.0;
                        break;
                    }
                    sink(&self.ctx.tick(step)?);
                    self.accumulator = (self.accumulator - step).max(0.0);
                    n += 1;
                }
                n
            }
        };
        self.stats.frames_total += 1;
        self.stats.steps_simulated += u64::from(steps);
        Ok(steps)
    }

    /// Drive `frames` host frames of `dt` seconds each.
    pub fn run(
        &mut self,
        frames: u64,
        dt: f64,
        mut sink: impl FnMut(&FrameSnapshot),
    ) -> SwellResult<LoopStats> {
        for _ in 0..frames {
            self.frame(dt, &mut sink)?;
        }
        Ok(self.stats)
    }

    /// Stop updating and drop the scene.
    pub fn shutdown(self) -> LoopStats {
        tracing::debug!(
            frames = self.stats.frames_total,
            steps = self.stats.steps_simulated,
            elapsed = self.ctx.clock.elapsed(),
            "render loop shut down"
        );
        self.stats
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/render_loop.rs"]
mod tests;
