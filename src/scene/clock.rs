use crate::{
    foundation::core::{FrameIndex, Fps},
    foundation::error::{SwellError, SwellResult},
    foundation::math::{Fnv1a64, hash_to_signed_unit},
};

/// Stepped presentation: time advances in whole frames at a low rate, with a small
/// per-frame positional jitter.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StopMotion {
    pub fps: Fps,
    pub jitter_amount: f64,
    #[serde(default)]
    pub seed: u64,
}

impl Default for StopMotion {
    fn default() -> Self {
        Self {
            fps: Fps { num: 12, den: 1 },
            jitter_amount: 0.003,
            seed: 0,
        }
    }
}

impl StopMotion {
    pub fn validate(&self) -> SwellResult<()> {
        self.fps.validate()?;
        if !(self.jitter_amount.is_finite() && self.jitter_amount >= 0.0) {
            return Err(SwellError::validation(
                "stop-motion jitter_amount must be finite and >= 0",
            ));
        }
        Ok(())
    }

    pub fn frame_at(&self, elapsed: f64) -> FrameIndex {
        FrameIndex(self.fps.secs_to_frames_floor(elapsed))
    }

    /// Start time of the stop-motion frame containing `elapsed`.
    pub fn quantize(&self, elapsed: f64) -> f64 {
        self.fps.frames_to_secs(self.frame_at(elapsed).0)
    }

    /// Deterministic offset in `[-jitter_amount, jitter_amount]` for one axis of one frame.
    pub fn jitter(&self, frame: FrameIndex, axis: u8) -> f64 {
        let mut h = Fnv1a64::new(Fnv1a64::OFFSET_BASIS ^ self.seed);
        h.write_u64(frame.0);
        h.write_u8(axis);
        hash_to_signed_unit(h.finish()) * self.jitter_amount
    }
}

/// The one time source for a scene. Both the CPU wave sampler and the shader uniform
/// read [`SceneClock::presented`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SceneClock {
    elapsed: f64,
    ticks: u64,
    stop_motion: Option<StopMotion>,
}

impl SceneClock {
    pub fn new(stop_motion: Option<StopMotion>) -> Self {
        Self {
            elapsed: 0.0,
            ticks: 0,
            stop_motion,
        }
    }

    pub fn advance(&mut self, dt: f64) -> SwellResult<()> {
        if !dt.is_finite() || dt < 0.0 {
            return Err(SwellError::simulation(format!(
                "frame delta must be finite and >= 0, got {dt}"
            )));
        }
        self.elapsed += dt;
        self.ticks += 1;
        Ok(())
    }

    /// Seconds since the scene started.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn stop_motion(&self) -> Option<&StopMotion> {
        self.stop_motion.as_ref()
    }

    /// Time handed to everything animated this tick.
    pub fn presented(&self) -> f64 {
        match &self.stop_motion {
            Some(sm) => sm.quantize(self.elapsed),
            None => self.elapsed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/clock.rs"]
mod tests;
