use crate::{
    animation::ease::Ease,
    foundation::core::{Rgb, Vec3},
    foundation::error::{SwellError, SwellResult},
};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Rgb {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by time
    pub mode: InterpMode,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> SwellResult<()> {
        if self.keys.is_empty() {
            return Err(SwellError::animation("Keyframes must have at least one key"));
        }
        if self.keys.iter().any(|k| !k.time.is_finite()) {
            return Err(SwellError::animation("Keyframe times must be finite"));
        }
        if !self.keys.windows(2).all(|w| w[0].time <= w[1].time) {
            return Err(SwellError::animation("Keyframes keys must be sorted by time"));
        }
        Ok(())
    }

    /// Time of the last key.
    pub fn end_time(&self) -> f64 {
        self.keys.last().map_or(0.0, |k| k.time)
    }

    pub fn sample(&self, time: f64) -> SwellResult<T> {
        let Some(first) = self.keys.first() else {
            return Err(SwellError::animation("Keyframes has no keys"));
        };

        let idx = self.keys.partition_point(|k| k.time <= time);

        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.time - a.time;
        if denom <= 0.0 {
            return Ok(a.value.clone());
        }

        let t = (time - a.time) / denom;
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub time: f64, // seconds
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
