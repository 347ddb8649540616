use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::{
    animation::anim::{InterpMode, Keyframe, Keyframes, Lerp},
    animation::ease::Ease,
    foundation::core::{Rgb, Vec3},
    foundation::error::{SwellError, SwellResult},
};

/// A tweenable value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Value {
    Scalar(f64),
    Vector(Vec3),
    Color(Rgb),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ValueKind {
    Scalar,
    Vector,
    Color,
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Vector(_) => ValueKind::Vector,
            Self::Color(_) => ValueKind::Color,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_finite(),
            Self::Vector(v) => v.is_finite(),
            Self::Color(c) => c.is_finite(),
        }
    }
}

impl Lerp for Value {
    // Mixed kinds are rejected by `Timeline::compile`; holding `a` keeps sampling total.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (a, b) {
            (Self::Scalar(x), Self::Scalar(y)) => Self::Scalar(<f64 as Lerp>::lerp(x, y, t)),
            (Self::Vector(x), Self::Vector(y)) => Self::Vector(<Vec3 as Lerp>::lerp(x, y, t)),
            (Self::Color(x), Self::Color(y)) => Self::Color(<Rgb as Lerp>::lerp(x, y, t)),
            _ => *a,
        }
    }
}

/// Where a step starts relative to the steps before it.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Position {
    /// At the current end of the timeline.
    #[default]
    Append,
    /// At the start of the previous step.
    WithPrevious,
    /// At an absolute time in seconds.
    At(f64),
    /// Relative to the current end (negative overlaps the tail).
    Offset(f64),
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Tween<P> {
    pub property: P,
    pub from: Option<Value>, // None: whatever the property holds when the tween starts
    pub to: Value,
    pub duration: f64,
    pub ease: Ease,
    pub position: Position,
}

impl<P> Tween<P> {
    pub fn to(property: P, to: Value, duration: f64) -> Self {
        Self {
            property,
            from: None,
            to,
            duration,
            ease: Ease::Linear,
            position: Position::Append,
        }
    }

    /// Zero-duration tween.
    pub fn set(property: P, to: Value) -> Self {
        Self::to(property, to, 0.0)
    }

    pub fn from(mut self, from: Value) -> Self {
        self.from = Some(from);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn with_previous(self) -> Self {
        self.at(Position::WithPrevious)
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Step<P> {
    Tween(Tween<P>),
    /// Extends the timeline without animating anything.
    Pause { duration: f64 },
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Timeline<P> {
    pub steps: Vec<Step<P>>,
}

impl<P> Default for Timeline<P> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

struct Span {
    start: f64,
    end: f64,
    from: Option<Value>,
    to: Value,
    ease: Ease,
}

impl<P> Timeline<P>
where
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tween(mut self, tween: Tween<P>) -> Self {
        self.steps.push(Step::Tween(tween));
        self
    }

    pub fn pause(mut self, duration: f64) -> Self {
        self.steps.push(Step::Pause { duration });
        self
    }

    /// Resolve start times and build one keyframe track per animated property.
    ///
    /// `initial` supplies the value a property holds before the timeline touches it;
    /// it is only consulted for properties that appear in the timeline.
    #[tracing::instrument(skip_all, fields(steps = self.steps.len()))]
    pub fn compile(&self, initial: impl Fn(P) -> Value) -> SwellResult<Cutscene<P>> {
        let mut end = 0.0_f64;
        let mut prev_start = 0.0_f64;
        let mut spans: BTreeMap<P, Vec<Span>> = BTreeMap::new();

        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Pause { duration } => {
                    check_duration(i, *duration)?;
                    prev_start = end;
                    end += duration;
                }
                Step::Tween(tween) => {
                    check_duration(i, tween.duration)?;
                    let start = match tween.position {
                        Position::Append => end,
                        Position::WithPrevious => prev_start,
                        Position::At(t) => t,
                        Position::Offset(o) => end + o,
                    };
                    if !start.is_finite() || start < 0.0 {
                        return Err(SwellError::animation(format!(
                            "step {i} resolves to start time {start}, expected a finite value >= 0"
                        )));
                    }
                    if !tween.to.is_finite() || tween.from.is_some_and(|v| !v.is_finite()) {
                        return Err(SwellError::animation(format!(
                            "step {i} on {:?} has non-finite values",
                            tween.property
                        )));
                    }
                    prev_start = start;
                    end = end.max(start + tween.duration);
                    spans.entry(tween.property).or_default().push(Span {
                        start,
                        end: start + tween.duration,
                        from: tween.from,
                        to: tween.to,
                        ease: tween.ease,
                    });
                }
            }
        }

        let mut tracks = BTreeMap::new();
        for (property, mut list) in spans {
            list.sort_by(|a, b| a.start.total_cmp(&b.start));

            let mut current = initial(property);
            let kind = current.kind();
            let mut keys = vec![Keyframe {
                time: 0.0,
                value: current,
                ease: Ease::Linear,
            }];
            let mut last_end = 0.0_f64;

            for span in list {
                if span.start < last_end {
                    return Err(SwellError::animation(format!(
                        "overlapping tweens on {property:?} at {}s",
                        span.start
                    )));
                }
                for v in std::iter::once(span.to).chain(span.from) {
                    if v.kind() != kind {
                        return Err(SwellError::animation(format!(
                            "{property:?} holds {kind:?} values, tween supplies {:?}",
                            v.kind()
                        )));
                    }
                }

                if span.from.is_some() {
                    // Hold the previous value right up to the jump.
                    keys.push(Keyframe {
                        time: span.start,
                        value: current,
                        ease: Ease::Linear,
                    });
                }
                keys.push(Keyframe {
                    time: span.start,
                    value: span.from.unwrap_or(current),
                    ease: span.ease,
                });
                keys.push(Keyframe {
                    time: span.end,
                    value: span.to,
                    ease: Ease::Linear,
                });
                current = span.to;
                last_end = span.end;
            }

            let track = Keyframes {
                keys,
                mode: InterpMode::Linear,
            };
            track.validate()?;
            tracks.insert(property, track);
        }

        Ok(Cutscene {
            tracks,
            duration: end,
        })
    }
}

fn check_duration(step: usize, duration: f64) -> SwellResult<()> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(SwellError::animation(format!(
            "step {step} duration must be finite and >= 0"
        )));
    }
    Ok(())
}

/// A compiled timeline: one keyframe track per animated property.
#[derive(Clone, Debug)]
pub struct Cutscene<P> {
    pub tracks: BTreeMap<P, Keyframes<Value>>,
    pub duration: f64,
}

impl<P> Cutscene<P>
where
    P: Copy + Ord,
{
    /// Values of every animated property at `time` seconds into the cutscene.
    pub fn sample(&self, time: f64) -> SwellResult<Vec<(P, Value)>> {
        self.tracks
            .iter()
            .map(|(p, track)| Ok((*p, track.sample(time)?)))
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
