//! Canned cutscenes.

use crate::{
    animation::ease::Ease,
    animation::timeline::{Timeline, Tween, Value},
    foundation::core::{Rgb, Vec3},
    scene::context::Property,
};

/// Where the rose stands on the diorama raft.
pub const DIORAMA_FLOWER: Vec3 = Vec3::new(3.0, 7.5, 2.0);

/// Zoom onto the flower, let the sun set and the stars come out, then bring the morning back
/// and fly home.
pub fn sunset_story(home_camera: Vec3, flower: Vec3) -> Timeline<Property> {
    use Property::*;

    let vector = Value::Vector;
    let scalar = Value::Scalar;
    let color = |r, g, b| Value::Color(Rgb::new(r, g, b));

    Timeline::new()
        // Close-up.
        .tween(Tween::set(CameraTarget, vector(flower)))
        .tween(
            Tween::to(CameraPosition, vector(Vec3::new(5.0, 8.5, 5.0)), 3.0)
                .ease(Ease::InOutQuad)
                .with_previous(),
        )
        // Dusk.
        .tween(Tween::to(AmbientIntensity, scalar(0.05), 4.0).with_previous())
        .tween(Tween::to(SunColor, color(1.0, 0.3, 0.1), 4.0).with_previous())
        .tween(Tween::to(SunPosition, vector(Vec3::new(-20.0, -2.0, -5.0)), 5.0).with_previous())
        // Night.
        .tween(Tween::to(SunIntensity, scalar(0.0), 2.0))
        .tween(Tween::to(Background, color(0.02, 0.02, 0.05), 2.0).with_previous())
        .tween(
            Tween::to(StarOpacity, scalar(1.0), 2.0)
                .from(scalar(0.0))
                .with_previous(),
        )
        .pause(3.0)
        // Dawn.
        .tween(Tween::set(SunPosition, vector(Vec3::new(10.0, 20.0, 10.0))))
        .tween(Tween::to(Background, color(0.1, 0.1, 0.18), 3.0))
        .tween(Tween::to(SunColor, Value::Color(Rgb::WHITE), 3.0).with_previous())
        .tween(Tween::to(SunIntensity, scalar(1.5), 3.0).with_previous())
        .tween(Tween::to(AmbientIntensity, scalar(0.6), 3.0).with_previous())
        // Home.
        .tween(Tween::set(CameraTarget, vector(Vec3::ZERO)))
        .tween(
            Tween::to(CameraPosition, vector(home_camera), 3.0)
                .ease(Ease::InOutQuad)
                .with_previous(),
        )
}

/// Slide the camera from `from` to `to` while the ambient light comes up from black.
pub fn dolly_intro(from: Vec3, to: Vec3) -> Timeline<Property> {
    Timeline::new()
        .tween(
            Tween::to(Property::CameraPosition, Value::Vector(to), 2.5)
                .from(Value::Vector(from))
                .ease(Ease::OutCubic),
        )
        .tween(
            Tween::to(Property::AmbientIntensity, Value::Scalar(0.6), 2.0)
                .from(Value::Scalar(0.0))
                .ease(Ease::InOutSine)
                .with_previous(),
        )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/story.rs"]
mod tests;
