use super::*;
use crate::{scene::config::SceneConfig, scene::context::SceneContext};

fn scene() -> SceneContext {
    let cfg = SceneConfig {
        stop_motion: None,
        ..SceneConfig::diorama()
    };
    SceneContext::new(&cfg).unwrap()
}

#[test]
fn sunset_story_compiles_to_sixteen_seconds() {
    let ctx = scene();
    let story = sunset_story(ctx.camera.position, Vec3::new(-2.0, 0.5, 1.0));
    let cutscene = story.compile(|p| ctx.read(p)).unwrap();
    assert_eq!(cutscene.duration, 16.0);
    assert_eq!(cutscene.tracks.len(), 8);
}

#[test]
fn sunset_story_goes_dark_before_dawn() {
    let ctx = scene();
    let cutscene = sunset_story(ctx.camera.position, Vec3::ZERO)
        .compile(|p| ctx.read(p))
        .unwrap();

    let at = |time: f64, property: Property| {
        cutscene
            .sample(time)
            .unwrap()
            .into_iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
            .unwrap()
    };

    // Middle of the pause.
    assert_eq!(at(8.5, Property::SunIntensity), Value::Scalar(0.0));
    assert_eq!(at(8.5, Property::StarOpacity), Value::Scalar(1.0));
    assert_eq!(
        at(8.5, Property::SunPosition),
        Value::Vector(Vec3::new(-20.0, -2.0, -5.0))
    );
    // Sunrise snaps the sun back before fading in.
    assert_eq!(
        at(10.0, Property::SunPosition),
        Value::Vector(Vec3::new(10.0, 20.0, 10.0))
    );
    // Stars start from zero when night falls, not from the configured opacity.
    assert_eq!(at(5.0, Property::StarOpacity), Value::Scalar(0.0));
    assert_eq!(at(4.9, Property::StarOpacity), Value::Scalar(1.0));
}

#[test]
fn sunset_story_plays_to_completion() {
    let mut ctx = scene();
    let home = ctx.camera.position;
    ctx.play(&sunset_story(home, Vec3::new(-2.0, 0.5, 1.0)))
        .unwrap();

    let mut frames = 0;
    while ctx.cutscene().is_some() {
        ctx.tick(1.0 / 60.0).unwrap();
        frames += 1;
        assert!(frames < 2000, "cutscene never finished");
    }

    assert!(ctx.controls_enabled);
    assert_eq!(ctx.camera.position, home);
    assert_eq!(ctx.camera.target, Vec3::ZERO);
    assert_eq!(ctx.lighting.sun_intensity, 1.5);
    assert_eq!(ctx.lighting.ambient_intensity, 0.6);
    assert_eq!(ctx.lighting.sun_color, Rgb::WHITE);
    assert_eq!(ctx.background, Rgb::new(0.1, 0.1, 0.18));
    assert_eq!(ctx.star_opacity, 1.0);
}

#[test]
fn dolly_intro_starts_dark_at_the_from_point() {
    let ctx = scene();
    let from = Vec3::new(0.0, 30.0, 60.0);
    let cutscene = dolly_intro(from, ctx.camera.position)
        .compile(|p| ctx.read(p))
        .unwrap();
    assert_eq!(cutscene.duration, 2.5);

    let start = cutscene.sample(0.0).unwrap();
    assert!(start.contains(&(Property::CameraPosition, Value::Vector(from))));
    assert!(start.contains(&(Property::AmbientIntensity, Value::Scalar(0.0))));
}
