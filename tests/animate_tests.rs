// Host-side tests for the per-frame animator, in particular the
// deliberate idempotent-vs-cumulative asymmetry between Orbit and Float.

use folio_web::animate;
use folio_web::constants::*;
use folio_web::scene::{AnimationTag, Scene, SectionId};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn scene(seed: u64) -> Scene {
    Scene::generate(&mut StdRng::seed_from_u64(seed))
}

fn first_with(scene: &Scene, id: SectionId, pred: impl Fn(&AnimationTag) -> bool) -> usize {
    scene
        .section(id)
        .primitives
        .iter()
        .position(|p| pred(&p.tag))
        .expect("no primitive with expected tag")
}

#[test]
fn orbit_position_is_pure_function_of_elapsed() {
    let mut s = scene(3);
    let i = first_with(&s, SectionId::Hero, |t| matches!(t, AnimationTag::Orbit { .. }));

    animate::advance(&mut s, 2.37);
    let first = s.section(SectionId::Hero).primitives[i].position;
    // Re-running the same instant must not drift
    animate::advance(&mut s, 2.37);
    let second = s.section(SectionId::Hero).primitives[i].position;
    assert_eq!(first, second);

    // And the value is recomputed, not accumulated: a detour through a
    // different time lands back on the same position.
    animate::advance(&mut s, 5.0);
    animate::advance(&mut s, 2.37);
    assert_eq!(s.section(SectionId::Hero).primitives[i].position, first);
}

#[test]
fn float_accumulates_per_update_call() {
    // Identical seeds, different update cadence: two half-steps apply two
    // increments, one combined step applies one.
    let mut stepped = scene(11);
    let mut direct = scene(11);

    animate::advance(&mut stepped, 0.5);
    animate::advance(&mut stepped, 1.0);
    animate::advance(&mut direct, 1.0);

    let total_diff: f32 = stepped
        .section(SectionId::Hero)
        .primitives
        .iter()
        .zip(&direct.section(SectionId::Hero).primitives)
        .filter(|(p, _)| matches!(p.tag, AnimationTag::Float { .. }))
        .map(|(a, b)| (a.position.y - b.position.y).abs())
        .sum();
    assert!(
        total_diff > 1e-4,
        "float updates should be cadence-dependent, diff={}",
        total_diff
    );
}

#[test]
fn hover_bob_is_absolute() {
    let mut s = scene(5);
    let i = first_with(&s, SectionId::Projects, |t| {
        matches!(t, AnimationTag::HoverBob { .. })
    });
    let AnimationTag::HoverBob { base_y } = s.section(SectionId::Projects).primitives[i].tag
    else {
        unreachable!()
    };

    animate::advance(&mut s, 1.0);
    animate::advance(&mut s, 1.0);
    let y = s.section(SectionId::Projects).primitives[i].position.y;
    let expected = base_y + (1.0_f32 * WAVE_RATE).sin() * HOVER_BOB_AMPLITUDE;
    assert!((y - expected).abs() < 1e-6);
}

#[test]
fn pulse_scale_breathes_around_one() {
    let mut s = scene(5);
    let i = first_with(&s, SectionId::Skills, |t| {
        matches!(t, AnimationTag::PulseScale { .. })
    });
    let AnimationTag::PulseScale { delay } = s.section(SectionId::Skills).primitives[i].tag else {
        unreachable!()
    };

    animate::advance(&mut s, 3.3);
    let scale = s.section(SectionId::Skills).primitives[i].scale;
    let expected = 1.0 + (3.3_f32 * WAVE_RATE - delay).sin() * PULSE_SCALE_AMPLITUDE;
    assert!((scale - expected).abs() < 1e-6);
}

#[test]
fn spin_resumes_without_jump() {
    // Rotation is assigned absolutely from elapsed time, so updating
    // straight to T equals pausing and then updating to T.
    let mut paused = scene(8);
    let mut direct = scene(8);
    let i = first_with(&paused, SectionId::Contact, |t| {
        matches!(t, AnimationTag::StaticSpin { .. })
    });

    animate::advance(&mut paused, 1.0);
    animate::advance(&mut paused, 10.0);
    animate::advance(&mut direct, 10.0);

    let a = paused.section(SectionId::Contact).primitives[i].rotation;
    let b = direct.section(SectionId::Contact).primitives[i].rotation;
    assert!((a.dot(b).abs() - 1.0).abs() < 1e-6);
}

#[test]
fn hidden_sections_keep_animating() {
    let mut s = scene(3);
    let i = first_with(&s, SectionId::Skills, |t| matches!(t, AnimationTag::Orbit { .. }));
    // Skills starts hidden (visibility 0) but still moves
    let before = s.section(SectionId::Skills).primitives[i].position;
    animate::advance(&mut s, 4.0);
    let after = s.section(SectionId::Skills).primitives[i].position;
    assert_ne!(before, after);
    assert_eq!(s.section(SectionId::Skills).primitives[i].visibility, 0.0);
}
