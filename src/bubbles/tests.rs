//! Bubbles domain: tests for burst generation and bubble motion math.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::spawn::{clear_bubbles_on_reset, queue_reward_bubbles};
use super::{
    AmbientBubble, BUBBLE_COLORS, BubbleReserve, BubbleRng, BubbleTuning, PointerGrab,
    RewardBubble, ambient_specs, buoyant_velocity, clamped_delta, drag_velocity, half_period,
    nearest_within, oscillation, outside_arena, reward_burst, scale_at,
};
use crate::core::{PointsAwardedEvent, SessionResetEvent};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// -----------------------------------------------------------------------------
// Bursts
// -----------------------------------------------------------------------------

#[test]
fn test_burst_has_one_bubble_per_point() {
    let tuning = BubbleTuning::default();
    let mut rng = rng();

    assert_eq!(reward_burst(&mut rng, &tuning, 10, 0).len(), 10);
    assert_eq!(reward_burst(&mut rng, &tuning, 7, 10).len(), 7);
    assert!(reward_burst(&mut rng, &tuning, 0, 17).is_empty());
}

#[test]
fn test_burst_phase_indices_continue_from_start() {
    let tuning = BubbleTuning::default();
    let burst = reward_burst(&mut rng(), &tuning, 3, 5);

    let indices: Vec<usize> = burst.iter().map(|spec| spec.phase_index).collect();
    assert_eq!(indices, vec![5, 6, 7]);
}

#[test]
fn test_reward_specs_stay_in_bounds() {
    let tuning = BubbleTuning::default();
    let half = tuning.arena_size * 0.5;

    for spec in reward_burst(&mut rng(), &tuning, 50, 0) {
        assert!(tuning.reward_size.contains(&spec.size));
        assert!(tuning.reward_opacity.contains(&spec.opacity));
        assert!(tuning.speed.contains(&spec.speed));
        assert!(spec.color_index < BUBBLE_COLORS.len());
        // Released from the lower half, fully inside the walls
        assert!(spec.position.y <= 0.0);
        assert!(spec.position.x.abs() + spec.size * 0.5 <= half.x);
        assert!(spec.position.y.abs() + spec.size * 0.5 <= half.y);
    }
}

#[test]
fn test_ambient_specs_use_ambient_ranges() {
    let tuning = BubbleTuning::default();
    let specs = ambient_specs(&mut rng(), &tuning, 20);

    assert_eq!(specs.len(), 20);
    for spec in &specs {
        assert!(tuning.ambient_size.contains(&spec.size));
        assert!(tuning.ambient_opacity.contains(&spec.opacity));
    }
}

#[test]
fn test_same_seed_gives_same_burst() {
    let tuning = BubbleTuning::default();

    let first = reward_burst(&mut rng(), &tuning, 8, 0);
    let second = reward_burst(&mut rng(), &tuning, 8, 0);
    assert_eq!(first, second);
}

// -----------------------------------------------------------------------------
// Reserve lifecycle
// -----------------------------------------------------------------------------

fn reserve_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .init_resource::<BubbleTuning>()
        .init_resource::<BubbleReserve>()
        .init_resource::<BubbleRng>()
        .init_resource::<PointerGrab>()
        .add_message::<PointsAwardedEvent>()
        .add_message::<SessionResetEvent>()
        .add_systems(Update, (queue_reward_bubbles, clear_bubbles_on_reset));
    app
}

fn reserve_len(app: &App) -> usize {
    app.world().resource::<BubbleReserve>().specs.len()
}

fn count_with<T: Component>(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query_filtered::<Entity, With<T>>().iter(world).count()
}

#[test]
fn test_awarded_points_fill_reserve() {
    let mut app = reserve_app();

    app.world_mut().write_message(PointsAwardedEvent {
        scenario_index: 0,
        points: 10,
    });
    app.update();
    assert_eq!(reserve_len(&app), 10);

    app.world_mut().write_message(PointsAwardedEvent {
        scenario_index: 1,
        points: 7,
    });
    app.update();
    assert_eq!(reserve_len(&app), 17);

    // Phase indices keep counting across bursts
    let reserve = app.world().resource::<BubbleReserve>();
    assert_eq!(reserve.specs[10].phase_index, 10);
}

#[test]
fn test_reset_clears_reward_bubbles() {
    let mut app = reserve_app();

    app.world_mut().write_message(PointsAwardedEvent {
        scenario_index: 0,
        points: 10,
    });
    app.update();
    assert_eq!(reserve_len(&app), 10);

    let held = app.world_mut().spawn(RewardBubble).id();
    app.world_mut().spawn(RewardBubble);
    app.world_mut().spawn(AmbientBubble);
    app.world_mut().resource_mut::<PointerGrab>().entity = Some(held);

    app.world_mut().write_message(SessionResetEvent);
    app.update();

    assert_eq!(reserve_len(&app), 0);
    assert_eq!(app.world().resource::<PointerGrab>().entity, None);
    assert_eq!(count_with::<RewardBubble>(&mut app), 0);
    assert_eq!(count_with::<AmbientBubble>(&mut app), 1);
}

#[test]
fn test_no_reset_keeps_reserve() {
    let mut app = reserve_app();

    app.world_mut().write_message(PointsAwardedEvent {
        scenario_index: 2,
        points: 5,
    });
    app.update();
    app.update();

    assert_eq!(reserve_len(&app), 5);
}

// -----------------------------------------------------------------------------
// Motion
// -----------------------------------------------------------------------------

#[test]
fn test_tick_delta_is_clamped() {
    let max = 1.0 / 30.0;

    assert!(approx(clamped_delta(0.5, max), max));
    assert!(approx(clamped_delta(0.01, max), 0.01));
    assert!(approx(clamped_delta(-1.0, max), 0.0));
}

#[test]
fn test_buoyancy_pushes_upward_by_speed() {
    let slow = buoyant_velocity(Vec2::ZERO, 0.5, 60.0, 0.1);
    let fast = buoyant_velocity(Vec2::ZERO, 2.0, 60.0, 0.1);

    assert!(approx(slow.y, 3.0));
    assert!(approx(fast.y, 12.0));
    assert!(approx(fast.x, 0.0));
}

#[test]
fn test_drag_velocity_is_capped() {
    let near = drag_velocity(Vec2::ZERO, Vec2::new(10.0, 0.0), 10.0, 900.0);
    assert!(approx(near.x, 100.0));

    let far = drag_velocity(Vec2::ZERO, Vec2::new(0.0, 1000.0), 10.0, 900.0);
    assert!(approx(far.length(), 900.0));
    assert!(far.y > 0.0);
}

#[test]
fn test_nearest_within_picks_closest_hit() {
    let candidates = [
        (1, Vec2::new(0.0, 0.0), 30.0),
        (2, Vec2::new(10.0, 0.0), 30.0),
        (3, Vec2::new(200.0, 0.0), 30.0),
    ];

    assert_eq!(nearest_within(Vec2::new(12.0, 0.0), candidates), Some(2));
    assert_eq!(nearest_within(Vec2::new(100.0, 100.0), candidates), None);
}

#[test]
fn test_outside_arena() {
    let half = Vec2::new(360.0, 240.0);

    assert!(!outside_arena(Vec2::new(100.0, -200.0), half));
    assert!(outside_arena(Vec2::new(0.0, 300.0), half));
    assert!(outside_arena(Vec2::new(-400.0, 0.0), half));
}

// -----------------------------------------------------------------------------
// Animation
// -----------------------------------------------------------------------------

#[test]
fn test_half_period_varies_by_index() {
    let tuning = BubbleTuning::default();

    assert!(approx(half_period(&tuning, 0), 2.0));
    assert!(approx(half_period(&tuning, 4), 4.0));
    assert!(approx(half_period(&tuning, 7), 3.0));
}

#[test]
fn test_oscillation_endpoints() {
    assert!(approx(oscillation(0.0, 2.0), 0.0));
    assert!(approx(oscillation(1.0, 2.0), 0.5));
    assert!(approx(oscillation(2.0, 2.0), 1.0));
    assert!(approx(oscillation(4.0, 2.0), 0.0));
    assert!(approx(oscillation(6.0, 2.0), 1.0));
}

#[test]
fn test_scale_peaks_mid_cycle() {
    assert!(approx(scale_at(0.0, 1.2), 1.0));
    assert!(approx(scale_at(0.5, 1.2), 1.2));
    assert!(approx(scale_at(1.0, 1.2), 1.0));
    assert!(scale_at(0.25, 1.2) > 1.0 && scale_at(0.25, 1.2) < 1.2);
}
