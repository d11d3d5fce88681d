//! Bubbles domain: burst generation and arena spawning.

use std::ops::Range;

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::bubbles::{
    AmbientBubble, ArenaScoped, ArenaWall, BUBBLE_COLORS, Bubble, BubbleReserve, BubbleRng,
    BubbleSpec, BubbleTuning, BubbleVisual, PointerGrab, RewardBubble,
};
use crate::core::{ChallengeConfig, PointsAwardedEvent, SessionResetEvent};
use crate::ui::MINIGAME_PANEL_WIDTH;
use crate::ui::widgets::{PANEL_COLOR, hex_color};

/// Bubbles shown before any points are earned, anywhere in the arena.
pub fn ambient_specs<R: Rng>(
    rng: &mut R,
    tuning: &BubbleTuning,
    count: usize,
) -> Vec<BubbleSpec> {
    let half = tuning.arena_size * 0.5;
    (0..count)
        .map(|index| {
            random_spec(
                rng,
                tuning,
                tuning.ambient_size.clone(),
                tuning.ambient_opacity.clone(),
                -half.y..half.y,
                index,
            )
        })
        .collect()
}

/// One bubble per point, released from the lower half of the arena.
pub fn reward_burst<R: Rng>(
    rng: &mut R,
    tuning: &BubbleTuning,
    points: u32,
    start_index: usize,
) -> Vec<BubbleSpec> {
    let half = tuning.arena_size * 0.5;
    (0..points as usize)
        .map(|offset| {
            random_spec(
                rng,
                tuning,
                tuning.reward_size.clone(),
                tuning.reward_opacity.clone(),
                -half.y..0.0,
                start_index + offset,
            )
        })
        .collect()
}

fn random_spec<R: Rng>(
    rng: &mut R,
    tuning: &BubbleTuning,
    size: Range<f32>,
    opacity: Range<f32>,
    rows: Range<f32>,
    phase_index: usize,
) -> BubbleSpec {
    let size = rng.random_range(size);
    let radius = size * 0.5;
    let half_width = tuning.arena_size.x * 0.5 - radius;

    BubbleSpec {
        position: Vec2::new(
            rng.random_range(-half_width..half_width),
            rng.random_range(rows.start + radius..rows.end - radius),
        ),
        color_index: rng.random_range(0..BUBBLE_COLORS.len()),
        size,
        opacity: rng.random_range(opacity),
        speed: rng.random_range(tuning.speed.clone()),
        phase_index,
    }
}

/// Arena center in world space, left of the mini-game panel.
pub(crate) fn arena_origin() -> Vec2 {
    Vec2::new(-MINIGAME_PANEL_WIDTH * 0.5, 0.0)
}

pub(crate) fn queue_reward_bubbles(
    mut events: MessageReader<PointsAwardedEvent>,
    tuning: Res<BubbleTuning>,
    mut rng: ResMut<BubbleRng>,
    mut reserve: ResMut<BubbleReserve>,
) {
    for event in events.read() {
        let start_index = reserve.specs.len();
        let burst = reward_burst(&mut rng.0, &tuning, event.points, start_index);
        info!(
            "Bubble burst: scenario={}, bubbles={}, reserve={}",
            event.scenario_index,
            burst.len(),
            start_index + burst.len()
        );
        reserve.specs.extend(burst);
    }
}

pub(crate) fn clear_bubbles_on_reset(
    mut commands: Commands,
    mut events: MessageReader<SessionResetEvent>,
    mut reserve: ResMut<BubbleReserve>,
    mut grab: ResMut<PointerGrab>,
    rewards: Query<Entity, With<RewardBubble>>,
) {
    if events.read().count() == 0 {
        return;
    }

    info!("Clearing {} reward bubbles", reserve.specs.len());
    reserve.specs.clear();
    grab.entity = None;
    for entity in &rewards {
        commands.entity(entity).despawn();
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn spawn_bubble_arena(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    time: Res<Time>,
    tuning: Res<BubbleTuning>,
    config: Res<ChallengeConfig>,
    reserve: Res<BubbleReserve>,
    mut rng: ResMut<BubbleRng>,
) {
    let origin = arena_origin();
    let now = time.elapsed_secs();
    let size = tuning.arena_size;
    let thickness = tuning.wall_thickness;

    commands.spawn((
        ArenaScoped,
        Mesh2d(meshes.add(Rectangle::new(size.x, size.y))),
        MeshMaterial2d(materials.add(ColorMaterial::from(PANEL_COLOR.with_alpha(0.6)))),
        Transform::from_translation(origin.extend(-1.0)),
    ));

    // Closed box: bubbles rise and settle against the ceiling
    let walls = [
        (
            Vec2::new(0.0, (size.y + thickness) * 0.5),
            Vec2::new(size.x + thickness * 2.0, thickness),
        ),
        (
            Vec2::new(0.0, -(size.y + thickness) * 0.5),
            Vec2::new(size.x + thickness * 2.0, thickness),
        ),
        (
            Vec2::new(-(size.x + thickness) * 0.5, 0.0),
            Vec2::new(thickness, size.y),
        ),
        (
            Vec2::new((size.x + thickness) * 0.5, 0.0),
            Vec2::new(thickness, size.y),
        ),
    ];
    for (offset, extent) in walls {
        commands.spawn((
            ArenaScoped,
            ArenaWall,
            RigidBody::Static,
            Collider::rectangle(extent.x, extent.y),
            Transform::from_translation((origin + offset).extend(0.0)),
        ));
    }

    let ambient = ambient_specs(&mut rng.0, &tuning, config.ambient_bubble_count);
    for spec in &ambient {
        spawn_bubble(
            &mut commands,
            &mut meshes,
            &mut materials,
            &tuning,
            spec,
            origin,
            now,
            AmbientBubble,
        );
    }
    for spec in &reserve.specs {
        spawn_bubble(
            &mut commands,
            &mut meshes,
            &mut materials,
            &tuning,
            spec,
            origin,
            now,
            RewardBubble,
        );
    }

    info!(
        "Bubble arena ready: ambient={}, reward={}",
        ambient.len(),
        reserve.specs.len()
    );
}

#[allow(clippy::too_many_arguments)]
fn spawn_bubble(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<ColorMaterial>,
    tuning: &BubbleTuning,
    spec: &BubbleSpec,
    origin: Vec2,
    now: f32,
    kind: impl Component,
) {
    let radius = spec.size * 0.5;
    let color = hex_color(BUBBLE_COLORS[spec.color_index % BUBBLE_COLORS.len()]);

    commands
        .spawn((
            ArenaScoped,
            kind,
            Bubble {
                size: spec.size,
                speed: spec.speed,
            },
            Transform::from_translation((origin + spec.position).extend(1.0)),
            Visibility::default(),
            (
                RigidBody::Dynamic,
                Collider::circle(radius),
                LockedAxes::ROTATION_LOCKED,
                GravityScale(0.0),
                LinearVelocity::default(),
                LinearDamping(tuning.linear_damping),
                Restitution::new(tuning.restitution),
            ),
        ))
        .with_child((
            BubbleVisual {
                phase_index: spec.phase_index,
                speed: spec.speed,
                started: now,
            },
            Mesh2d(meshes.add(Circle::new(radius))),
            MeshMaterial2d(materials.add(ColorMaterial::from(color.with_alpha(spec.opacity)))),
            Transform::default(),
        ));
}

pub(crate) fn despawn_bubble_arena(
    mut commands: Commands,
    mut grab: ResMut<PointerGrab>,
    query: Query<Entity, With<ArenaScoped>>,
) {
    grab.entity = None;
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
