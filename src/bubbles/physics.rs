//! Bubbles domain: buoyancy and pointer dragging on avian2d bodies.

use avian2d::prelude::*;
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::bubbles::spawn::arena_origin;
use crate::bubbles::{Bubble, BubbleTuning, PointerGrab};

/// Frame delta limited to `max`, so a stalled frame cannot launch bubbles.
pub fn clamped_delta(dt: f32, max: f32) -> f32 {
    dt.clamp(0.0, max)
}

pub fn buoyant_velocity(velocity: Vec2, speed: f32, buoyancy: f32, dt: f32) -> Vec2 {
    velocity + Vec2::Y * buoyancy * speed * dt
}

/// Velocity steering a held bubble toward the pointer.
pub fn drag_velocity(from: Vec2, to: Vec2, gain: f32, max_speed: f32) -> Vec2 {
    ((to - from) * gain).clamp_length_max(max_speed)
}

/// Closest candidate whose pick radius contains `point`.
pub fn nearest_within<T>(
    point: Vec2,
    candidates: impl IntoIterator<Item = (T, Vec2, f32)>,
) -> Option<T> {
    candidates
        .into_iter()
        .map(|(id, center, radius)| (id, center.distance(point), radius))
        .filter(|(_, distance, radius)| distance <= radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _, _)| id)
}

/// True when an arena-relative position has left the walled box.
pub fn outside_arena(local: Vec2, half_extents: Vec2) -> bool {
    local.x.abs() > half_extents.x || local.y.abs() > half_extents.y
}

pub(crate) fn apply_buoyancy(
    time: Res<Time>,
    tuning: Res<BubbleTuning>,
    grab: Res<PointerGrab>,
    mut query: Query<(Entity, &Bubble, &mut LinearVelocity)>,
) {
    let dt = clamped_delta(time.delta_secs(), tuning.max_tick_delta);

    for (entity, bubble, mut velocity) in &mut query {
        if grab.entity == Some(entity) {
            continue;
        }
        velocity.0 = buoyant_velocity(velocity.0, bubble.speed, tuning.buoyancy, dt);
    }
}

/// Put back bubbles that tunnelled through a wall.
pub(crate) fn contain_escaped_bubbles(
    tuning: Res<BubbleTuning>,
    mut query: Query<(&mut Transform, &mut LinearVelocity), With<Bubble>>,
) {
    let origin = arena_origin();
    let half = tuning.arena_size * 0.5;

    for (mut transform, mut velocity) in &mut query {
        let local = transform.translation.truncate() - origin;
        if outside_arena(local, half + Vec2::splat(tuning.wall_thickness)) {
            debug!("Bubble escaped at {:?}, returning it to the arena", local);
            transform.translation.x = origin.x;
            transform.translation.y = origin.y - half.y * 0.5;
            velocity.0 = Vec2::ZERO;
        }
    }
}

pub(crate) fn handle_pointer_drag(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    tuning: Res<BubbleTuning>,
    mut grab: ResMut<PointerGrab>,
    mut bubbles: Query<(Entity, &Transform, &Bubble, &mut LinearVelocity)>,
) {
    // First touch wins; the mouse stands in on desktop
    let screen_point = touches.iter().next().map(|touch| touch.position()).or_else(|| {
        if mouse.pressed(MouseButton::Left) {
            windows.single().ok().and_then(Window::cursor_position)
        } else {
            None
        }
    });

    let Some(screen_point) = screen_point else {
        grab.entity = None;
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Ok(point) = camera.viewport_to_world_2d(camera_transform, screen_point) else {
        return;
    };

    if grab.entity.is_none() {
        grab.entity = nearest_within(
            point,
            bubbles.iter().map(|(entity, transform, bubble, _)| {
                (
                    entity,
                    transform.translation.truncate(),
                    bubble.size * 0.5 + tuning.grab_slack,
                )
            }),
        );
        if let Some(entity) = grab.entity {
            debug!("Grabbed bubble {:?}", entity);
        }
    }

    let Some(entity) = grab.entity else {
        return;
    };
    match bubbles.get_mut(entity) {
        Ok((_, transform, _, mut velocity)) => {
            velocity.0 = drag_velocity(
                transform.translation.truncate(),
                point,
                tuning.drag_gain,
                tuning.max_drag_speed,
            );
        }
        // Despawned by a reset while held
        Err(_) => grab.entity = None,
    }
}
