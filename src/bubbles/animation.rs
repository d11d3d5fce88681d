//! Bubbles domain: looping float and pulse of bubble visuals.

use std::f32::consts::PI;

use bevy::prelude::*;

use crate::bubbles::{BubbleTuning, BubbleVisual};

/// Half-cycle length for the bubble at `index`.
pub fn half_period(tuning: &BubbleTuning, index: usize) -> f32 {
    tuning.half_period_base + (index % 5) as f32 * tuning.half_period_step
}

/// Eased ping-pong in [0, 1]: 0 at rest, 1 after one half period, back to 0
/// after a full cycle.
pub fn oscillation(elapsed: f32, half_period: f32) -> f32 {
    if half_period <= 0.0 {
        return 0.0;
    }
    let t = (elapsed / half_period).rem_euclid(2.0);
    let linear = if t < 1.0 { t } else { 2.0 - t };
    (1.0 - (PI * linear).cos()) * 0.5
}

/// Scale along one half cycle: 1 at both ends, `peak` in the middle.
pub fn scale_at(progress: f32, peak: f32) -> f32 {
    let progress = progress.clamp(0.0, 1.0);
    if progress <= 0.5 {
        1.0 + (peak - 1.0) * progress * 2.0
    } else {
        peak + (1.0 - peak) * (progress - 0.5) * 2.0
    }
}

pub(crate) fn animate_bubbles(
    time: Res<Time>,
    tuning: Res<BubbleTuning>,
    mut query: Query<(&BubbleVisual, &mut Transform)>,
) {
    let now = time.elapsed_secs();

    for (visual, mut transform) in &mut query {
        let progress = oscillation(
            now - visual.started,
            half_period(&tuning, visual.phase_index),
        );
        transform.translation.y = progress * tuning.float_height * visual.speed;
        transform.scale = Vec3::splat(scale_at(progress, tuning.scale_peak));
    }
}
