//! Bubbles domain: tuning, RNG and the reward reserve.

use std::ops::Range;

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::core::ChallengeConfig;

#[derive(Resource, Debug, Clone)]
pub struct BubbleTuning {
    pub ambient_size: Range<f32>,
    pub reward_size: Range<f32>,
    pub ambient_opacity: Range<f32>,
    pub reward_opacity: Range<f32>,
    pub speed: Range<f32>,
    /// Visual bob height in pixels at speed 1.0
    pub float_height: f32,
    pub half_period_base: f32,
    pub half_period_step: f32,
    pub scale_peak: f32,
    /// Upper bound on the per-tick delta fed to buoyancy
    pub max_tick_delta: f32,
    pub arena_size: Vec2,
    pub wall_thickness: f32,
    /// Upward acceleration at speed 1.0 (px/s²)
    pub buoyancy: f32,
    pub linear_damping: f32,
    pub restitution: f32,
    /// Extra pick radius around a bubble for touch input
    pub grab_slack: f32,
    pub drag_gain: f32,
    pub max_drag_speed: f32,
}

impl Default for BubbleTuning {
    fn default() -> Self {
        Self {
            ambient_size: 20.0..60.0,
            reward_size: 30.0..60.0,
            ambient_opacity: 0.5..1.0,
            reward_opacity: 0.7..1.0,
            speed: 0.5..2.0,
            float_height: 12.0,
            half_period_base: 2.0,
            half_period_step: 0.5,
            scale_peak: 1.2,
            max_tick_delta: 1.0 / 30.0,
            arena_size: Vec2::new(720.0, 480.0),
            wall_thickness: 20.0,
            buoyancy: 60.0,
            linear_damping: 1.5,
            restitution: 0.6,
            grab_slack: 12.0,
            drag_gain: 10.0,
            max_drag_speed: 900.0,
        }
    }
}

/// One bubble waiting to be spawned. Position is relative to the arena center.
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleSpec {
    pub position: Vec2,
    /// Index into `BUBBLE_COLORS`
    pub color_index: usize,
    pub size: f32,
    pub opacity: f32,
    pub speed: f32,
    pub phase_index: usize,
}

/// Reward bubbles earned this session
#[derive(Resource, Debug, Default)]
pub struct BubbleReserve {
    pub specs: Vec<BubbleSpec>,
}

/// Seeded from `ChallengeConfig::seed`
#[derive(Resource, Debug)]
pub struct BubbleRng(pub ChaCha8Rng);

impl FromWorld for BubbleRng {
    fn from_world(world: &mut World) -> Self {
        let seed = world
            .get_resource::<ChallengeConfig>()
            .map(|config| config.seed)
            .unwrap_or_default();
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// Bubble currently held by touch or mouse
#[derive(Resource, Debug, Default)]
pub struct PointerGrab {
    pub entity: Option<Entity>,
}
