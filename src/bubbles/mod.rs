//! Bubbles domain: cosmetic reward bubbles floating in the mini-game arena.
//!
//! Earned points queue bubble specs in a `BubbleReserve`. Physics bodies only
//! exist while the mini-game screen is open; they are rebuilt from the
//! reserve each time it is entered.

mod animation;
mod components;
mod physics;
mod resources;
mod spawn;
#[cfg(test)]
mod tests;

pub use animation::{half_period, oscillation, scale_at};
pub use components::{AmbientBubble, ArenaScoped, ArenaWall, Bubble, BubbleVisual, RewardBubble};
pub use physics::{buoyant_velocity, clamped_delta, drag_velocity, nearest_within, outside_arena};
pub use resources::{BubbleReserve, BubbleRng, BubbleSpec, BubbleTuning, PointerGrab};
pub use spawn::{ambient_specs, reward_burst};

use bevy::prelude::*;

use crate::bubbles::animation::animate_bubbles;
use crate::bubbles::physics::{apply_buoyancy, contain_escaped_bubbles, handle_pointer_drag};
use crate::bubbles::spawn::{
    clear_bubbles_on_reset, despawn_bubble_arena, queue_reward_bubbles, spawn_bubble_arena,
};
use crate::core::{ChallengeView, FlowSystems};

/// Bubble palette, picked at random per bubble
pub const BUBBLE_COLORS: [&str; 8] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEEAD", "#D4A5A5", "#9B59B6", "#3498DB",
];

pub struct BubblesPlugin;

impl Plugin for BubblesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BubbleTuning>()
            .init_resource::<BubbleReserve>()
            .init_resource::<BubbleRng>()
            .init_resource::<PointerGrab>()
            .add_systems(
                Update,
                (queue_reward_bubbles, clear_bubbles_on_reset).in_set(FlowSystems::Present),
            )
            .add_systems(OnEnter(ChallengeView::MiniGame), spawn_bubble_arena)
            .add_systems(OnExit(ChallengeView::MiniGame), despawn_bubble_arena)
            .add_systems(
                Update,
                (
                    handle_pointer_drag,
                    apply_buoyancy,
                    contain_escaped_bubbles,
                    animate_bubbles,
                )
                    .chain()
                    .run_if(in_state(ChallengeView::MiniGame)),
            );
    }
}
