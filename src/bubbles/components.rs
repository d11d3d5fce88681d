//! Bubbles domain: arena components.

use bevy::prelude::*;

/// Physics body of a bubble.
#[derive(Component, Debug, Clone, Copy)]
pub struct Bubble {
    /// Diameter in pixels
    pub size: f32,
    /// Buoyancy multiplier (0.5 - 2.0)
    pub speed: f32,
}

/// Rendered circle, child of a `Bubble`. Bobs and pulses around the body.
#[derive(Component, Debug, Clone, Copy)]
pub struct BubbleVisual {
    pub phase_index: usize,
    pub speed: f32,
    /// Elapsed seconds when the visual was spawned
    pub started: f32,
}

/// Bubble earned from empathy points; removed on reset
#[derive(Component, Debug)]
pub struct RewardBubble;

/// Background bubble present before any points are earned
#[derive(Component, Debug)]
pub struct AmbientBubble;

#[derive(Component, Debug)]
pub struct ArenaWall;

/// Everything spawned for the mini-game arena, despawned on exit
#[derive(Component, Debug)]
pub struct ArenaScoped;
