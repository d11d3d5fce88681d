//! Core domain: session and configuration resources.

use bevy::prelude::*;
use rand::Rng;

use crate::flow::{ChallengeFlow, DEFAULT_AVATAR_ENDPOINT};

/// The live challenge session. Written only by `apply_flow_commands`.
#[derive(Resource, Debug, Clone)]
pub struct ChallengeSession {
    pub flow: ChallengeFlow,
}

impl ChallengeSession {
    pub fn new(flow: ChallengeFlow) -> Self {
        Self { flow }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct ChallengeConfig {
    /// Seed for bubble placement and colors
    pub seed: u64,
    /// Bubbles floating in the mini-game before any are earned
    pub ambient_bubble_count: usize,
    pub avatar_endpoint: String,
}

impl Default for ChallengeConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
            ambient_bubble_count: 20,
            avatar_endpoint: DEFAULT_AVATAR_ENDPOINT.to_string(),
        }
    }
}

/// Blocking modal shown when the flow rejects input the user can fix.
#[derive(Resource, Debug, Default)]
pub struct ValidationPrompt {
    pub message: Option<PromptMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub title: String,
    pub body: String,
}

impl ValidationPrompt {
    pub fn show(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.message = Some(PromptMessage {
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }
}
