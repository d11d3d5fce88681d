//! Flow domain: engine-independent challenge controller.

mod avatar;
mod machine;
mod model;
#[cfg(test)]
mod tests;

pub use avatar::{DEFAULT_AVATAR_ENDPOINT, avatar_initial, avatar_palette_index, avatar_url};
pub use machine::{ChallengeFlow, FlowEffect, FlowError, FlowEvent, FlowView, Transition};
pub use model::{Character, Choice, Scenario};
