//! Core domain: character creation and game complete screens.

pub(crate) mod character_creation;
pub(crate) mod game_complete;
