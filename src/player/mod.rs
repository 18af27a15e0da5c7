//! # Player Records
//!
//! The game-character record served by the registry, its closed enums, the
//! level arithmetic derived from experience, and write-side validation.
//!
//! Validation happens here, before anything reaches storage. A record that
//! leaves this module through [`PlayerFields::into_new_player`] or a patch
//! that passed [`PlayerFields::validate`] is always within bounds.

mod errors;
mod kind;
mod level;
mod model;

pub use errors::{PlayerError, PlayerResult};
pub use kind::{Profession, Race};
pub use level::{level_for, until_next_level};
pub use model::{
    NewPlayer, Player, PlayerFields, PlayerId, MAX_EXPERIENCE, MAX_NAME_LEN, MAX_TITLE_LEN,
};
