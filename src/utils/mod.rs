//! Small helpers shared by the config and CLI modules.

pub mod path;
pub mod plural;
