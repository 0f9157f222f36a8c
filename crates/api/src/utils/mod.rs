//! Command plumbing shared by every command

pub mod command_helpers;
pub mod logging;
