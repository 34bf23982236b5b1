#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
pub mod loadout;
pub mod loadout_error;
pub mod percentage;
pub mod plate;
pub mod profile;
pub mod resolver;
pub mod scheme;
pub mod set;
pub mod template;
pub mod workout;
