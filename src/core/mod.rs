//! Core domain modules.

pub mod logging;
pub mod name_gen;
