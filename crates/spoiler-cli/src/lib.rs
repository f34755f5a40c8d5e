//! Library half of the `spoiler` command-line tool.

pub mod evaluate;
pub mod logging;
pub mod profile;
pub mod render;
