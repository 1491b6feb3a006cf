pub mod app;
pub mod fs_op;
pub mod report;
pub mod runner;

pub use crate::app::settings::{load_settings, SeparatorChoice, Settings};
pub use crate::fs_op::path::{clean, join, join_native, Separator};
