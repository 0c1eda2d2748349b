pub mod cli;
pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod fs_ops;
pub mod stamper;
pub mod ui;
pub mod warning;

pub use error::{Result, StampError};
