//! Command handlers, one module per command group.

pub mod apply;
pub mod demo;
pub mod history;
pub mod init;
pub mod misc;
pub mod report;
pub mod stock;
