//! Vulkan tutorial asset fetcher
//!
//! This library provides the download, progress and extraction logic behind
//! the `vkassets` CLI.

pub mod commands;
pub mod core;
pub mod error;
pub mod utils;
