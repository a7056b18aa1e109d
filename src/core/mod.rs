pub mod download;
pub mod extract;
pub mod manifest;
pub mod progress;
