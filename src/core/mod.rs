pub mod config;
pub mod download;
pub mod gng;
pub mod package;
pub mod profile;
pub mod scope;
