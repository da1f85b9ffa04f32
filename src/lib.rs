pub mod app;
pub mod config;
pub mod input;

#[cfg(windows)]
pub mod platform;

pub mod utils;

#[cfg(test)]
mod tests;
