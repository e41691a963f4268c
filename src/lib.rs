pub mod classify;
pub mod commands;
pub mod config;
pub mod error;
pub mod identity;
pub mod logging;
pub mod switch;
pub mod ui;
pub mod variants;

#[cfg(test)]
pub mod test_utils;
