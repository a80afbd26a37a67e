//! HTTP route handlers

pub mod board;
pub mod game;
pub mod status;
