//! DOS-like command shell over mounted storage volumes.
//!
//! The engine lives in [`core`]: a tokenizer, a drive registry mapping
//! console-style drive names onto host directories, a path resolver, and a
//! fixed table of built-in commands. The binary wraps it in a terminal REPL.

pub mod config;
pub mod core;
pub mod utils;
