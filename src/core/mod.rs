// src/core/mod.rs

pub mod color;
pub mod html;
pub mod sanitize;
