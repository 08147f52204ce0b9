// src/core/mod.rs

pub mod dialect;
pub mod engine;
pub mod generator;
pub mod infinitive;
pub mod inventory;
pub mod splitter;
pub mod tone;
pub mod types;
