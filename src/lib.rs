// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod merge;
pub mod persistence;
pub mod validate;

pub use crate::core::engine::RootEngine;
pub use crate::core::types::{
    Dataset, DialectalInfinitive, DialectalPair, Infinitive, Origin, PrimeRoot, Syllable, Tone,
    VowelGroup,
};
pub use crate::error::{ForgeError, InventoryError};
