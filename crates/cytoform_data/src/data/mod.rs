//! Core data structures for cell body plans.

pub mod compound;
pub mod hex;
pub mod membrane;
pub mod organelle;
pub mod registry;
pub mod storage;
