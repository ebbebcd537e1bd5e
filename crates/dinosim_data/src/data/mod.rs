//! Core data structures for the dino simulation.

pub mod entity;
pub mod stats;
pub mod world;
