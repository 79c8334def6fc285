//! Ferrous Neighbors Infrastructure Layer
pub mod system;
