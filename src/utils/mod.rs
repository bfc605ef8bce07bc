//! # Utilities Module
//!
//! Utility functions for lists, vector math, and colors.

pub mod color;
pub mod list;
pub mod vector;

pub use color::*;
pub use list::*;
pub use vector::*;
