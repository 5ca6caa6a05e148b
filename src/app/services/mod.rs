//! Services layer - concrete widgets and text helpers.
//!
//! This module contains:
//! - An in-memory editor widget and display area
//! - Text operations shared by them

pub mod memory_widget;
pub mod text_ops;

pub use memory_widget::{MemoryArea, MemoryWidget};
