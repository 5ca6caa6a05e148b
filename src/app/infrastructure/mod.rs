//! Infrastructure layer - the seams to external widgets and shared plumbing.
//!
//! This module contains code that interfaces with the host toolkit:
//! - Widget and display-area traits
//! - Change notification and its suppression guard
//! - Error types

pub mod error;
pub mod widget;
