//! Controllers layer - orchestration and coordination.
//!
//! This module contains controllers that coordinate between
//! domain models, widgets, and the document layer:
//! - Editor registry and visibility switching

pub mod editors;
