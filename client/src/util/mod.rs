//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (document metadata,
//! `localStorage`, route guards) from page and component logic.

pub mod config;
pub mod guard;
pub mod storage;
