//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Each model is a plain struct held in an `RwSignal` provided via context.
//! The project directory and design workflow come straight from `studio`;
//! the types here cover what only the browser has (restore-in-progress flag,
//! notices, the sketch pad strokes).

pub mod notice;
pub mod session;
pub mod sketch;
