//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the workspace panels and read/write shared state through
//! the signal handles in `crate::actions`.

pub mod design_preview;
pub mod design_result;
pub mod notice_banner;
pub mod project_list;
pub mod sketch_pad;
