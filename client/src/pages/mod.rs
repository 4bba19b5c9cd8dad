//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route guard and form state and delegates rendering
//! details to `components` and requests to `crate::actions`.

pub mod login;
pub mod workspace;
