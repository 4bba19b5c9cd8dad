//! Networking: the `gloo-net` implementation of the design backend.

pub mod api;
