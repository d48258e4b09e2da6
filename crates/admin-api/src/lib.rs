//! Admin console HTTP surface.

pub mod server;
