//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs the route guard for its own route and owns its form
//! state.

pub mod home;
pub mod login;
