//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `flags`, `session`) so individual
//! components can depend on small focused models. Each struct is plain data;
//! the application root wraps them in `RwSignal`s provided via context.

pub mod chat;
pub mod flags;
pub mod session;
