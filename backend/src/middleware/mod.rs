//! Actix middleware owned by the backend.

pub mod trace;

pub use trace::Trace;
