//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`equipment`, `form`, `toast`) so individual
//! components can depend on small focused models. Each model is a plain
//! struct provided to the tree as an `RwSignal` context; the operations are
//! pure and unit-tested without a browser.

pub mod equipment;
pub mod form;
pub mod toast;
