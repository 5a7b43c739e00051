//! Widget state.
//!
//! DESIGN
//! ======
//! State structs are plain data. The view wraps them in `RwSignal`s and
//! provides them through context; `client` mutates them through handles.

pub mod chat;
