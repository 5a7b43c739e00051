//! Rendering helpers shared by the view.

pub mod markdown;
