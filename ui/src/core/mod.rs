//! Platform-agnostic building blocks shared by the navbar and the views.

pub mod disclosure;
pub mod subscription;
pub mod viewport;
