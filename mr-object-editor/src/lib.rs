//! Place, select and edit catalog objects on real-world surfaces with pointer rays, hand
//! joysticks and a floating contextual menu.

pub mod engine;
pub mod tools;
