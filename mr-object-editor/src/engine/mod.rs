pub mod assets;
pub mod core;
pub mod input;
pub mod pose;
pub mod runtime;
pub mod scene_bridge;
