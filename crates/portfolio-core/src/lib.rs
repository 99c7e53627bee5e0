pub mod constants;
pub mod content;
pub mod form;
pub mod particle;
pub mod pointer;
pub mod reveal;
pub mod tween;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use form::*;
pub use particle::*;
pub use pointer::*;
pub use reveal::*;
pub use tween::*;
