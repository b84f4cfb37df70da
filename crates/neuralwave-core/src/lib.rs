pub mod camera;
pub mod constants;
pub mod geometry;
pub mod graph;
pub mod instances;
pub mod osc;
pub mod profile;
pub mod scene;
pub mod shapes;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use graph::*;
pub use instances::*;
pub use profile::*;
pub use scene::*;
pub use shapes::*;
