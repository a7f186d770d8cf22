pub mod camera;
pub mod capture;
pub mod cli;
pub mod config;
pub mod core;
pub mod entities;
pub mod highlight;
pub mod hud;
pub mod interaction;
pub mod math;
pub mod movement;
pub mod picking;
pub mod player;
pub mod projects;
pub mod scene;
pub mod scenes;
pub mod session;
pub mod visit;

pub use scenes::{build_gallery, GalleryScene};
pub use session::{GalleryEvent, GallerySession};
