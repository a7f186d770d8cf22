mod gallery;

pub use gallery::{build_gallery, GalleryScene};
