pub mod common;
pub mod gallery;
pub mod image;
pub mod upload;

pub use common::*;
pub use gallery::*;
pub use image::*;
pub use upload::*;
