pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod logger;
pub mod models;
pub mod normalize;

pub use client::{GalleryClient, ImageClient, PixGenClient, UploadClient};
pub use config::{CredentialStore, PixGenConfig};
pub use error::{PixGenError, Result};
