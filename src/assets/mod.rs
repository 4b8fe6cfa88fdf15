//! Asset store integration: folder layout, request signing and uploads

pub mod signature;
pub mod uploader;

// Re-exports for convenience
pub use signature::sign_upload;
pub use uploader::{folder_path, AssetStoreConfig, AssetUploader};
