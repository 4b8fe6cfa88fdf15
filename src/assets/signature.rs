use sha2::{Digest, Sha256};

/// Computes the signature for an upload request.
///
/// The asset store verifies a digest over the request parameters joined in
/// a fixed order, `folder=<path>&timestamp=<ts>&upload_preset=<preset>`,
/// followed by the shared secret. The scheme is order-sensitive: changing
/// any component (or reordering them) produces a different digest, so a
/// signature must be recomputed whenever folder, timestamp or preset
/// change. Rendered as lowercase hexadecimal.
pub fn sign_upload(folder: &str, timestamp: u64, upload_preset: &str, api_secret: &str) -> String {
    let payload = format!("folder={}&timestamp={}&upload_preset={}", folder, timestamp, upload_preset);

    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
