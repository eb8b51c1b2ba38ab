//! Utility functions

use std::time::Duration;

use anyhow::{Context, Result, bail};
use futures_util::StreamExt;

use crate::cache::{Asset, AssetCache};

// ============================================================================
// Image Format Detection
// ============================================================================

/// Detect image format from magic bytes
///
/// Returns `None` when the bytes are not an image the renderer can decode,
/// for example an HTML error page served with a 200 status.
pub fn detect_image_format(bytes: &[u8]) -> Option<&'static str> {
    match image::guess_format(bytes).ok()? {
        image::ImageFormat::Png => Some("png"),
        image::ImageFormat::Jpeg => Some("jpg"),
        image::ImageFormat::Gif => Some("gif"),
        image::ImageFormat::WebP => Some("webp"),
        _ => None,
    }
}

// ============================================================================
// Downloads
// ============================================================================

/// Build the shared HTTP client
pub fn http_client(timeout: Duration) -> reqwest::Client {
    match reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("galeri/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::warn!("Failed to build HTTP client: {}, using defaults", e);
            reqwest::Client::new()
        }
    }
}

/// Download a URL body, refusing anything larger than `max_bytes`
pub async fn fetch_bytes(client: &reqwest::Client, url: &str, max_bytes: u64) -> Result<Vec<u8>> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to request {}", url))?
        .error_for_status()
        .with_context(|| format!("Bad response from {}", url))?;

    if let Some(len) = response.content_length() {
        if len > max_bytes {
            bail!("{} is {} bytes, limit is {}", url, len, max_bytes);
        }
    }

    let mut body = Vec::new();
    let mut stream = response.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.with_context(|| format!("Failed to read body of {}", url))?;
        if (body.len() + chunk.len()) as u64 > max_bytes {
            bail!("{} exceeds the {} byte limit", url, max_bytes);
        }
        body.extend_from_slice(&chunk);
    }

    tracing::debug!("Downloaded {} ({} bytes)", url, body.len());
    Ok(body)
}

/// Download through the in-memory cache
pub async fn fetch_cached(
    client: &reqwest::Client,
    cache: &AssetCache,
    url: &str,
    max_bytes: u64,
) -> Result<Asset> {
    if let Some(asset) = cache.get(url) {
        tracing::debug!("Cache hit for {}", url);
        return Ok(asset);
    }

    let asset = Asset::from(fetch_bytes(client, url, max_bytes).await?);
    cache.insert(url, asset.clone());
    Ok(asset)
}

// ============================================================================
// Formatting
// ============================================================================

/// Format a playback position as m:ss
pub fn format_position(position: Duration) -> String {
    let secs = position.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}
