//! Helper functions for async downloads and the audio event stream

use futures_util::Stream;

use crate::audio::{AudioEvent, AudioEventReceiver};
use crate::cache::{Asset, AssetCache};
use crate::utils::{detect_image_format, fetch_cached};

/// Download an image and make sure it is something we can decode
pub async fn load_image(
    client: reqwest::Client,
    cache: AssetCache,
    url: String,
    max_bytes: u64,
) -> Result<Asset, String> {
    let asset = fetch_cached(&client, &cache, &url, max_bytes)
        .await
        .map_err(|e| format!("{:#}", e))?;

    match detect_image_format(asset.as_ref()) {
        Some(format) => {
            tracing::debug!("Image {} is {}", url, format);
            Ok(asset)
        }
        None => Err(format!("{} is not a supported image", url)),
    }
}

/// Download a track body
pub async fn load_track(
    client: reqwest::Client,
    cache: AssetCache,
    url: String,
    max_bytes: u64,
) -> Result<Asset, String> {
    let asset = fetch_cached(&client, &cache, &url, max_bytes)
        .await
        .map_err(|e| format!("{:#}", e))?;
    if asset.is_empty() {
        return Err(format!("{} returned an empty body", url));
    }
    Ok(asset)
}

/// Forward audio thread events until the thread exits
pub fn audio_events(mut rx: AudioEventReceiver) -> impl Stream<Item = Option<AudioEvent>> {
    async_stream::stream! {
        while let Some(event) = rx.recv().await {
            yield Some(event);
        }
        // Channel closed: the audio thread is gone
        yield None;
    }
}
