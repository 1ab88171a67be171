//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use std::time::Duration;

use usercard::{ProfileState, ProfileWatcher};

/// Encode a solid-color RGBA PNG for serving as an icon.
pub fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba(rgba));
    let mut out = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut out), image::ImageFormat::Png)
        .expect("encode png");
    out
}

/// Wait until the published state satisfies `pred`, or panic after 5s.
///
/// Checks the current snapshot first, so a publication that landed
/// before the call still counts.
pub async fn wait_for<F>(watcher: &mut ProfileWatcher, mut pred: F) -> ProfileState
where
    F: FnMut(&ProfileState) -> bool,
{
    tokio::time::timeout(Duration::from_secs(5), async {
        let mut snapshot = watcher.current();
        while !pred(&snapshot) {
            snapshot = watcher
                .changed()
                .await
                .expect("session closed while waiting");
        }
        snapshot
    })
    .await
    .expect("timed out waiting for published state")
}
