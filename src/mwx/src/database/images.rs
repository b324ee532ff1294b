//! Image checks against the exported artwork directory
//!
//! Only the image header is decoded, never the pixel data.

use crate::paths::Paths;
use std::path::Path;

/// Frame sizes of animated bundle billboards
pub const BUNDLE_FRAMES: &[(u32, u32)] = &[(1920, 580)];

/// Frame sizes of animated calling cards
pub const CALLING_CARD_FRAMES: &[(u32, u32)] = &[(512, 128), (512, 136), (960, 240)];

/// Frame sizes of animated emblems
pub const EMBLEM_FRAMES: &[(u32, u32)] = &[(256, 256)];

/// Frame sizes of animated weapon variant previews
pub const VARIANT_FRAMES: &[(u32, u32)] = &[(300, 400)];

/// Whether `<images>/<name>.png` exists
pub fn exists(paths: &Paths, name: &str) -> bool {
    paths.image(name).is_file()
}

/// Width and height of an image; `None` for anything unreadable.
pub fn png_size(path: &Path) -> Option<(u32, u32)> {
    image::image_dimensions(path).ok()
}

/// Whether a size is a vertical strip of several frames of one of `frames`
pub fn is_sprite_sheet(size: (u32, u32), frames: &[(u32, u32)]) -> bool {
    let (width, height) = size;
    frames.iter().any(|&(frame_width, frame_height)| {
        frame_height > 0
            && width == frame_width
            && height > frame_height
            && height % frame_height == 0
    })
}

/// Whether the named image is a sprite sheet of one of `frames`
pub fn animated(paths: &Paths, name: &str, frames: &[(u32, u32)]) -> bool {
    png_size(&paths.image(name)).is_some_and(|size| is_sprite_sheet(size, frames))
}
