use std::io::Cursor;

use bytes::Bytes;
use image::ImageFormat;

pub const THUMBNAIL_EDGE: u32 = 256;

/// Best-effort preview thumbnail for raster uploads. Formats the image
/// crate cannot decode simply get no preview; generation never depends on
/// this.
pub fn render_thumbnail(data: &[u8]) -> Option<Bytes> {
    let img = image::load_from_memory(data).ok()?;
    let thumb = img.thumbnail(THUMBNAIL_EDGE, THUMBNAIL_EDGE);

    let mut out = Cursor::new(Vec::new());
    thumb.write_to(&mut out, ImageFormat::Png).ok()?;
    Some(Bytes::from(out.into_inner()))
}
