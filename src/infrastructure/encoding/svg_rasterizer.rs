use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

use crate::application::ports::EncodeError;

/// Canvas size used when the SVG carries no usable natural dimensions.
pub const FALLBACK_CANVAS_SIZE: u32 = 1024;

/// Renders an SVG document to PNG bytes at its natural size, falling back
/// to a square canvas when the size is degenerate.
pub(super) fn rasterize_svg(data: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let tree = Tree::from_data(data, &Options::default())
        .map_err(|e| EncodeError::Rasterize(format!("svg parse failed: {e}")))?;

    let size = tree.size();
    let natural_width = size.width().ceil() as u32;
    let natural_height = size.height().ceil() as u32;

    let (width, height) = if natural_width == 0 || natural_height == 0 {
        (FALLBACK_CANVAS_SIZE, FALLBACK_CANVAS_SIZE)
    } else {
        (natural_width, natural_height)
    };

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        EncodeError::Rasterize(format!("canvas allocation failed for {width}x{height}"))
    })?;

    let transform = if natural_width == 0 || natural_height == 0 {
        Transform::default()
    } else {
        Transform::from_scale(
            width as f32 / size.width(),
            height as f32 / size.height(),
        )
    };

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|e| EncodeError::Rasterize(format!("PNG encode failed: {e}")))
}
