mod payload_encoder;
mod svg_rasterizer;

pub use payload_encoder::{PayloadEncoder, SVG_SOURCE_LIMIT};
pub use svg_rasterizer::FALLBACK_CANVAS_SIZE;
