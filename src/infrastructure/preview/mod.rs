mod thumbnail;

pub use thumbnail::{render_thumbnail, THUMBNAIL_EDGE};
