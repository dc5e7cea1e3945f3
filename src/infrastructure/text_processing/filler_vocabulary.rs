/// Generic single-word terms used to pad keyword lists toward the target
/// count once bulk and generated keywords are exhausted.
pub const FILLER_TERMS: &[&str] = &[
    "background",
    "design",
    "illustration",
    "vector",
    "art",
    "modern",
    "abstract",
    "creative",
    "graphic",
    "element",
    "decoration",
    "style",
    "concept",
    "template",
    "banner",
    "poster",
    "symbol",
    "icon",
    "sign",
    "texture",
    "pattern",
    "wallpaper",
    "color",
    "colorful",
    "bright",
    "beautiful",
    "simple",
    "minimal",
    "trendy",
    "decorative",
    "drawing",
    "image",
    "picture",
    "visual",
    "artwork",
    "digital",
    "isolated",
    "collection",
    "set",
    "card",
    "label",
    "badge",
    "emblem",
    "shape",
    "line",
    "flat",
    "cartoon",
    "silhouette",
    "elegant",
    "vintage",
    "retro",
    "celebration",
    "holiday",
    "nature",
    "business",
    "technology",
    "education",
    "travel",
    "food",
    "health",
];
