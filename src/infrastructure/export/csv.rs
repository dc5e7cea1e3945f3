use crate::domain::{Asset, Platform};

pub const CSV_HEADER: &str = "filename,title,keywords,description,platform";

/// Builds one CSV document: header plus one row per asset, rows
/// terminated by CRLF, every field double-quoted with inner quotes
/// doubled and embedded newlines collapsed to spaces.
pub fn build_csv(assets: &[&Asset], platform: Platform) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push_str("\r\n");

    for asset in assets {
        let row = [
            asset.source.file_name.as_str(),
            asset.title.as_str(),
            asset.keywords.as_str(),
            asset.description.as_str(),
            platform.as_str(),
        ]
        .iter()
        .map(|field| quote_field(field))
        .collect::<Vec<_>>()
        .join(",");

        out.push_str(&row);
        out.push_str("\r\n");
    }

    out
}

fn quote_field(value: &str) -> String {
    let flattened = value.replace("\r\n", " ").replace(['\r', '\n'], " ");
    format!("\"{}\"", flattened.replace('"', "\"\""))
}
