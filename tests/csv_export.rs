use bytes::Bytes;

use stockmeta::application::services::AssetCatalog;
use stockmeta::domain::{Platform, SourceFile};
use stockmeta::infrastructure::export::{
    build_csv, export_archive, partition_assets, ExportCategory, CSV_HEADER,
};

fn source(name: &str) -> SourceFile {
    SourceFile::new(
        name.to_string(),
        "application/octet-stream".to_string(),
        Bytes::from_static(b"bytes"),
    )
}

/// Minimal reader for the exact dialect the exporter writes: CRLF rows,
/// every field quoted, inner quotes doubled.
fn parse_csv(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for line in text.split("\r\n").filter(|l| !l.is_empty()).skip(1) {
        let mut fields = Vec::new();
        let mut chars = line.chars().peekable();
        while chars.peek().is_some() {
            assert_eq!(chars.next(), Some('"'), "field must start quoted: {line}");
            let mut field = String::new();
            loop {
                match chars.next() {
                    Some('"') => {
                        if chars.peek() == Some(&'"') {
                            chars.next();
                            field.push('"');
                        } else {
                            break;
                        }
                    }
                    Some(c) => field.push(c),
                    None => panic!("unterminated field: {line}"),
                }
            }
            fields.push(field);
            if chars.peek() == Some(&',') {
                chars.next();
            }
        }
        rows.push(fields);
    }
    rows
}

#[test]
fn given_quotes_and_newlines_when_exporting_then_round_trip_preserves_tuples() {
    let mut catalog = AssetCatalog::new();
    let id = catalog.add(source("tricky.png"), None);
    catalog.edit_title(id, "A \"quoted\" title");
    catalog.edit_keywords(id, "one, two, three");
    catalog.edit_description(id, "line one\nline two");

    let csv = build_csv(&catalog.iter().collect::<Vec<_>>(), Platform::Adobe);
    let rows = parse_csv(&csv);

    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            "tricky.png".to_string(),
            "A \"quoted\" title".to_string(),
            "one, two, three".to_string(),
            // Embedded newlines are collapsed to spaces by contract.
            "line one line two".to_string(),
            "adobe".to_string(),
        ]
    );
}

#[test]
fn given_assets_when_exporting_then_header_and_crlf_framing_hold() {
    let mut catalog = AssetCatalog::new();
    catalog.add(source("a.png"), None);
    catalog.add(source("b.png"), None);

    let csv = build_csv(&catalog.iter().collect::<Vec<_>>(), Platform::Freepik);

    assert!(csv.starts_with(&format!("{CSV_HEADER}\r\n")));
    assert!(csv.ends_with("\r\n"));
    assert_eq!(csv.matches("\r\n").count(), 3);
}

#[test]
fn given_mixed_extensions_when_partitioning_then_each_bucket_matches() {
    let mut catalog = AssetCatalog::new();
    catalog.add(source("one.ai"), None);
    catalog.add(source("two.eps"), None);
    catalog.add(source("three.svg"), None);
    catalog.add(source("four.png"), None);

    let partitions = partition_assets(catalog.assets());
    let by_category = |cat: ExportCategory| {
        partitions
            .iter()
            .find(|(c, _)| *c == cat)
            .map(|(_, members)| {
                members
                    .iter()
                    .map(|a| a.source.file_name.as_str())
                    .collect::<Vec<_>>()
            })
            .unwrap()
    };

    assert_eq!(by_category(ExportCategory::Ai), vec!["one.ai"]);
    assert_eq!(by_category(ExportCategory::Eps), vec!["two.eps"]);
    assert_eq!(by_category(ExportCategory::Svg), vec!["three.svg"]);
    assert_eq!(by_category(ExportCategory::General), vec!["four.png"]);
}

#[test]
fn given_only_vector_files_when_partitioning_then_general_falls_back_to_full_set() {
    let mut catalog = AssetCatalog::new();
    catalog.add(source("one.ai"), None);
    catalog.add(source("two.svg"), None);

    let partitions = partition_assets(catalog.assets());
    let general = partitions
        .iter()
        .find(|(c, _)| *c == ExportCategory::General)
        .map(|(_, members)| members.len())
        .unwrap();

    assert_eq!(general, 2);
}

#[test]
fn given_a_catalog_when_bundling_then_archive_contains_four_csv_files() {
    let mut catalog = AssetCatalog::new();
    catalog.add(source("a.png"), None);

    let archive = export_archive(catalog.assets(), Platform::Vecteezy).unwrap();

    // Zip local file headers carry the entry names in cleartext.
    let haystack = String::from_utf8_lossy(&archive).to_string();
    for name in [
        "metadata_ai.csv",
        "metadata_eps.csv",
        "metadata_svg.csv",
        "metadata_general.csv",
    ] {
        assert!(haystack.contains(name), "missing archive entry {name}");
    }
}
