use stockmeta::infrastructure::text_processing::{build_keywords, clean_keywords, FILLER_TERMS};

fn tokens(joined: &str) -> Vec<&str> {
    if joined.is_empty() {
        Vec::new()
    } else {
        joined.split(", ").collect()
    }
}

#[test]
fn given_multiword_phrases_when_cleaning_then_keeps_first_words_and_dedupes() {
    assert_eq!(
        clean_keywords("Red Car, red car, blue Sky", true, ""),
        "red, blue"
    );
}

#[test]
fn given_dedupe_disabled_when_cleaning_then_keeps_duplicates_in_order() {
    assert_eq!(
        clean_keywords("Red Car, red car, blue Sky", false, ""),
        "red, red, blue"
    );
}

#[test]
fn given_mixed_separators_when_cleaning_then_splits_on_all_of_them() {
    assert_eq!(
        clean_keywords("sunset;ocean\nwave, sand", true, ""),
        "sunset, ocean, wave, sand"
    );
}

#[test]
fn given_extra_text_when_cleaning_then_appends_it_comma_joined() {
    assert_eq!(
        clean_keywords("sunset", true, "Golden Hour, beach"),
        "sunset, golden, beach"
    );
}

#[test]
fn given_blank_tokens_when_cleaning_then_drops_them() {
    assert_eq!(clean_keywords(",, ; \n  ,tree", true, ""), "tree");
}

#[test]
fn given_cleaned_output_when_cleaning_again_then_result_is_identical() {
    let once = clean_keywords("Red Car; blue sky\nred car", true, "");
    let twice = clean_keywords(&once, true, "");
    assert_eq!(once, twice);
}

#[test]
fn given_no_bulk_when_building_then_pads_with_filler_to_exact_count() {
    let result = build_keywords("cat, dog", "", true, 10);
    let list = tokens(&result);
    assert_eq!(list.len(), 10);
    assert_eq!(&list[..2], &["cat", "dog"]);
    for filler in &list[2..] {
        assert!(FILLER_TERMS.contains(filler), "unexpected filler: {filler}");
    }
}

#[test]
fn given_bulk_text_when_building_then_bulk_tokens_lead_in_their_own_order() {
    let result = build_keywords("cat, dog, fish", "zebra, cat", true, 6);
    let list = tokens(&result);
    assert_eq!(&list[..2], &["zebra", "cat"]);
    assert!(list.contains(&"dog"));
    assert!(list.contains(&"fish"));
    assert_eq!(list.len(), 6);
}

#[test]
fn given_more_content_than_target_when_building_then_truncates_to_target() {
    let result = build_keywords("a, b, c, d, e, f, g, h", "", true, 5);
    assert_eq!(tokens(&result).len(), 5);
    assert_eq!(result, "a, b, c, d, e");
}

#[test]
fn given_filler_overlap_when_building_then_skips_terms_already_present() {
    // "background" and "design" lead the filler vocabulary; real content
    // already containing them must not produce duplicates.
    let result = build_keywords("background, design", "", true, 8);
    let list = tokens(&result);
    assert_eq!(list.len(), 8);
    let unique: std::collections::HashSet<&str> = list.iter().copied().collect();
    assert_eq!(unique.len(), list.len(), "duplicate entry in {result}");
}

#[test]
fn given_huge_target_when_building_then_stops_at_filler_exhaustion() {
    let result = build_keywords("cat", "", true, 500);
    let list = tokens(&result);
    assert!(list.len() <= 500);
    assert_eq!(list.len(), 1 + FILLER_TERMS.len());
}

#[test]
fn given_empty_everything_when_building_then_result_is_pure_filler() {
    let result = build_keywords("", "", true, 5);
    let list = tokens(&result);
    assert_eq!(list.len(), 5);
    assert_eq!(list, FILLER_TERMS[..5].to_vec());
}
