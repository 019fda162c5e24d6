//! Integration tests for hierarchical classification facet paths, driven
//! through full record processing.

use shelfkey::{process_record, tables, Item, RecordInput};

fn record_with(callnum: &str, hint: &str) -> RecordInput {
    RecordInput {
        items: vec![
            Item::new("36105000000001", Some(callnum.to_string()), hint, "GREEN")
                .with_home_location("STACKS"),
        ],
        is_serial: false,
        has_gov_doc_number: false,
    }
}

fn facets(input: &RecordInput) -> Vec<String> {
    process_record(input, tables::default_tables())
        .facet_paths
        .iter()
        .map(ToString::to_string)
        .collect()
}

fn single_facet(callnum: &str, hint: &str) -> Option<String> {
    let mut paths = facets(&record_with(callnum, hint));
    assert!(paths.len() <= 1, "expected at most one path, got {paths:?}");
    paths.pop()
}

#[test]
fn single_letter_lc_classes_repeat_top_level() {
    assert_eq!(
        single_facet("D764.7 .K72 1990", "LC").as_deref(),
        Some("LC Classification|D - World History|D - World History")
    );
    assert_eq!(
        single_facet("F1356 .M464 2005", "LC").as_deref(),
        Some("LC Classification|F - History of the Americas (Local)|F - History of the Americas (Local)")
    );
    assert_eq!(
        single_facet("M2 .C17 L3 2005", "LC").as_deref(),
        Some("LC Classification|M - Music|M - Music")
    );
    assert_eq!(
        single_facet("U897 .C87 Z55 2001", "LC").as_deref(),
        Some("LC Classification|U - Military Science|U - Military Science")
    );
    assert_eq!(
        single_facet("Z3871.Z8", "LC").as_deref(),
        Some("LC Classification|Z - Bibliography, Library Science, Information Resources|Z - Bibliography, Library Science, Information Resources")
    );
}

#[test]
fn two_letter_lc_classes_map_to_subclass_labels() {
    assert_eq!(
        single_facet("QE538.8 .N36 1975-1977", "LC").as_deref(),
        Some("LC Classification|Q - Science|QE - Geology")
    );
    assert_eq!(
        single_facet("BX4659 .E85 W44", "LC").as_deref(),
        Some("LC Classification|B - Philosophy, Psychology, Religion|BX - Christian Denominations")
    );
    assert_eq!(
        single_facet("HG6046 .V28 1986", "LC").as_deref(),
        Some("LC Classification|H - Social Sciences|HG - Finance")
    );
}

#[test]
fn three_letter_lc_classes_map_to_subclass_labels() {
    assert_eq!(
        single_facet("KKX500 .S98 2005", "LC").as_deref(),
        Some("LC Classification|K - Law|KKX - Law of Turkey")
    );
    assert_eq!(
        single_facet("KJV4189 .A67 A15 2014", "LC").as_deref(),
        Some("LC Classification|K - Law|KJV - Law of France")
    );
}

#[test]
fn unmapped_lc_class_surfaces_raw_code() {
    assert_eq!(
        single_facet("KFC1050 .C35 2014", "LC").as_deref(),
        Some("LC Classification|K - Law|KFC")
    );
}

#[test]
fn lc_periodical_hint_treated_as_lc() {
    assert_eq!(
        single_facet("K6 .A2173 V.25:NO.1-6 2007", "LCPER").as_deref(),
        Some("LC Classification|K - Law|K - Law")
    );
    assert_eq!(
        single_facet("E184.S75 R47A V.1 1980", "LCPER").as_deref(),
        Some("LC Classification|E - History of the Americas (General)|E - History of the Americas (General)")
    );
}

#[test]
fn lc_shape_typed_dewey_reclassifies_to_lc() {
    for hint in ["DEWEY", "DEWEYPER"] {
        assert_eq!(
            single_facet("QE538.8 .N36 1975-1977", hint).as_deref(),
            Some("LC Classification|Q - Science|QE - Geology"),
            "hint {hint}"
        );
    }
}

#[test]
fn invalid_lc_shapes_produce_no_facet() {
    for cn in [
        "QE538.8 .NB36 1975-1977",
        "(V) JN6695 .I28 1999 COPY",
        "???",
        "158613F868 .C45 N37 2000",
        "5115126059 A17 2004",
        "70 03126",
        "INTERNET RESOURCE KF3400 .S36 2009",
    ] {
        assert_eq!(single_facet(cn, "LC"), None, "{cn}");
    }
}

#[test]
fn lc_unused_first_letters_produce_no_facet() {
    for cn in [
        "ICAO DOC 4444/15TH ED",
        "ORNL-6371",
        "X X",
        "XM98-1 NO.1",
        "YBP1834690",
    ] {
        assert_eq!(single_facet(cn, "LC"), None, "{cn}");
    }
}

#[test]
fn dewey_shape_typed_lc_reclassifies_to_dewey() {
    assert_eq!(
        single_facet("180.8 D25 V.1", "LC").as_deref(),
        Some("Dewey Classification|100s - Philosophy & Psychology|180s - Ancient, Medieval, Oriental Philosophy")
    );
    assert_eq!(
        single_facet("219.7 K193L V.5", "LC").as_deref(),
        Some("Dewey Classification|200s - Religion|210s - Natural Theology")
    );
}

#[test]
fn dewey_hundreds_and_tens_labels() {
    assert_eq!(
        single_facet("159.32 .W211", "DEWEY").as_deref(),
        Some("Dewey Classification|100s - Philosophy & Psychology|150s - Psychology")
    );
    assert_eq!(
        single_facet("550.6 .U58P NO.1707", "DEWEY").as_deref(),
        Some("Dewey Classification|500s - Science|550s - Earth Sciences")
    );
    assert_eq!(
        single_facet("370.6 .N28 V.113:PT.1", "DEWEYPER").as_deref(),
        Some("Dewey Classification|300s - Social Sciences|370s - Education")
    );
}

#[test]
fn dewey_class_padded_before_prefixing() {
    for cn in ["062 .B862 V.193", "62 .B862 V.193"] {
        assert_eq!(
            single_facet(cn, "DEWEY").as_deref(),
            Some("Dewey Classification|000s - Computer Science, Information & General Works|060s - General Organization & Museology"),
            "{cn}"
        );
    }
}

#[test]
fn sudoc_items_get_gov_doc_facet() {
    let input = RecordInput {
        items: vec![
            Item::new("b1", Some("I 19.76:97-600-C".to_string()), "SUDOC", "GREEN")
                .with_home_location("FED-DOCS"),
        ],
        is_serial: false,
        has_gov_doc_number: false,
    };
    assert_eq!(facets(&input), vec!["Government Document|Federal".to_string()]);
}

#[test]
fn gov_doc_location_adds_facet_beside_classification() {
    let input = RecordInput {
        items: vec![
            Item::new("b1", Some("QE538.8 .N36".to_string()), "LC", "GREEN")
                .with_home_location("CALIF-DOCS"),
        ],
        is_serial: false,
        has_gov_doc_number: false,
    };
    assert_eq!(
        facets(&input),
        vec![
            "LC Classification|Q - Science|QE - Geology".to_string(),
            "Government Document|California".to_string(),
        ]
    );
}

#[test]
fn record_gov_doc_number_forces_gov_doc_facet() {
    let input = RecordInput {
        items: vec![
            Item::new("b1", Some("QE538.8 .N36".to_string()), "LC", "GREEN")
                .with_home_location("STACKS"),
        ],
        is_serial: false,
        has_gov_doc_number: true,
    };
    let paths = facets(&input);
    assert!(paths.contains(&"Government Document|Other".to_string()), "{paths:?}");
}

#[test]
fn skipped_and_marker_callnums_produce_no_facet() {
    for (cn, hint) in [
        ("NO CALL NUMBER", "ASIS"),
        ("IN PROCESS", "ASIS"),
        ("INTERNET RESOURCE", "ASIS"),
        ("XX(6661112.1)", "LC"),
    ] {
        assert_eq!(single_facet(cn, hint), None, "{cn}");
    }
}

#[test]
fn empty_callnums_produce_no_facet() {
    for raw in [None, Some(""), Some(" "), Some(". . ")] {
        let input = RecordInput {
            items: vec![
                Item::new("b1", raw.map(String::from), "LC", "GREEN")
                    .with_home_location("STACKS"),
            ],
            is_serial: false,
            has_gov_doc_number: false,
        };
        assert!(facets(&input).is_empty(), "{raw:?}");
    }
}

#[test]
fn missing_and_lost_items_produce_no_facet() {
    for loc in ["MISSING", "LOST-ASSUM", "LOST-CLAIM", "LOST-PAID"] {
        let input = RecordInput {
            items: vec![
                Item::new("b1", Some("M123 .M456".to_string()), "LC", "GREEN")
                    .with_home_location(loc),
            ],
            is_serial: false,
            has_gov_doc_number: false,
        };
        assert!(facets(&input).is_empty(), "home {loc}");

        let input = RecordInput {
            items: vec![
                Item::new("b1", Some("M123 .M456".to_string()), "LC", "GREEN")
                    .with_home_location("STACKS")
                    .with_current_location(loc),
            ],
            is_serial: false,
            has_gov_doc_number: false,
        };
        assert!(facets(&input).is_empty(), "current {loc}");
    }
}

#[test]
fn bad_lane_lc_produces_no_facet_but_valid_lane_lc_does() {
    let input = RecordInput {
        items: vec![
            Item::new("b1", Some("XX13413".to_string()), "LC", "LANE-MED")
                .with_home_location("ASK@LANE"),
        ],
        is_serial: false,
        has_gov_doc_number: false,
    };
    assert!(facets(&input).is_empty());

    let input = RecordInput {
        items: vec![
            Item::new("b1", Some("M123 .M456".to_string()), "LC", "LANE-MED")
                .with_home_location("ASK@LANE"),
        ],
        is_serial: false,
        has_gov_doc_number: false,
    };
    assert_eq!(
        facets(&input),
        vec!["LC Classification|M - Music|M - Music".to_string()]
    );
}

#[test]
fn alphanum_typed_as_lc_produces_no_facet() {
    for cn in ["1ST AMERICAN BANCORP, INC.", "2 B SYSTEM INC."] {
        assert_eq!(single_facet(cn, "LC"), None, "{cn}");
    }
}

#[test]
fn same_class_items_share_one_facet_and_different_classes_add_paths() {
    let same = RecordInput {
        items: vec![
            Item::new("b1", Some("ML171 .L38 2005".to_string()), "LC", "GREEN")
                .with_home_location("STACKS"),
            Item::new("b2", Some("ML171 .L38 2005 COPY 2".to_string()), "LC", "GREEN")
                .with_home_location("STACKS"),
        ],
        is_serial: false,
        has_gov_doc_number: false,
    };
    assert_eq!(
        facets(&same),
        vec!["LC Classification|M - Music|ML - Literature on Music".to_string()]
    );

    let diff = RecordInput {
        items: vec![
            Item::new("b1", Some("ML171 .L38 2005".to_string()), "LC", "GREEN")
                .with_home_location("STACKS"),
            Item::new("b2", Some("M2 .C17 L3 2005".to_string()), "LC", "GREEN")
                .with_home_location("STACKS"),
        ],
        is_serial: false,
        has_gov_doc_number: false,
    };
    assert_eq!(
        facets(&diff),
        vec![
            "LC Classification|M - Music|ML - Literature on Music".to_string(),
            "LC Classification|M - Music|M - Music".to_string(),
        ]
    );
}
