//! Catalog Index and Format Renderer Property Tests
//!
//! Checks the lookup and rendering guarantees against both the embedded
//! palette and small synthetic catalogs.

use swatch_solver::format::{render, FormatData, FormatTemplate};
use swatch_solver::matching::distance::rgb_distance;
use swatch_solver::{CatalogIndex, ColorCatalog, ColorQuery, ColorValue, HueEntry, Rgb};

fn embedded_index() -> CatalogIndex {
    CatalogIndex::build(&ColorCatalog::load_embedded().expect("embedded catalog loads"))
}

fn small_catalog() -> ColorCatalog {
    let mut catalog = ColorCatalog::new();
    catalog
        .add_hue(
            HueEntry::new("red")
                .with_value("500", ColorValue::new("#f44336"))
                .with_group(
                    Some("accent"),
                    vec![ColorValue::new("#ff5252").with_name("a200")],
                ),
        )
        .unwrap();
    catalog
        .add_hue(HueEntry::new("tomato").with_value("base", ColorValue::new("#F44336")))
        .unwrap();
    catalog
}

/// Every record is found by its own hex, whatever the casing
#[test]
fn test_find_by_hex_membership() {
    let index = embedded_index();
    assert_eq!(index.len(), 256);

    for record in index.records() {
        for hex in [
            record.hex.clone(),
            record.hex.to_uppercase(),
            record.hex.trim_start_matches('#').to_string(),
        ] {
            let found = index.find_by_hex(&hex);
            assert!(
                found.contains(&record),
                "{record} not found by hex {hex}"
            );
        }
    }
}

#[test]
fn test_find_by_hex_absent() {
    let index = embedded_index();
    assert!(index.find_by_hex("#123457").is_empty());
}

/// A record's own hex is its nearest match at distance zero
#[test]
fn test_find_nearest_self_first() {
    let index = embedded_index();

    for record in index.records() {
        let query = ColorQuery::from_hex(&record.hex).unwrap();
        for k in [1, 3, 7] {
            let nearest = index.find_nearest_with_distance(&query, k);
            assert_eq!(nearest.len(), k);
            assert_eq!(nearest[0].0.hex, record.hex);
            assert!(nearest[0].1.abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_find_nearest_sorted_and_bounded() {
    let index = embedded_index();
    let queries = ["#000001", "#7f7f7f", "#abcdef", "#ff00ff", "#010203"];

    for hex in queries {
        let query = ColorQuery::from_hex(hex).unwrap();
        let nearest = index.find_nearest_with_distance(&query, 3);
        assert_eq!(nearest.len(), 3);
        assert!(nearest.windows(2).all(|w| w[0].1 <= w[1].1));

        // Nothing outside the result is closer than the last returned record
        let worst = nearest[2].1;
        let closer = index
            .records()
            .iter()
            .filter(|r| rgb_distance(query.rgb, r.rgb) < worst)
            .count();
        assert!(closer <= 2);
    }
}

#[test]
fn test_find_nearest_small_catalog() {
    let index = CatalogIndex::build(&small_catalog());
    let query = ColorQuery::from_hex("#000000").unwrap();

    let nearest = index.find_nearest(&query, 5);
    assert_eq!(nearest.len(), 3);

    // red 500 and tomato base share a hex; build order breaks the tie
    let query = ColorQuery::from_hex("#f44336").unwrap();
    let nearest = index.find_nearest(&query, 2);
    assert_eq!(nearest[0].hue_name, "red");
    assert_eq!(nearest[1].hue_name, "tomato");
}

#[test]
fn test_find_by_hex_shared_hex_order() {
    let index = CatalogIndex::build(&small_catalog());
    let found = index.find_by_hex("#F44336");
    let names: Vec<_> = found.iter().map(|r| r.hue_name.as_str()).collect();
    assert_eq!(names, vec!["red", "tomato"]);
}

#[test]
fn test_distance_symmetry() {
    let colors = [
        Rgb::new(0, 0, 0),
        Rgb::new(255, 255, 255),
        Rgb::new(18, 52, 86),
        Rgb::new(200, 10, 99),
    ];
    for &a in &colors {
        assert!(rgb_distance(a, a).abs() < f64::EPSILON);
        for &b in &colors {
            assert!((rgb_distance(a, b) - rgb_distance(b, a)).abs() < f64::EPSILON);
        }
    }
}

#[test]
fn test_render_examples() {
    let data = FormatData::new("light-blue", "500");
    let template = FormatTemplate::new("$HUE $VALUE").with_transform("Xx");
    assert_eq!(render(&template, &data), "Light Blue 500");

    let data = FormatData::new("light blue", "a100");
    let template = FormatTemplate::new("$HUE-$VALUE").with_transform("dX");
    assert_eq!(render(&template, &data), "LIGHTBLUE-A100");

    let data = FormatData::new("red", "500");
    let template = FormatTemplate::new("$ALPHA");
    assert_eq!(render(&template, &data), "100");
    assert_eq!(render(&template, &data.with_alpha(Some(0.5))), "50");

    let data = FormatData::new("", "a100").with_group("accent");
    assert_eq!(render(&FormatTemplate::new("$VALUE"), &data), "accent-a100");
}

#[test]
fn test_render_idempotent() {
    let template = FormatTemplate::new("$HUE/$VALUE/$ALPHA").with_transform("_Xx");
    let data = FormatData::new("deep-orange", "a400")
        .with_group("accent")
        .with_alpha(Some(0.75));

    let first = render(&template, &data);
    let second = render(&template, &data);
    assert_eq!(first, second);
    assert_eq!(first, "Deep_Orange/Accent-A400/75");
}

#[test]
fn test_render_embedded_record() {
    let index = embedded_index();
    let record = index.find_by_hex("#bf360c")[0];
    let data = FormatData::from_record(record);

    let template = FormatTemplate::new("$HUE $VALUE").with_transform("Xx");
    assert_eq!(render(&template, &data), "Deep Orange 900");
}
