use std::collections::HashMap;

use tracing::debug;

use super::store::ColorCatalog;
use crate::core::record::{ColorQuery, SearchableRecord};
use crate::matching::distance::rgb_distance;
use crate::utils::validation::normalize_hex;

/// Number of suggestions returned by a nearest-match search unless asked otherwise
pub const DEFAULT_NEAREST: usize = 3;

/// Flattened, read-only view of a catalog answering exact and nearest queries
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    /// All records in catalog build order
    records: Vec<SearchableRecord>,

    /// Index: lowercase `#rrggbb` -> indices of records with that hex
    hex_to_records: HashMap<String, Vec<usize>>,
}

impl CatalogIndex {
    /// Flatten every hue of the catalog into records.
    ///
    /// Hues are visited in catalog order; within a hue, direct values come first
    /// in key order, then each group's colors in declared order.
    pub fn build(catalog: &ColorCatalog) -> Self {
        let records: Vec<SearchableRecord> = catalog
            .hues()
            .iter()
            .flat_map(|hue| {
                hue.members()
                    .filter_map(move |member| SearchableRecord::from_member(&hue.name, &member))
            })
            .collect();

        let mut hex_to_records: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, record) in records.iter().enumerate() {
            hex_to_records
                .entry(record.hex.clone())
                .or_default()
                .push(idx);
        }

        debug!(
            records = records.len(),
            distinct_hexes = hex_to_records.len(),
            "Built catalog index"
        );

        Self {
            records,
            hex_to_records,
        }
    }

    /// All records with this hex (case-insensitive, `#` optional), in build order.
    /// Unknown or malformed hex yields an empty list.
    pub fn find_by_hex(&self, hex: &str) -> Vec<&SearchableRecord> {
        let Some(hex) = normalize_hex(hex) else {
            return Vec::new();
        };

        self.hex_to_records
            .get(&hex)
            .map(|indices| indices.iter().map(|&idx| &self.records[idx]).collect())
            .unwrap_or_default()
    }

    /// The `k` records closest to the query in plain RGB space.
    /// Ties keep build order.
    pub fn find_nearest(&self, query: &ColorQuery, k: usize) -> Vec<&SearchableRecord> {
        self.find_nearest_with_distance(query, k)
            .into_iter()
            .map(|(record, _)| record)
            .collect()
    }

    /// Like [`find_nearest`](Self::find_nearest), with the distance of each record
    pub fn find_nearest_with_distance(
        &self,
        query: &ColorQuery,
        k: usize,
    ) -> Vec<(&SearchableRecord, f64)> {
        if k == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(&SearchableRecord, f64)> = self
            .records
            .iter()
            .map(|record| (record, rgb_distance(query.rgb, record.rgb)))
            .collect();

        // sort_by is stable, so equal distances stay in build order
        scored.sort_by(|a, b| a.1.total_cmp(&b.1));
        scored.truncate(k);
        scored
    }

    /// All records in build order
    pub fn records(&self) -> &[SearchableRecord] {
        &self.records
    }

    /// Records belonging to one hue, in build order
    pub fn records_for_hue<'a>(
        &'a self,
        hue_name: &'a str,
    ) -> impl Iterator<Item = &'a SearchableRecord> + 'a {
        self.records.iter().filter(move |r| r.hue_name == hue_name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ColorValue, HueEntry, Rgb};

    fn make_test_catalog() -> ColorCatalog {
        let mut catalog = ColorCatalog::new();
        catalog
            .add_hue(
                HueEntry::new("red")
                    .with_value("500", ColorValue::new("#f44336"))
                    .with_value("900", ColorValue::new("#b71c1c"))
                    .with_group(
                        Some("accent"),
                        vec![ColorValue::new("#ff5252").with_name("a200")],
                    ),
            )
            .unwrap();
        catalog
            .add_hue(
                HueEntry::new("crimson")
                    .with_value("base", ColorValue::new("#F44336").with_name("primary")),
            )
            .unwrap();
        catalog
    }

    #[test]
    fn test_build_order() {
        let index = CatalogIndex::build(&make_test_catalog());
        let names: Vec<_> = index
            .records()
            .iter()
            .map(|r| format!("{}/{}", r.hue_name, r.qualified_value_name()))
            .collect();
        assert_eq!(
            names,
            vec!["red/500", "red/900", "red/accent-a200", "crimson/primary"]
        );
    }

    #[test]
    fn test_find_by_hex_shared_hex() {
        let index = CatalogIndex::build(&make_test_catalog());

        let found = index.find_by_hex("#F44336");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].hue_name, "red");
        assert_eq!(found[1].hue_name, "crimson");

        assert_eq!(index.find_by_hex("f44336").len(), 2);
    }

    #[test]
    fn test_find_by_hex_missing() {
        let index = CatalogIndex::build(&make_test_catalog());
        assert!(index.find_by_hex("#123456").is_empty());
        assert!(index.find_by_hex("not a color").is_empty());
    }

    #[test]
    fn test_find_nearest_exact_first() {
        let index = CatalogIndex::build(&make_test_catalog());
        let query = ColorQuery::from_hex("#b71c1c").unwrap();

        let nearest = index.find_nearest_with_distance(&query, 3);
        assert_eq!(nearest.len(), 3);
        assert_eq!(nearest[0].0.value_name, "900");
        assert!(nearest[0].1.abs() < f64::EPSILON);
        assert!(nearest.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_find_nearest_ties_keep_build_order() {
        let index = CatalogIndex::build(&make_test_catalog());
        let query = ColorQuery::new(Rgb::new(0xf4, 0x43, 0x36));

        let nearest = index.find_nearest(&query, 2);
        assert_eq!(nearest[0].hue_name, "red");
        assert_eq!(nearest[1].hue_name, "crimson");
    }

    #[test]
    fn test_find_nearest_limits() {
        let index = CatalogIndex::build(&make_test_catalog());
        let query = ColorQuery::from_hex("#000000").unwrap();

        assert!(index.find_nearest(&query, 0).is_empty());
        assert_eq!(index.find_nearest(&query, 10).len(), index.len());
    }

    #[test]
    fn test_empty_catalog() {
        let index = CatalogIndex::build(&ColorCatalog::new());
        let query = ColorQuery::from_hex("#ffffff").unwrap();

        assert!(index.is_empty());
        assert!(index.find_nearest(&query, DEFAULT_NEAREST).is_empty());
        assert!(index.find_by_hex("#ffffff").is_empty());
    }

    #[test]
    fn test_alpha_ignored_for_matching() {
        let index = CatalogIndex::build(&make_test_catalog());
        let opaque = ColorQuery::from_hex("#ff0000").unwrap();
        let translucent = opaque.with_alpha(0.25);

        assert_eq!(
            index.find_nearest(&opaque, 3),
            index.find_nearest(&translucent, 3)
        );
    }

    #[test]
    fn test_records_for_hue() {
        let index = CatalogIndex::build(&make_test_catalog());
        assert_eq!(index.records_for_hue("red").count(), 3);
        assert_eq!(index.records_for_hue("crimson").count(), 1);
        assert_eq!(index.records_for_hue("blue").count(), 0);
    }
}
