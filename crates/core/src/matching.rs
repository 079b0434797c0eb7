//! First-match lookup over an ordered asset sequence.
//!
//! Record order is outermost: the earliest asset with any matching field
//! wins, and field priority (name, model, IP address) only decides which
//! field is reported for that asset. Matching is exact and case-insensitive.

use crate::types::{Asset, CanonicalField};

/// A successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetMatch<'a> {
    pub asset: &'a Asset,
    /// Position of the asset in catalog order.
    pub index: usize,
    /// Highest-priority field that equals the query.
    pub field: CanonicalField,
}

/// Return the first asset with a field equal to `query`, ignoring case.
///
/// The query is trimmed first; an empty query never matches, even against
/// empty fields.
pub fn find_first_match<'a>(assets: &'a [Asset], query: &str) -> Option<AssetMatch<'a>> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    let folded = query.to_lowercase();

    assets.iter().enumerate().find_map(|(index, asset)| {
        asset
            .fields()
            .into_iter()
            .find(|(_, value)| eq_folded(value, &folded))
            .map(|(field, _)| AssetMatch {
                asset,
                index,
                field,
            })
    })
}

/// Compare `value` against a query already folded with `str::to_lowercase`.
///
/// Both sides must go through the same folding: `str::to_lowercase` is
/// context sensitive (word-final sigma), `char::to_lowercase` is not.
fn eq_folded(value: &str, folded: &str) -> bool {
    if value.is_ascii() && folded.is_ascii() {
        value.eq_ignore_ascii_case(folded)
    } else {
        value.to_lowercase() == folded
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn assets() -> Vec<Asset> {
        vec![
            Asset::new("Router1", "X100", "10.0.0.1"),
            Asset::new("Router2", "X100", "10.0.0.2"),
            Asset::new("X100", "Z9", "10.0.0.3"),
            Asset::new("Switch", "S1", "10.0.0.1"),
        ]
    }

    #[test]
    fn matches_by_ip_address() {
        let assets = assets();
        let found = find_first_match(&assets, "10.0.0.2").unwrap();
        assert_eq!(found.asset.name, "Router2");
        assert_eq!(found.field, CanonicalField::IpAddress);
    }

    #[test]
    fn earliest_asset_wins_on_duplicates() {
        let assets = assets();
        let found = find_first_match(&assets, "10.0.0.1").unwrap();
        assert_eq!(found.index, 0);
    }

    #[test]
    fn record_order_beats_field_priority() {
        // "X100" is the model of asset 0 and the name of asset 2.
        let assets = assets();
        let found = find_first_match(&assets, "X100").unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.field, CanonicalField::Model);
    }

    #[test]
    fn field_priority_breaks_ties_within_one_asset() {
        let assets = vec![Asset::new("dup", "dup", "dup")];
        let found = find_first_match(&assets, "dup").unwrap();
        assert_eq!(found.field, CanonicalField::Name);
    }

    #[test]
    fn match_is_case_insensitive() {
        let assets = assets();
        assert_eq!(find_first_match(&assets, "router2").unwrap().index, 1);
        assert_eq!(find_first_match(&assets, "SWITCH").unwrap().index, 3);
    }

    #[test]
    fn non_ascii_match_is_case_insensitive() {
        let assets = vec![Asset::new("Ünterwelt", "Ω-1", "10.1.1.1")];
        assert!(find_first_match(&assets, "ünterwelt").is_some());
        assert!(find_first_match(&assets, "ω-1").is_some());
    }

    #[test]
    fn word_final_sigma_matches_itself() {
        let assets = vec![Asset::new("ΟΔΟΣ", "M", "10.0.0.1")];
        assert!(find_first_match(&assets, "ΟΔΟΣ").is_some());
        assert!(find_first_match(&assets, "οδος").is_some());
    }

    #[test]
    fn query_is_trimmed() {
        let assets = assets();
        assert_eq!(find_first_match(&assets, "  Switch \n").unwrap().index, 3);
    }

    #[test]
    fn substrings_do_not_match() {
        let assets = assets();
        assert!(find_first_match(&assets, "Router").is_none());
        assert!(find_first_match(&assets, "10.0.0").is_none());
    }

    #[test]
    fn unknown_value_is_no_match() {
        assert!(find_first_match(&assets(), "NoSuchValue").is_none());
    }

    #[test]
    fn empty_and_blank_queries_never_match() {
        let assets = vec![Asset::new("", "", "")];
        assert!(find_first_match(&assets, "").is_none());
        assert!(find_first_match(&assets, "   ").is_none());
    }

    #[test]
    fn repeated_lookups_are_deterministic() {
        let assets = assets();
        let first = find_first_match(&assets, "x100");
        for _ in 0..10 {
            assert_eq!(find_first_match(&assets, "x100"), first);
        }
    }

    #[test]
    fn scans_large_catalogs() {
        let assets: Vec<Asset> = (0..20_000)
            .map(|i| Asset::new(format!("host-{i}"), "M", format!("10.{}.{}.1", i / 256, i % 256)))
            .collect();
        let found = find_first_match(&assets, "HOST-19999").unwrap();
        assert_eq!(found.index, 19_999);
    }
}
