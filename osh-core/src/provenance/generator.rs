//! Synthetic "+N data sources" entries. The drawer behind a field's
//! "+N data sources" link shows N additional contributions that the sample
//! dataset does not spell out record by record; this generator fabricates
//! them from a fixed name pool and a per-field table of plausible value
//! variants.
//!
//! Generation is a pure function of (count, field label, base value): the
//! RNG is seeded from the field label, so repeated renders of the same field
//! produce the same entries.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use crate::dataset::list_title;
use crate::domain::{ContributionEntry, ContributorType};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Types assigned to synthetic entries. Academic contributors never appear
/// in the fabricated drawers.
const TYPE_POOL: [ContributorType; 7] = [
    ContributorType::Brand,
    ContributorType::Auditor,
    ContributorType::Cso,
    ContributorType::Supplier,
    ContributorType::Msi,
    ContributorType::Union,
    ContributorType::Other,
];

/// Fixed pool of organization names cycled through for synthetic entries.
const NAME_POOL: [&str; 56] = [
    "Marks & Spencer",
    "Sainsbury's",
    "JD Williams",
    "SLCP",
    "International Accord Foundation",
    "OS Hub Research Team",
    "Worldly",
    "amfori",
    "H&M Group",
    "Inditex",
    "Target Corporation",
    "Walmart",
    "Gap Inc.",
    "Primark",
    "C&A",
    "Bestseller",
    "PVH Corp",
    "VF Corporation",
    "Levi Strauss & Co.",
    "Adidas",
    "Nike",
    "Puma",
    "ALDI",
    "Lidl",
    "Tchibo",
    "Otto Group",
    "Zalando",
    "ASOS",
    "Next plc",
    "Tesco",
    "Kmart Australia",
    "Woolworths Group",
    "Cotton On",
    "Patagonia",
    "The North Face",
    "Columbia Sportswear",
    "Under Armour",
    "New Balance",
    "ASICS",
    "Decathlon",
    "Intersport",
    "JD Sports",
    "Bureau Veritas",
    "SGS",
    "Intertek",
    "TÜV Rheinland",
    "WRAP",
    "BSCI",
    "Fair Trade USA",
    "GOTS",
    "OEKO-TEX",
    "Better Cotton",
    "Sedex",
    "EcoVadis",
    "Fair Wear Foundation",
    "ILO Better Work",
];

/// Value variants shown for fields where contributors commonly disagree.
static VALUE_VARIATIONS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    HashMap::from([
        (
            "Address",
            vec![
                "Pagar, Tongi, Gazipur, Dhaka 1710, Bangladesh",
                "Pagar, Tongi, Gazipur Dhaka Gazipur 1710 Dhaka - Bangladesh",
                "Tongi Industrial Area, Gazipur, Dhaka, Bangladesh",
                "Plot 12, Pagar Road, Tongi, Gazipur-1710",
                "Pagar Union, Tongi Upazila, Gazipur District, Bangladesh",
            ],
        ),
        (
            "Coordinates",
            vec![
                "23.896051, 90.418952",
                "23.8961, 90.4190",
                "23.896, 90.419",
                "23.89605, 90.41895",
            ],
        ),
        (
            "Industry / Sectors",
            vec![
                "General Merchandise",
                "Apparel",
                "Textiles",
                "Home Textiles",
                "Fabric Manufacturing",
            ],
        ),
        (
            "Sector",
            vec![
                "General Merchandise",
                "Apparel",
                "Textiles",
                "Home Textiles",
                "Fabric Manufacturing",
            ],
        ),
        (
            "Parent Company",
            vec!["Noman Group", "Noman Group Bangladesh", "The Noman Group"],
        ),
        (
            "Processing Type(s)",
            vec![
                "Final Product Assembly",
                "Cut Make Trim (CMT)",
                "Full Package",
                "Manufacturing",
            ],
        ),
        (
            "Number of Workers",
            vec!["8,281", "8,300", "8,250", "8,000+", "~8,300"],
        ),
    ])
});

/// FNV-1a fold of the field label into an RNG seed.
fn seed_for(field_label: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in field_label.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Produce `count` synthetic contribution entries for a field, sorted most
/// recent first by the derived `sort_value`.
pub fn generate_contributors(
    count: usize,
    field_label: &str,
    base_value: Option<&str>,
) -> Vec<ContributionEntry> {
    let mut rng = StdRng::seed_from_u64(seed_for(field_label));

    let fallback = vec![base_value.unwrap_or("Data submitted")];
    let variations = VALUE_VARIATIONS
        .get(field_label)
        .map(|v| v.as_slice())
        .unwrap_or(&fallback);

    let mut entries: Vec<ContributionEntry> = (0..count)
        .map(|i| {
            let name = NAME_POOL[i % NAME_POOL.len()];
            let contributor_type = TYPE_POOL[rng.gen_range(0..TYPE_POOL.len())];
            let month_index = rng.gen_range(0..12usize);
            // Weighted toward the most recent year.
            let year: i32 = if rng.gen::<f64>() > 0.3 { 2025 } else { 2024 };
            ContributionEntry {
                name: name.to_string(),
                contributor_type,
                contributed_at: format!("{} {}", MONTHS[month_index], year),
                sort_value: year * 12 + month_index as i32,
                value: variations[i % variations.len()].to_string(),
                list_title: list_title(name).map(str::to_string),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.sort_value.cmp(&a.sort_value));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_exactly_the_requested_count() {
        assert_eq!(generate_contributors(3, "Sector", None).len(), 3);
        assert_eq!(generate_contributors(0, "Sector", None).len(), 0);
        assert_eq!(generate_contributors(122, "Coordinates", None).len(), 122);
    }

    #[test]
    fn names_come_from_the_fixed_pool() {
        for entry in generate_contributors(10, "Sector", None) {
            assert!(NAME_POOL.contains(&entry.name.as_str()));
            assert!(!entry.name.is_empty());
        }
    }

    #[test]
    fn entries_sort_descending_by_sort_value() {
        let entries = generate_contributors(25, "Address", None);
        for pair in entries.windows(2) {
            assert!(pair[0].sort_value >= pair[1].sort_value);
        }
    }

    #[test]
    fn sort_value_matches_displayed_date() {
        for entry in generate_contributors(20, "Parent Company", None) {
            let mut tokens = entry.contributed_at.split_whitespace();
            let month = tokens.next().unwrap();
            let year: i32 = tokens.next().unwrap().parse().unwrap();
            let month_index = MONTHS.iter().position(|m| *m == month).unwrap() as i32;
            assert_eq!(entry.sort_value, year * 12 + month_index);
        }
    }

    #[test]
    fn generation_is_deterministic_per_field() {
        let a = generate_contributors(8, "Number of Workers", None);
        let b = generate_contributors(8, "Number of Workers", None);
        let dates_a: Vec<_> = a.iter().map(|e| e.contributed_at.clone()).collect();
        let dates_b: Vec<_> = b.iter().map(|e| e.contributed_at.clone()).collect();
        assert_eq!(dates_a, dates_b);
    }

    #[test]
    fn unknown_field_falls_back_to_base_value() {
        let entries = generate_contributors(4, "Completely Custom Field", Some("Base"));
        assert!(entries.iter().all(|e| e.value == "Base"));

        let defaulted = generate_contributors(2, "Completely Custom Field", None);
        assert!(defaulted.iter().all(|e| e.value == "Data submitted"));
    }

    #[test]
    fn years_stay_in_the_weighted_range() {
        for entry in generate_contributors(50, "Sector", None) {
            let year: i32 = entry
                .contributed_at
                .split_whitespace()
                .nth(1)
                .unwrap()
                .parse()
                .unwrap();
            assert!(year == 2024 || year == 2025);
        }
    }
}
