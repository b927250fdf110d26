//! The static sample dataset: one claimed production location in Gazipur,
//! Bangladesh, with the contributors, assessments, certifications, and
//! partner metrics shown on its profile. Everything is constructed once and
//! never mutated; pages derive sorted and grouped views per request.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

use crate::common::{CoreError, Result};
use crate::domain::{
    Assessment, Certification, Contributor, ContributorType, EnvironmentalMetric,
    FacilityProfile, ListUpload, WorkforceMetric,
};

/// Lists through which well-known contributors upload their data. Synthetic
/// drawer entries use this to show an "uploaded via list" line.
static LIST_TITLES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("Marks & Spencer", "M&S Supplier Network 2025"),
        ("Sainsbury's", "Sainsbury's Global Suppliers 2025"),
        ("JD Williams", "JD Williams Factory List"),
        ("SLCP", "SLCP Verified Facilities Q1 2025"),
        ("International Accord Foundation", "Accord Signatory Factory List"),
        ("OS Hub Research Team", "OS Hub Research Database"),
        ("Worldly", "Higg FEM Verified Facilities"),
        ("amfori", "amfori BSCI Audit Reports"),
        ("H&M Group", "H&M Supplier Disclosure 2025"),
        ("Inditex", "Inditex Supplier List 2025"),
        ("Target Corporation", "Target Responsible Sourcing"),
        ("Walmart", "Walmart Supplier Disclosure"),
        ("Gap Inc.", "Gap Inc. Factory List"),
        ("Primark", "Primark Factory Disclosure"),
        ("C&A", "C&A Supplier List 2025"),
    ])
});

/// Known list title for a contributor name, if any.
pub fn list_title(name: &str) -> Option<&'static str> {
    LIST_TITLES.get(name).copied()
}

/// Everything the profile page needs about one facility.
#[derive(Debug, Clone, Serialize)]
pub struct FacilityBundle {
    pub facility: FacilityProfile,
    pub contributors: Vec<Contributor>,
    /// Total including anonymized sources not in `contributors`.
    pub total_contributors: usize,
    pub type_counts: Vec<(ContributorType, u32)>,
    pub certifications: Vec<Certification>,
    pub environmental_metrics: Vec<EnvironmentalMetric>,
    pub workforce_metrics: Vec<WorkforceMetric>,
    pub assessments: Vec<Assessment>,
}

impl FacilityBundle {
    pub fn sample() -> Self {
        Self {
            facility: sample_facility(),
            contributors: sample_contributors(),
            total_contributors: 44,
            type_counts: vec![
                (ContributorType::Brand, 18),
                (ContributorType::Supplier, 9),
                (ContributorType::Auditor, 8),
                (ContributorType::Cso, 6),
                (ContributorType::Msi, 2),
                (ContributorType::Other, 1),
            ],
            certifications: sample_certifications(),
            environmental_metrics: sample_environmental_metrics(),
            workforce_metrics: sample_workforce_metrics(),
            assessments: sample_assessments(),
        }
    }

    /// Check that a requested OS ID names this facility.
    pub fn ensure_os_id(&self, os_id: &str) -> Result<()> {
        if os_id == self.facility.os_id {
            Ok(())
        } else {
            Err(CoreError::UnknownFacility(os_id.to_string()))
        }
    }

    /// Type counts sorted largest first for the summary badges.
    pub fn sorted_type_counts(&self) -> Vec<(ContributorType, u32)> {
        let mut counts: Vec<_> = self
            .type_counts
            .iter()
            .copied()
            .filter(|(_, count)| *count > 0)
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

fn sample_facility() -> FacilityProfile {
    FacilityProfile {
        name: "Zaber & Zubair Fabrics Ltd".to_string(),
        os_id: "BD2021113R7R87P".to_string(),
        is_claimed: true,
        claimed_by: "Zaber and Zubair Fabrics Ltd".to_string(),
        claimed_date: "November 15, 2022".to_string(),
        address: "Pagar, Tongi, Gazipur Tongi, Gazipur Dhaka Gazipur 1710 Dhaka - Bangladesh"
            .to_string(),
        country: "Bangladesh".to_string(),
        latitude: 23.896051,
        longitude: 90.418952,
        worker_count: 8281,
        native_name: "জাবের অ্যান্ড জুবায়ের ফেব্রিক্স লিমিটেড".to_string(),
        last_updated: "Nov 2025".to_string(),
        sector: "General Merchandise".to_string(),
        parent_company: "Noman Group".to_string(),
        office_name: "Noman Group Head Office".to_string(),
        office_address: "House 42, Road 11, Banani, Dhaka 1213".to_string(),
        office_country: "Bangladesh".to_string(),
        processing_type: "Final Product Assembly".to_string(),
        location_types: vec!["Manufacturing Facility".to_string(), "Warehouse".to_string()],
        facility_types: vec![
            "Raw Material Processing".to_string(),
            "Textile Production".to_string(),
            "Printing & Dyeing".to_string(),
        ],
        product_types: vec!["Leisure".to_string(), "Tech".to_string()],
        standards: "Rainforest Alliance".to_string(),
        percentage_female_workers: 65,
        minimum_order_quantity: "5,000 units".to_string(),
        average_lead_time: "45 days".to_string(),
        affiliations: vec![
            "Bangladesh Garment Manufacturers and Exporters Association (BGMEA)".to_string(),
            "Bangladesh Knitwear Manufacturers and Exporters Association (BKMEA)".to_string(),
        ],
        estimated_annual_throughput: "2,500,000 kg/year".to_string(),
        actual_annual_energy_consumption: "8,450,000 kWh/year".to_string(),
        company_phone: "+880 2 8431 5678".to_string(),
        company_website: "https://www.nomangroup.com".to_string(),
        description: "Vertically integrated textile manufacturing facility specializing in woven \
                      and knit fabrics for home textiles and apparel. Features in-house dyeing, \
                      printing, and finishing capabilities."
            .to_string(),
    }
}

fn contributor(
    name: &str,
    contributor_type: ContributorType,
    data_points: u32,
    last_contributed: &str,
    uploads: &[(&str, &str)],
) -> Contributor {
    Contributor {
        name: name.to_string(),
        contributor_type,
        data_points,
        last_contributed: last_contributed.to_string(),
        list_uploads: uploads
            .iter()
            .map(|(title, date)| ListUpload {
                list_title: title.to_string(),
                date_contributed: date.to_string(),
            })
            .collect(),
    }
}

fn sample_contributors() -> Vec<Contributor> {
    vec![
        contributor(
            "Sainsbury's",
            ContributorType::Brand,
            22,
            "Nov 2025",
            &[
                ("Sainsbury's Global Suppliers 2025", "Nov 12, 2025"),
                ("Sainsbury's Global Suppliers 2024", "Nov 8, 2024"),
                ("Sainsbury's Global Suppliers 2023", "Nov 15, 2023"),
            ],
        ),
        contributor(
            "JD Williams and Company Ltd",
            ContributorType::Brand,
            18,
            "Nov 2025",
            &[("JD Williams Factory List", "Nov 4, 2025")],
        ),
        contributor(
            "International Accord Foundation",
            ContributorType::Cso,
            18,
            "Oct 2025",
            &[("Accord Signatory Factory List", "Oct 8, 2025")],
        ),
        contributor(
            "Marks & Spencer",
            ContributorType::Brand,
            28,
            "Nov 2025",
            &[
                ("M&S Supplier Network 2025", "Nov 5, 2025"),
                ("M&S Supplier Network 2024", "Nov 10, 2024"),
                ("M&S Supplier Network 2023", "Nov 3, 2023"),
            ],
        ),
        contributor(
            "H&M Group",
            ContributorType::Brand,
            35,
            "Aug 2025",
            &[("H&M Supplier Disclosure 2025", "Aug 20, 2025")],
        ),
        contributor(
            "SLCP",
            ContributorType::Auditor,
            45,
            "Apr 2025",
            &[("SLCP Verified Facilities Q1 2025", "Apr 15, 2025")],
        ),
        contributor(
            "Worldly",
            ContributorType::Msi,
            30,
            "Mar 2025",
            &[("Higg FEM Verified Facilities", "Mar 15, 2025")],
        ),
        contributor("OS Hub", ContributorType::Other, 12, "Aug 2025", &[]),
        contributor(
            "Zaber and Zubair Fabrics Ltd",
            ContributorType::Supplier,
            35,
            "Nov 2022",
            &[],
        ),
    ]
}

fn sample_certifications() -> Vec<Certification> {
    vec![Certification {
        name: "CERT/01-00-1234".to_string(),
        issuer: "Placeholder Certification Body".to_string(),
        issuer_url: Some("https://example.com/certification".to_string()),
        issuer_org: Some("Placeholder Certification Body".to_string()),
        issuer_org_url: Some("https://example.com/".to_string()),
        verification_url: None,
        valid_until: Some("Dec 2025".to_string()),
        scope: Some("Certification".to_string()),
        contributor: Some("Placeholder Provider".to_string()),
        contributor_url: Some("https://example.com/".to_string()),
        contributed_at: Some("January 8, 2026".to_string()),
    }]
}

fn sample_environmental_metrics() -> Vec<EnvironmentalMetric> {
    vec![
        EnvironmentalMetric {
            name: "Estimated Annual Emissions".to_string(),
            value: "32833".to_string(),
            unit: "t CO₂e-100".to_string(),
            trend: None,
            source: "2025 Emissions Model".to_string(),
            source_url: Some("https://climatetrace.org/emissions-model".to_string()),
            provider: Some("Climate TRACE".to_string()),
            provider_url: Some("https://climatetrace.org".to_string()),
            contributor: Some("Climate TRACE".to_string()),
            contributor_url: Some("https://climatetrace.org".to_string()),
            contributed_at: Some("November 10, 2025".to_string()),
        },
        EnvironmentalMetric {
            name: "Estimated Annual Activity".to_string(),
            value: "450000".to_string(),
            unit: "MWh".to_string(),
            trend: None,
            source: "2025 Emissions Model".to_string(),
            source_url: Some("https://climatetrace.org/emissions-model".to_string()),
            provider: Some("Climate TRACE".to_string()),
            provider_url: Some("https://climatetrace.org".to_string()),
            contributor: Some("Climate TRACE".to_string()),
            contributor_url: Some("https://climatetrace.org".to_string()),
            contributed_at: Some("November 10, 2025".to_string()),
        },
    ]
}

fn sample_workforce_metrics() -> Vec<WorkforceMetric> {
    vec![WorkforceMetric {
        name: "Grievance Mechanism".to_string(),
        value: "Active".to_string(),
        description: Some("Workers have access to anonymous grievance reporting".to_string()),
        status: Some("good".to_string()),
        source: "Ulula".to_string(),
        updated_at: "Nov 2025".to_string(),
    }]
}

fn sample_assessments() -> Vec<Assessment> {
    vec![
        Assessment {
            name: Some("FEM Assessment".to_string()),
            provider: Some("Worldly".to_string()),
            provider_url: Some("https://worldly.io/".to_string()),
            scope: Some("Environmental".to_string()),
            verification_status: Some("Verified".to_string()),
            last_date: Some("January 15, 2025".to_string()),
            reporting_year: Some("2024".to_string()),
            link: Some("https://worldly.io/fem".to_string()),
            group_title: Some("Worldly Assessment".to_string()),
            ..Assessment::default()
        },
        Assessment {
            group_contribution: Some("Worldly Assessment".to_string()),
            contributor: Some("Worldly".to_string()),
            contributor_url: Some("https://worldly.io/".to_string()),
            contributed_at: Some("March 20, 2025".to_string()),
            ..Assessment::default()
        },
        Assessment {
            name: Some("CAF Assessment".to_string()),
            provider: Some("SLCP".to_string()),
            provider_url: Some("https://slconvergence.org/".to_string()),
            scope: Some("Social & Labor".to_string()),
            status: Some("Verified".to_string()),
            assessment_date: Some("April 2025".to_string()),
            assessment_platform: Some("SLCP Gateway".to_string()),
            verifier_body: Some("Bureau Veritas".to_string()),
            group_title: Some("SLCP Assessment".to_string()),
            ..Assessment::default()
        },
        Assessment {
            group_contribution: Some("SLCP Assessment".to_string()),
            contributor: Some("SLCP".to_string()),
            contributor_url: Some("https://slconvergence.org/".to_string()),
            contributed_at: Some("April 15, 2025".to_string()),
            ..Assessment::default()
        },
        Assessment {
            name: Some("amfori BEPI Audit".to_string()),
            provider: Some("amfori".to_string()),
            provider_url: Some("https://www.amfori.org/".to_string()),
            scope: Some("Environmental".to_string()),
            submission_date: Some("October 28, 2023".to_string()),
            expiration_date: Some("October 28, 2025".to_string()),
            group_title: Some("amfori Statuses".to_string()),
            ..Assessment::default()
        },
        Assessment {
            name: Some("amfori BSCI Audit".to_string()),
            provider: Some("amfori".to_string()),
            provider_url: Some("https://www.amfori.org/".to_string()),
            scope: Some("Social & Labor".to_string()),
            submission_date: Some("October 28, 2023".to_string()),
            expiration_date: Some("October 28, 2025".to_string()),
            group_title: Some("amfori Statuses".to_string()),
            ..Assessment::default()
        },
        Assessment {
            name: Some("amfori Environmental Risk Assessment".to_string()),
            provider: Some("amfori".to_string()),
            provider_url: Some("https://www.amfori.org/".to_string()),
            scope: Some("Environmental".to_string()),
            expiration_date: Some("October 28, 2027".to_string()),
            completion_date: Some("October 28, 2025".to_string()),
            group_title: Some("amfori Statuses".to_string()),
            ..Assessment::default()
        },
        Assessment {
            group_contribution: Some("amfori Statuses".to_string()),
            contributor: Some("amfori".to_string()),
            contributor_url: Some("https://www.amfori.org/".to_string()),
            contributed_at: Some("October 28, 2023".to_string()),
            ..Assessment::default()
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provenance::{partition_contributors, split_assessments};

    #[test]
    fn sample_bundle_is_internally_consistent() {
        let bundle = FacilityBundle::sample();
        assert!(bundle.facility.is_claimed);
        assert_eq!(bundle.facility.os_id, "BD2021113R7R87P");
        assert!(bundle.total_contributors >= bundle.contributors.len());

        let partition = partition_contributors(&bundle.contributors);
        assert_eq!(partition.len(), bundle.contributors.len());

        let groups = split_assessments(&bundle.assessments);
        assert_eq!(
            groups.grouped_member_count() + groups.ungrouped.len() + groups.attribution_count(),
            bundle.assessments.len()
        );
        // All three known groups survive with members and attribution.
        assert_eq!(groups.left_column().len(), 2);
        assert_eq!(groups.right_column().len(), 1);
        assert!(groups
            .left_column()
            .iter()
            .chain(groups.right_column().iter())
            .all(|g| g.attribution.is_some()));
    }

    #[test]
    fn type_counts_sort_largest_first() {
        let bundle = FacilityBundle::sample();
        let counts = bundle.sorted_type_counts();
        for pair in counts.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(counts.first().map(|c| c.0), Some(ContributorType::Brand));
    }

    #[test]
    fn claimed_contributor_detection() {
        let facility = sample_facility();
        assert!(facility.is_claimed_contributor("Zaber and Zubair Fabrics Ltd"));
        assert!(facility.is_claimed_contributor("Noman Group"));
        assert!(!facility.is_claimed_contributor("Sainsbury's"));
    }

    #[test]
    fn ensure_os_id_rejects_unknown_ids() {
        let bundle = FacilityBundle::sample();
        assert!(bundle.ensure_os_id("BD2021113R7R87P").is_ok());
        assert!(bundle.ensure_os_id("XX0000000000000").is_err());
    }

    #[test]
    fn list_title_lookup() {
        assert_eq!(list_title("Worldly"), Some("Higg FEM Verified Facilities"));
        assert_eq!(list_title("Nobody"), None);
    }
}
