use serde::{Deserialize, Serialize};

/// Organization types that contribute data about a production location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributorType {
    Academic,
    Auditor,
    Brand,
    Cso,
    Supplier,
    Msi,
    Union,
    Other,
}

impl ContributorType {
    pub const ALL: [ContributorType; 8] = [
        ContributorType::Academic,
        ContributorType::Auditor,
        ContributorType::Brand,
        ContributorType::Cso,
        ContributorType::Supplier,
        ContributorType::Msi,
        ContributorType::Union,
        ContributorType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContributorType::Academic => "Academic",
            ContributorType::Auditor => "Auditor",
            ContributorType::Brand => "Brand",
            ContributorType::Cso => "Civil Society Organization",
            ContributorType::Supplier => "Supplier",
            ContributorType::Msi => "Multi-Stakeholder Initiative",
            ContributorType::Union => "Union",
            ContributorType::Other => "Other",
        }
    }

    /// Stylesheet class for the type badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            ContributorType::Academic => "type-academic",
            ContributorType::Auditor => "type-auditor",
            ContributorType::Brand => "type-brand",
            ContributorType::Cso => "type-cso",
            ContributorType::Supplier => "type-supplier",
            ContributorType::Msi => "type-msi",
            ContributorType::Union => "type-union",
            ContributorType::Other => "type-other",
        }
    }
}

/// A named list through which a contributor uploaded facility data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUpload {
    pub list_title: String,
    /// Display date, most recent upload first within a contributor.
    pub date_contributed: String,
}

/// An organization that supplied one or more data points about the facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub contributor_type: ContributorType,
    pub data_points: u32,
    pub last_contributed: String,
    /// Empty for contributors who only made individual contributions.
    #[serde(default)]
    pub list_uploads: Vec<ListUpload>,
}

impl Contributor {
    pub fn has_list_uploads(&self) -> bool {
        !self.list_uploads.is_empty()
    }
}

/// One assessment record. Every field is optional; a record carrying
/// `group_contribution` is attribution metadata for the named group and is
/// never rendered as an assessment itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Assessment {
    pub name: Option<String>,
    pub provider: Option<String>,
    pub provider_url: Option<String>,
    pub scope: Option<String>,
    pub status: Option<String>,
    pub verification_status: Option<String>,
    pub assessment_date: Option<String>,
    pub assessment_platform: Option<String>,
    pub verifier_body: Option<String>,
    pub submission_date: Option<String>,
    pub expiration_date: Option<String>,
    pub completion_date: Option<String>,
    pub validity_date: Option<String>,
    pub reporting_year: Option<String>,
    pub last_date: Option<String>,
    pub link: Option<String>,
    pub contributor: Option<String>,
    pub contributor_url: Option<String>,
    pub contributed_at: Option<String>,
    pub group_title: Option<String>,
    pub group_contribution: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub issuer_url: Option<String>,
    pub issuer_org: Option<String>,
    pub issuer_org_url: Option<String>,
    pub verification_url: Option<String>,
    pub valid_until: Option<String>,
    pub scope: Option<String>,
    pub contributor: Option<String>,
    pub contributor_url: Option<String>,
    pub contributed_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentalMetric {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub trend: Option<Trend>,
    pub source: String,
    pub source_url: Option<String>,
    pub provider: Option<String>,
    pub provider_url: Option<String>,
    pub contributor: Option<String>,
    pub contributor_url: Option<String>,
    pub contributed_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkforceMetric {
    pub name: String,
    pub value: String,
    pub description: Option<String>,
    pub status: Option<String>,
    pub source: String,
    pub updated_at: String,
}

/// Synthetic drawer entry for the "+N data sources" view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContributionEntry {
    pub name: String,
    pub contributor_type: ContributorType,
    pub contributed_at: String,
    /// Derived ordering key: `year * 12 + month_index`.
    pub sort_value: i32,
    pub value: String,
    pub list_title: Option<String>,
}

/// Identity fields of one production location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityProfile {
    pub name: String,
    pub os_id: String,
    pub is_claimed: bool,
    pub claimed_by: String,
    pub claimed_date: String,
    pub address: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub worker_count: u32,
    pub native_name: String,
    pub last_updated: String,
    pub sector: String,
    pub parent_company: String,
    pub office_name: String,
    pub office_address: String,
    pub office_country: String,
    pub processing_type: String,
    pub location_types: Vec<String>,
    pub facility_types: Vec<String>,
    pub product_types: Vec<String>,
    pub standards: String,
    pub percentage_female_workers: u8,
    pub minimum_order_quantity: String,
    pub average_lead_time: String,
    pub affiliations: Vec<String>,
    pub estimated_annual_throughput: String,
    pub actual_annual_energy_consumption: String,
    pub company_phone: String,
    pub company_website: String,
    pub description: String,
}

impl FacilityProfile {
    /// Whether a contribution under this name counts as claimed data, i.e.
    /// supplied by the verified owner or manager rather than crowdsourced.
    pub fn is_claimed_contributor(&self, contributor: &str) -> bool {
        contributor == self.claimed_by
            || contributor == self.parent_company
            || contributor == "Facility Owner"
    }
}
