//! View models for the profile page. Handlers build these from the core
//! dataset and the request's toggle state; templates render them without
//! touching `Option` or domain types directly.

use serde::Deserialize;

use osh_core::dataset::FacilityBundle;
use osh_core::domain::{Assessment, Certification, Contributor, EnvironmentalMetric, Trend, WorkforceMetric};
use osh_core::map::{MapView, DEFAULT_ZOOM};
use osh_core::provenance::{generate_contributors, split_assessments, AssessmentGroup};
use osh_core::sections::{section_anchor, MultiAccordion, SingleAccordion, DEFAULT_SECTION, SECTIONS};

/// Accordion keys used by the third-party partnerships container.
pub const PANEL_ASSESSMENTS: &str = "assessments";
pub const PANEL_CERTIFICATIONS: &str = "certifications";
pub const PANEL_ENVIRONMENT: &str = "environment";
pub const PANEL_LIVING_WAGE: &str = "livingwage";
pub const PANEL_GRIEVANCE: &str = "grievance";

/// Key of the claimed-data single accordion.
pub const CLAIMED_PANEL_KEY: &str = "claimed";

/// Query parameters carrying the page's toggle state between requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub open: Option<String>,
    pub claimed: Option<String>,
    pub section: Option<String>,
    pub z: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesQuery {
    pub field: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContributorsQuery {
    pub view: Option<String>,
}

/// Decoded toggle state plus the path used to rebuild hrefs.
#[derive(Debug, Clone)]
pub struct PageState {
    page_path: String,
    pub open: MultiAccordion,
    pub claimed: SingleAccordion,
    pub active_section: String,
    pub map: MapView,
}

impl PageState {
    pub fn from_query(os_id: &str, query: &PageQuery) -> Self {
        Self {
            page_path: format!("/facilities/{os_id}"),
            open: query
                .open
                .as_deref()
                .map(MultiAccordion::from_query)
                .unwrap_or_default(),
            claimed: SingleAccordion::from_active(
                query.claimed.clone().filter(|key| !key.is_empty()),
            ),
            active_section: query
                .section
                .clone()
                .unwrap_or_else(|| DEFAULT_SECTION.to_string()),
            map: query.z.map(MapView::with_zoom).unwrap_or_default(),
        }
    }

    fn href(
        &self,
        open: &MultiAccordion,
        claimed: &SingleAccordion,
        zoom: u8,
        section: &str,
        anchor_id: &str,
    ) -> String {
        let mut params = Vec::new();
        let open_query = open.to_query();
        if !open_query.is_empty() {
            params.push(format!("open={open_query}"));
        }
        if let Some(active) = claimed.active() {
            params.push(format!("claimed={active}"));
        }
        if zoom != DEFAULT_ZOOM {
            params.push(format!("z={zoom}"));
        }
        if section != DEFAULT_SECTION {
            params.push(format!("section={section}"));
        }
        let query = if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        };
        format!("{}{}#{}", self.page_path, query, section_anchor(anchor_id))
    }

    /// Link that toggles one partnership panel, scrolled to its section.
    pub fn panel_toggle_href(&self, key: &str, anchor_id: &str) -> String {
        self.href(
            &self.open.toggled(key),
            &self.claimed,
            self.map.zoom,
            &self.active_section,
            anchor_id,
        )
    }

    /// Link that toggles the claimed-data accordion.
    pub fn claimed_toggle_href(&self) -> String {
        self.href(
            &self.open,
            &self.claimed.toggled(CLAIMED_PANEL_KEY),
            self.map.zoom,
            &self.active_section,
            "claimed-data",
        )
    }

    /// Jump-to link making `id` the active section.
    pub fn section_href(&self, id: &str) -> String {
        self.href(&self.open, &self.claimed, self.map.zoom, id, id)
    }

    /// Link re-rendering the map at another zoom level.
    pub fn zoom_href(&self, zoom: u8) -> String {
        self.href(&self.open, &self.claimed, zoom, &self.active_section, "location")
    }
}

#[derive(Debug, Clone)]
pub struct SectionLinkView {
    pub id: &'static str,
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

pub fn section_links(state: &PageState) -> Vec<SectionLinkView> {
    SECTIONS
        .iter()
        .map(|section| SectionLinkView {
            id: section.id,
            label: section.label,
            href: state.section_href(section.id),
            active: section.id == state.active_section,
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct TypeCountView {
    pub count: u32,
    pub label: String,
    pub css_class: &'static str,
}

pub fn type_count_views(bundle: &FacilityBundle) -> Vec<TypeCountView> {
    bundle
        .sorted_type_counts()
        .into_iter()
        .map(|(contributor_type, count)| TypeCountView {
            count,
            label: if count > 1 {
                format!("{}s", contributor_type.label())
            } else {
                contributor_type.label().to_string()
            },
            css_class: contributor_type.css_class(),
        })
        .collect()
}

/// One labelled row of the data-field tables, provenance included.
#[derive(Debug, Clone)]
pub struct DataFieldView {
    pub slug: &'static str,
    pub label: &'static str,
    pub value: String,
    pub explanation: &'static str,
    pub contributor: String,
    pub contributed_at: String,
    pub more_entries: usize,
    pub claimed: bool,
    pub sources_href: String,
}

struct FieldDef {
    slug: &'static str,
    label: &'static str,
    value: String,
    explanation: &'static str,
    contributor: &'static str,
    contributed_at: &'static str,
    more_entries: usize,
}

fn field_view(bundle: &FacilityBundle, def: FieldDef) -> DataFieldView {
    let sources_href = if def.more_entries > 0 {
        format!(
            "/facilities/{}/sources?field={}",
            bundle.facility.os_id, def.slug
        )
    } else {
        String::new()
    };
    DataFieldView {
        slug: def.slug,
        label: def.label,
        value: def.value,
        explanation: def.explanation,
        contributor: def.contributor.to_string(),
        contributed_at: def.contributed_at.to_string(),
        more_entries: def.more_entries,
        claimed: bundle.facility.is_claimed_contributor(def.contributor),
        sources_href,
    }
}

/// Thousands-separated display form of a count.
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn general_fields(bundle: &FacilityBundle) -> Vec<DataFieldView> {
    let facility = &bundle.facility;
    vec![
        field_view(bundle, FieldDef {
            slug: "name",
            label: "Name",
            value: facility.name.clone(),
            explanation: "The complete name of this production location.",
            contributor: "Zaber and Zubair Fabrics Ltd",
            contributed_at: "November 12, 2022",
            more_entries: 8,
        }),
        field_view(bundle, FieldDef {
            slug: "parent-company",
            label: "Parent Company",
            value: facility.parent_company.clone(),
            explanation: "The company or group that holds majority ownership for this production location.",
            contributor: "Zaber and Zubair Fabrics Ltd",
            contributed_at: "November 12, 2022",
            more_entries: 6,
        }),
        field_view(bundle, FieldDef {
            slug: "sector",
            label: "Industry / Sectors",
            value: facility.sector.clone(),
            explanation: "The sector(s) that this location operates in. For example: Apparel, Electronics, Renewable Energy.",
            contributor: "Sainsbury's",
            contributed_at: "November 3, 2025",
            more_entries: 51,
        }),
        field_view(bundle, FieldDef {
            slug: "product-types",
            label: "Product Type(s)",
            value: facility.facility_types.join(", "),
            explanation: "The types of production activities performed at this location.",
            contributor: "OS Hub Research Team",
            contributed_at: "August 19, 2025",
            more_entries: 5,
        }),
        field_view(bundle, FieldDef {
            slug: "location-types",
            label: "Location Type(s)",
            value: facility.location_types.join(", "),
            explanation: "The type of location (e.g., manufacturing facility, warehouse, office).",
            contributor: "Zaber and Zubair Fabrics Ltd",
            contributed_at: "November 12, 2022",
            more_entries: 3,
        }),
        field_view(bundle, FieldDef {
            slug: "processing-types",
            label: "Processing Type(s)",
            value: facility.processing_type.clone(),
            explanation: "The stage of production this facility handles (e.g., raw materials, assembly, packaging).",
            contributor: "JD Williams",
            contributed_at: "November 3, 2025",
            more_entries: 44,
        }),
        field_view(bundle, FieldDef {
            slug: "number-of-workers",
            label: "Number of Workers",
            value: format_count(facility.worker_count),
            explanation: "The total number of workers employed at this production location.",
            contributor: "Marks & Spencer",
            contributed_at: "September 8, 2025",
            more_entries: 12,
        }),
    ]
}

pub fn location_fields(bundle: &FacilityBundle) -> Vec<DataFieldView> {
    let facility = &bundle.facility;
    vec![
        field_view(bundle, FieldDef {
            slug: "address",
            label: "Address",
            value: facility.address.clone(),
            explanation: "The company address for this production location.",
            contributor: "Zaber and Zubair Fabrics Ltd",
            contributed_at: "November 12, 2022",
            more_entries: 3,
        }),
        field_view(bundle, FieldDef {
            slug: "coordinates",
            label: "Coordinates",
            value: format!("{:.6}, {:.6}", facility.latitude, facility.longitude),
            explanation: "The geographic coordinates (latitude, longitude) of this production location generated with Google's geocoding API.",
            contributor: "OS Hub Data Team",
            contributed_at: "April 7, 2025",
            more_entries: 122,
        }),
    ]
}

pub fn claimed_fields(bundle: &FacilityBundle) -> Vec<DataFieldView> {
    let facility = &bundle.facility;
    let claimed = |slug, label, value: String, explanation, contributed_at| {
        field_view(bundle, FieldDef {
            slug,
            label,
            value,
            explanation,
            contributor: "Zaber and Zubair Fabrics Ltd",
            contributed_at,
            more_entries: 0,
        })
    };
    vec![
        claimed(
            "native-name",
            "Name in Native Language",
            facility.native_name.clone(),
            "The facility name in its local language.",
            "November 12, 2022",
        ),
        claimed(
            "company-website",
            "Company Website",
            facility.company_website.clone(),
            "The official website for this company.",
            "November 12, 2022",
        ),
        claimed(
            "company-phone",
            "Company Phone",
            facility.company_phone.clone(),
            "The primary contact phone number for this facility.",
            "November 12, 2022",
        ),
        claimed(
            "office-name",
            "Office Name",
            facility.office_name.clone(),
            "The name of the parent company's office location.",
            "November 12, 2022",
        ),
        claimed(
            "office-address",
            "Office Address",
            facility.office_address.clone(),
            "The address of the parent company's office.",
            "November 12, 2022",
        ),
        claimed(
            "office-country",
            "Office Country",
            facility.office_country.clone(),
            "The country where the parent company's office is located.",
            "November 12, 2022",
        ),
        claimed(
            "description",
            "Description",
            facility.description.clone(),
            "A description of this production location's capabilities and focus.",
            "November 12, 2022",
        ),
        claimed(
            "standards",
            "Certifications / Standards / Regulations",
            facility.standards.clone(),
            "Certifications and standards the facility adheres to.",
            "January 15, 2025",
        ),
        claimed(
            "affiliations",
            "Affiliations",
            facility.affiliations.join("; "),
            "Industry associations and organizations this production location is a member of.",
            "November 12, 2022",
        ),
        claimed(
            "minimum-order-quantity",
            "Minimum Order Quantity",
            facility.minimum_order_quantity.clone(),
            "The minimum order size this production location accepts for production.",
            "November 12, 2022",
        ),
        claimed(
            "average-lead-time",
            "Average Lead Time",
            facility.average_lead_time.clone(),
            "The typical time from order placement to delivery.",
            "November 12, 2022",
        ),
        claimed(
            "female-workers",
            "Percentage of Female Workers",
            format!("{}%", facility.percentage_female_workers),
            "The percentage of the workforce that identifies as female.",
            "November 12, 2022",
        ),
        claimed(
            "annual-throughput",
            "Estimated Annual Throughput",
            facility.estimated_annual_throughput.clone(),
            "The estimated annual production output of this production location.",
            "November 12, 2022",
        ),
        claimed(
            "energy-consumption",
            "Actual Annual Energy Consumption",
            facility.actual_annual_energy_consumption.clone(),
            "The actual annual energy consumption of this production location.",
            "November 12, 2022",
        ),
    ]
}

/// Resolve a field slug to its view, searching every field table.
pub fn find_field(bundle: &FacilityBundle, slug: &str) -> Option<DataFieldView> {
    general_fields(bundle)
        .into_iter()
        .chain(location_fields(bundle))
        .chain(claimed_fields(bundle))
        .find(|field| field.slug == slug)
}

#[derive(Debug, Clone)]
pub struct ListUploadView {
    pub list_title: String,
    pub date_contributed: String,
}

#[derive(Debug, Clone)]
pub struct ContributorCardView {
    pub name: String,
    pub type_label: &'static str,
    pub type_css: &'static str,
    pub last_contributed: String,
    pub uploads: Vec<ListUploadView>,
}

pub fn contributor_card(contributor: &Contributor) -> ContributorCardView {
    ContributorCardView {
        name: contributor.name.clone(),
        type_label: contributor.contributor_type.label(),
        type_css: contributor.contributor_type.css_class(),
        last_contributed: contributor.last_contributed.clone(),
        uploads: contributor
            .list_uploads
            .iter()
            .map(|upload| ListUploadView {
                list_title: upload.list_title.clone(),
                date_contributed: upload.date_contributed.clone(),
            })
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct DetailRowView {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct AssessmentItemView {
    pub name: String,
    pub details: Vec<DetailRowView>,
    pub show_contribution: bool,
    pub contributed_at: String,
    pub contributor: String,
    pub contributor_url: String,
}

fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn assessment_item(assessment: &Assessment, show_contribution: bool) -> AssessmentItemView {
    // Detail rows follow the fixed display order of the page, skipping
    // absent fields entirely.
    let rows = [
        ("Verification Status", &assessment.verification_status),
        ("Last Date", &assessment.last_date),
        ("Assessment Status", &assessment.status),
        ("Submission Date", &assessment.submission_date),
        ("Expiration Date", &assessment.expiration_date),
        ("Completion Date", &assessment.completion_date),
        ("Assessment Date", &assessment.assessment_date),
        ("Assessment Platform", &assessment.assessment_platform),
        ("Verifier Body", &assessment.verifier_body),
        ("Validity Date", &assessment.validity_date),
        ("Reporting Year", &assessment.reporting_year),
    ];
    AssessmentItemView {
        name: opt(&assessment.name),
        details: rows
            .into_iter()
            .filter_map(|(label, value)| {
                value.as_ref().map(|value| DetailRowView {
                    label,
                    value: value.clone(),
                })
            })
            .collect(),
        show_contribution,
        contributed_at: opt(&assessment.contributed_at),
        contributor: opt(&assessment.contributor),
        contributor_url: opt(&assessment.contributor_url),
    }
}

#[derive(Debug, Clone)]
pub struct AssessmentGroupView {
    pub title: String,
    pub items: Vec<AssessmentItemView>,
    pub attribution_date: String,
    pub attribution_contributor: String,
    pub attribution_url: String,
}

fn assessment_group_view(group: &AssessmentGroup) -> AssessmentGroupView {
    let attribution = group.attribution.as_ref();
    AssessmentGroupView {
        title: group.title.clone(),
        items: group
            .members
            .iter()
            .map(|member| assessment_item(member, false))
            .collect(),
        attribution_date: attribution.map(|a| opt(&a.contributed_at)).unwrap_or_default(),
        attribution_contributor: attribution.map(|a| opt(&a.contributor)).unwrap_or_default(),
        attribution_url: attribution
            .map(|a| opt(&a.contributor_url))
            .unwrap_or_default(),
    }
}

pub struct AssessmentColumns {
    pub left: Vec<AssessmentGroupView>,
    pub right: Vec<AssessmentGroupView>,
    pub ungrouped: Vec<AssessmentItemView>,
}

pub fn assessment_columns(bundle: &FacilityBundle) -> AssessmentColumns {
    let groups = split_assessments(&bundle.assessments);
    AssessmentColumns {
        left: groups.left_column().iter().map(assessment_group_view).collect(),
        right: groups
            .right_column()
            .iter()
            .map(assessment_group_view)
            .collect(),
        ungrouped: groups
            .ungrouped
            .iter()
            .map(|assessment| assessment_item(assessment, true))
            .collect(),
    }
}

#[derive(Debug, Clone)]
pub struct CertificationView {
    pub scope: String,
    pub name: String,
    pub name_url: String,
    pub issuer: String,
    pub issuer_url: String,
    pub contributed_at: String,
    pub contributor: String,
    pub contributor_url: String,
}

pub fn certification_views(certifications: &[Certification]) -> Vec<CertificationView> {
    certifications
        .iter()
        .map(|cert| CertificationView {
            scope: cert.scope.clone().unwrap_or_else(|| "Certification".to_string()),
            name: cert.name.clone(),
            name_url: opt(&cert.verification_url),
            issuer: cert.issuer.clone(),
            issuer_url: opt(&cert.issuer_url),
            contributed_at: opt(&cert.contributed_at),
            contributor: opt(&cert.contributor),
            contributor_url: opt(&cert.contributor_url),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct EnvironmentalMetricView {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub trend_note: String,
    pub source: String,
    pub source_url: String,
    pub contributed_at: String,
    pub contributor: String,
    pub contributor_url: String,
}

pub fn environmental_views(metrics: &[EnvironmentalMetric]) -> Vec<EnvironmentalMetricView> {
    metrics
        .iter()
        .map(|metric| EnvironmentalMetricView {
            name: metric.name.clone(),
            value: metric.value.clone(),
            unit: metric.unit.clone(),
            trend_note: match metric.trend {
                Some(Trend::Down) => "(↓ Improving)".to_string(),
                Some(Trend::Up) => "(↑ Increasing)".to_string(),
                Some(Trend::Stable) => "(→ Stable)".to_string(),
                None => String::new(),
            },
            source: metric.source.clone(),
            source_url: opt(&metric.source_url),
            contributed_at: opt(&metric.contributed_at),
            contributor: opt(&metric.contributor),
            contributor_url: opt(&metric.contributor_url),
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct WorkforceMetricView {
    pub name: String,
    pub value: String,
    pub description: String,
    pub source: String,
    pub updated_at: String,
}

pub fn workforce_views(metrics: &[WorkforceMetric]) -> Vec<WorkforceMetricView> {
    metrics
        .iter()
        .map(|metric| WorkforceMetricView {
            name: metric.name.clone(),
            value: metric.value.clone(),
            description: opt(&metric.description),
            source: metric.source.clone(),
            updated_at: metric.updated_at.clone(),
        })
        .collect()
}

/// Header state of one partnership accordion panel.
#[derive(Debug, Clone)]
pub struct PanelView {
    pub open: bool,
    pub toggle_href: String,
}

pub fn panel_view(state: &PageState, key: &str, anchor_id: &str) -> PanelView {
    PanelView {
        open: state.open.is_open(key),
        toggle_href: state.panel_toggle_href(key, anchor_id),
    }
}

#[derive(Debug, Clone)]
pub struct SourceEntryView {
    pub value: String,
    pub name: String,
    pub contributed_at: String,
    pub list_title: String,
}

/// Entries for the "+N data sources" drawer of one field.
pub fn source_entries(field: &DataFieldView) -> Vec<SourceEntryView> {
    generate_contributors(field.more_entries, field.label, Some(&field.value))
        .into_iter()
        .map(|entry| SourceEntryView {
            value: entry.value,
            name: entry.name,
            contributed_at: entry.contributed_at,
            list_title: entry.list_title.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state(query: PageQuery) -> PageState {
        PageState::from_query("BD2021113R7R87P", &query)
    }

    #[test]
    fn default_state_is_fully_collapsed() {
        let state = sample_state(PageQuery::default());
        assert!(!state.open.is_open(PANEL_ASSESSMENTS));
        assert!(state.claimed.active().is_none());
        assert_eq!(state.active_section, DEFAULT_SECTION);
        assert_eq!(state.map.zoom, DEFAULT_ZOOM);
    }

    #[test]
    fn panel_toggle_href_opens_and_closes() {
        let state = sample_state(PageQuery::default());
        let href = state.panel_toggle_href(PANEL_ASSESSMENTS, "assessments");
        assert_eq!(
            href,
            "/facilities/BD2021113R7R87P?open=assessments#section-assessments"
        );

        let reopened = sample_state(PageQuery {
            open: Some("assessments".to_string()),
            ..PageQuery::default()
        });
        let closing = reopened.panel_toggle_href(PANEL_ASSESSMENTS, "assessments");
        assert_eq!(closing, "/facilities/BD2021113R7R87P#section-assessments");
    }

    #[test]
    fn toggle_hrefs_preserve_unrelated_state() {
        let state = sample_state(PageQuery {
            open: Some("environment".to_string()),
            claimed: Some(CLAIMED_PANEL_KEY.to_string()),
            ..PageQuery::default()
        });
        let href = state.panel_toggle_href(PANEL_ASSESSMENTS, "assessments");
        assert!(href.contains("open=assessments,environment"));
        assert!(href.contains("claimed=claimed"));
    }

    #[test]
    fn field_slugs_resolve() {
        let bundle = FacilityBundle::sample();
        let field = find_field(&bundle, "coordinates").unwrap();
        assert_eq!(field.label, "Coordinates");
        assert_eq!(field.more_entries, 122);
        assert_eq!(field.value, "23.896051, 90.418952");
        assert!(find_field(&bundle, "nonsense").is_none());
    }

    #[test]
    fn claimed_fields_carry_the_claimed_badge() {
        let bundle = FacilityBundle::sample();
        assert!(claimed_fields(&bundle).iter().all(|field| field.claimed));
        let sector = find_field(&bundle, "sector").unwrap();
        assert!(!sector.claimed);
    }

    #[test]
    fn count_formatting_inserts_separators() {
        assert_eq!(format_count(8281), "8,281");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn assessment_columns_match_the_sample_layout() {
        let bundle = FacilityBundle::sample();
        let columns = assessment_columns(&bundle);
        assert_eq!(columns.left.len(), 2);
        assert_eq!(columns.right.len(), 1);
        assert!(columns.ungrouped.is_empty());
        assert_eq!(columns.right[0].items.len(), 3);
        assert_eq!(columns.right[0].attribution_contributor, "amfori");
        // Grouped items defer attribution to the group footer.
        assert!(columns.left[0].items.iter().all(|item| !item.show_contribution));
    }

    #[test]
    fn source_entries_match_the_field_count() {
        let bundle = FacilityBundle::sample();
        let field = find_field(&bundle, "sector").unwrap();
        let entries = source_entries(&field);
        assert_eq!(entries.len(), field.more_entries);
    }
}
