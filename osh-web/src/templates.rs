use askama::Template;

use osh_core::dataset::FacilityBundle;
use osh_core::domain::FacilityProfile;
use osh_core::map::google_maps_url;
use osh_core::provenance::{partition_contributors, recency_sorted, top_contributors};

use crate::models::{
    assessment_columns, certification_views, claimed_fields, contributor_card,
    environmental_views, general_fields, location_fields, panel_view, section_links,
    source_entries, type_count_views, workforce_views, AssessmentGroupView, AssessmentItemView,
    CertificationView, ContributorCardView, DataFieldView, EnvironmentalMetricView, PageState,
    PanelView, SectionLinkView, SourceEntryView, TypeCountView, WorkforceMetricView,
    CLAIMED_PANEL_KEY, PANEL_ASSESSMENTS, PANEL_CERTIFICATIONS, PANEL_ENVIRONMENT,
    PANEL_GRIEVANCE, PANEL_LIVING_WAGE,
};

#[derive(Template)]
#[template(path = "facility.html")]
pub struct FacilityTemplate {
    pub facility: FacilityProfile,
    pub sections: Vec<SectionLinkView>,
    pub type_counts: Vec<TypeCountView>,
    pub top_contributors: Vec<String>,
    pub total_contributors: usize,
    pub contributors_href: String,
    pub data_json_href: String,
    pub general_fields: Vec<DataFieldView>,
    pub address_field: DataFieldView,
    pub coordinates_field: DataFieldView,
    pub map_image_url: String,
    pub map_zoom_in_href: String,
    pub map_zoom_out_href: String,
    pub map_reset_href: String,
    pub google_maps_href: String,
    pub claimed_open: bool,
    pub claimed_toggle_href: String,
    pub claimed_fields: Vec<DataFieldView>,
    pub assessments_panel: PanelView,
    pub certifications_panel: PanelView,
    pub environment_panel: PanelView,
    pub living_wage_panel: PanelView,
    pub grievance_panel: PanelView,
    pub assessments_left: Vec<AssessmentGroupView>,
    pub assessments_right: Vec<AssessmentGroupView>,
    pub assessments_ungrouped: Vec<AssessmentItemView>,
    pub certifications: Vec<CertificationView>,
    pub environmental_metrics: Vec<EnvironmentalMetricView>,
    pub workforce_metrics: Vec<WorkforceMetricView>,
}

impl FacilityTemplate {
    pub fn build(bundle: &FacilityBundle, state: &PageState) -> Self {
        let facility = bundle.facility.clone();
        let mut location = location_fields(bundle).into_iter();
        let address_field = location.next().expect("address field is defined");
        let coordinates_field = location.next().expect("coordinates field is defined");
        let columns = assessment_columns(bundle);

        Self {
            sections: section_links(state),
            type_counts: type_count_views(bundle),
            top_contributors: top_contributors(&bundle.contributors)
                .into_iter()
                .map(|c| c.name)
                .collect(),
            total_contributors: bundle.total_contributors,
            contributors_href: format!("/facilities/{}/contributors", facility.os_id),
            data_json_href: format!("/facilities/{}/data.json", facility.os_id),
            general_fields: general_fields(bundle),
            address_field,
            coordinates_field,
            map_image_url: state.map.tile_url(facility.latitude, facility.longitude),
            map_zoom_in_href: state.zoom_href(state.map.zoom_in().zoom),
            map_zoom_out_href: state.zoom_href(state.map.zoom_out().zoom),
            map_reset_href: state.zoom_href(state.map.reset().zoom),
            google_maps_href: google_maps_url(facility.latitude, facility.longitude),
            claimed_open: state.claimed.is_open(CLAIMED_PANEL_KEY),
            claimed_toggle_href: state.claimed_toggle_href(),
            claimed_fields: claimed_fields(bundle),
            assessments_panel: panel_view(state, PANEL_ASSESSMENTS, "assessments"),
            certifications_panel: panel_view(state, PANEL_CERTIFICATIONS, "certifications"),
            environment_panel: panel_view(state, PANEL_ENVIRONMENT, "environment"),
            living_wage_panel: panel_view(state, PANEL_LIVING_WAGE, "living-wage"),
            grievance_panel: panel_view(state, PANEL_GRIEVANCE, "grievance-mechanism"),
            assessments_left: columns.left,
            assessments_right: columns.right,
            assessments_ungrouped: columns.ungrouped,
            certifications: certification_views(&bundle.certifications),
            environmental_metrics: environmental_views(&bundle.environmental_metrics),
            workforce_metrics: workforce_views(&bundle.workforce_metrics),
            facility,
        }
    }
}

/// Drawer partial listing every contributor, either partitioned by upload
/// kind or flattened most-recent-first.
#[derive(Template)]
#[template(path = "partials/contributors_panel.html")]
pub struct ContributorsPanelTemplate {
    pub total_contributors: usize,
    pub type_counts: Vec<TypeCountView>,
    pub view_recent: bool,
    pub recent_contributors: Vec<ContributorCardView>,
    pub list_contributors: Vec<ContributorCardView>,
    pub individual_contributors: Vec<ContributorCardView>,
    pub partitioned_href: String,
    pub recent_href: String,
}

impl ContributorsPanelTemplate {
    pub fn build(bundle: &FacilityBundle, view_recent: bool) -> Self {
        let partition = partition_contributors(&bundle.contributors);
        let base = format!("/facilities/{}/contributors", bundle.facility.os_id);
        Self {
            total_contributors: bundle.total_contributors,
            type_counts: type_count_views(bundle),
            view_recent,
            recent_contributors: recency_sorted(&bundle.contributors)
                .iter()
                .map(contributor_card)
                .collect(),
            list_contributors: partition.list_contributors.iter().map(contributor_card).collect(),
            individual_contributors: partition
                .individual_contributors
                .iter()
                .map(contributor_card)
                .collect(),
            recent_href: format!("{base}?view=recent"),
            partitioned_href: base,
        }
    }
}

/// Standalone page wrapping the contributors panel for non-HTMX requests.
#[derive(Template)]
#[template(path = "contributors.html")]
pub struct ContributorsPageTemplate {
    pub facility_name: String,
    pub back_href: String,
    pub total_contributors: usize,
    pub type_counts: Vec<TypeCountView>,
    pub view_recent: bool,
    pub recent_contributors: Vec<ContributorCardView>,
    pub list_contributors: Vec<ContributorCardView>,
    pub individual_contributors: Vec<ContributorCardView>,
    pub partitioned_href: String,
    pub recent_href: String,
}

impl ContributorsPageTemplate {
    pub fn build(bundle: &FacilityBundle, view_recent: bool) -> Self {
        let panel = ContributorsPanelTemplate::build(bundle, view_recent);
        Self {
            facility_name: bundle.facility.name.clone(),
            back_href: format!("/facilities/{}", bundle.facility.os_id),
            total_contributors: panel.total_contributors,
            type_counts: panel.type_counts,
            view_recent: panel.view_recent,
            recent_contributors: panel.recent_contributors,
            list_contributors: panel.list_contributors,
            individual_contributors: panel.individual_contributors,
            partitioned_href: panel.partitioned_href,
            recent_href: panel.recent_href,
        }
    }
}

/// Drawer partial behind a field's "+N data sources" link.
#[derive(Template)]
#[template(path = "partials/field_sources.html")]
pub struct FieldSourcesTemplate {
    pub label: String,
    pub total_count: usize,
    pub promoted_value: String,
    pub promoted_contributor: String,
    pub promoted_date: String,
    pub entries: Vec<SourceEntryView>,
}

impl FieldSourcesTemplate {
    pub fn build(field: &DataFieldView) -> Self {
        Self {
            label: field.label.to_string(),
            total_count: field.more_entries + 1,
            promoted_value: field.value.clone(),
            promoted_contributor: field.contributor.clone(),
            promoted_date: field.contributed_at.clone(),
            entries: source_entries(field),
        }
    }
}
