//! Contributor list ordering. Three independent projections of the same
//! source array: the partitioned all-contributors panel, the top-N sidebar
//! list, and the flat recency-sorted drawer list.

use chrono::NaiveDate;

use crate::dates::parse_display_date;
use crate::domain::Contributor;

/// How many contributors the sidebar shows before the "view all" link.
pub const TOP_CONTRIBUTOR_COUNT: usize = 7;

#[derive(Debug, Clone, Default)]
pub struct ContributorPartition {
    /// Contributors with at least one list upload, most recent upload first.
    pub list_contributors: Vec<Contributor>,
    /// Everyone else, most recently contributed first.
    pub individual_contributors: Vec<Contributor>,
}

impl ContributorPartition {
    pub fn len(&self) -> usize {
        self.list_contributors.len() + self.individual_contributors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Date of a contributor's most recent list upload. Uploads are stored most
/// recent first, so the first entry wins; contributors without uploads sort
/// by the fallback date.
fn first_upload_date(contributor: &Contributor) -> NaiveDate {
    let raw = contributor
        .list_uploads
        .first()
        .map(|upload| upload.date_contributed.as_str())
        .unwrap_or("");
    parse_display_date(raw)
}

fn last_contributed_date(contributor: &Contributor) -> NaiveDate {
    parse_display_date(&contributor.last_contributed)
}

/// Split contributors into list-upload and individual groups, each sorted
/// descending by recency. The sorts are stable, so ties keep their original
/// array order, and the two groups together preserve the input count.
pub fn partition_contributors(contributors: &[Contributor]) -> ContributorPartition {
    let (mut list_contributors, mut individual_contributors): (Vec<_>, Vec<_>) = contributors
        .iter()
        .cloned()
        .partition(Contributor::has_list_uploads);

    list_contributors.sort_by(|a, b| first_upload_date(b).cmp(&first_upload_date(a)));
    individual_contributors
        .sort_by(|a, b| last_contributed_date(b).cmp(&last_contributed_date(a)));

    ContributorPartition {
        list_contributors,
        individual_contributors,
    }
}

/// Sidebar view: the whole input sorted descending by `last_contributed`
/// alone (list-upload recency is ignored here), truncated to
/// [`TOP_CONTRIBUTOR_COUNT`].
pub fn top_contributors(contributors: &[Contributor]) -> Vec<Contributor> {
    let mut sorted = contributors.to_vec();
    sorted.sort_by(|a, b| last_contributed_date(b).cmp(&last_contributed_date(a)));
    sorted.truncate(TOP_CONTRIBUTOR_COUNT);
    sorted
}

/// Drawer view: the whole input sorted descending by the most recent list
/// upload when one exists, else `last_contributed`.
pub fn recency_sorted(contributors: &[Contributor]) -> Vec<Contributor> {
    let effective_date = |c: &Contributor| {
        c.list_uploads
            .first()
            .map(|upload| parse_display_date(&upload.date_contributed))
            .unwrap_or_else(|| last_contributed_date(c))
    };
    let mut sorted = contributors.to_vec();
    sorted.sort_by(|a, b| effective_date(b).cmp(&effective_date(a)));
    sorted
}
