//! Assessment grouping. Attribution records are pulled out first, the rest
//! cluster by group title, and rendering walks a fixed two-column layout of
//! known group names.

use std::collections::HashMap;

use crate::domain::Assessment;

/// Group names rendered in the left column, in order.
pub const LEFT_COLUMN_GROUPS: [&str; 2] = ["Worldly Assessment", "SLCP Assessment"];
/// Group names rendered in the right column, ahead of any ungrouped records.
pub const RIGHT_COLUMN_GROUPS: [&str; 1] = ["amfori Statuses"];

/// A resolved group ready for display: its member records in insertion order
/// plus the attribution record contributed for the group as a whole.
#[derive(Debug, Clone)]
pub struct AssessmentGroup {
    pub title: String,
    pub members: Vec<Assessment>,
    pub attribution: Option<Assessment>,
}

#[derive(Debug, Clone, Default)]
pub struct AssessmentGroups {
    attribution: HashMap<String, Assessment>,
    grouped: HashMap<String, Vec<Assessment>>,
    /// Records without a group title, in input order.
    pub ungrouped: Vec<Assessment>,
}

impl AssessmentGroups {
    /// Number of distinct group-attribution records extracted.
    pub fn attribution_count(&self) -> usize {
        self.attribution.len()
    }

    /// Number of displayable records across all groups.
    pub fn grouped_member_count(&self) -> usize {
        self.grouped.values().map(Vec::len).sum()
    }

    /// Resolve an ordered list of group names into displayable groups. A
    /// group with no surviving members is omitted entirely, attribution
    /// record included.
    pub fn column(&self, names: &[&str]) -> Vec<AssessmentGroup> {
        names
            .iter()
            .filter_map(|&name| {
                let members = self.grouped.get(name)?;
                Some(AssessmentGroup {
                    title: name.to_string(),
                    members: members.clone(),
                    attribution: self.attribution.get(name).cloned(),
                })
            })
            .collect()
    }

    pub fn left_column(&self) -> Vec<AssessmentGroup> {
        self.column(&LEFT_COLUMN_GROUPS)
    }

    pub fn right_column(&self) -> Vec<AssessmentGroup> {
        self.column(&RIGHT_COLUMN_GROUPS)
    }
}

/// Split an assessment array into attribution metadata, grouped members, and
/// ungrouped records.
///
/// A record with `group_contribution` set is attribution for that group and
/// leaves the displayable set; when several records claim the same group the
/// last one wins. Remaining records with a `group_title` keep their input
/// order within the group.
pub fn split_assessments(assessments: &[Assessment]) -> AssessmentGroups {
    let mut groups = AssessmentGroups::default();

    for assessment in assessments {
        if let Some(group) = &assessment.group_contribution {
            groups
                .attribution
                .insert(group.clone(), assessment.clone());
        } else if let Some(title) = &assessment.group_title {
            groups
                .grouped
                .entry(title.clone())
                .or_default()
                .push(assessment.clone());
        } else {
            groups.ungrouped.push(assessment.clone());
        }
    }

    groups
}
