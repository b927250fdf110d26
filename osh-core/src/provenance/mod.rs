//! Derived views over the static contributor and assessment records: who
//! gets listed where, in what order, and with which attribution line.

pub mod assessments;
pub mod contributors;
pub mod generator;

pub use assessments::{split_assessments, AssessmentGroup, AssessmentGroups};
pub use contributors::{
    partition_contributors, recency_sorted, top_contributors, ContributorPartition,
    TOP_CONTRIBUTOR_COUNT,
};
pub use generator::generate_contributors;
