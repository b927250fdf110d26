pub mod common;
pub mod dataset;
pub mod dates;
pub mod domain;
pub mod map;
pub mod provenance;
pub mod sections;

pub use domain::*;
