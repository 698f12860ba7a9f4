pub mod metadata;
pub mod report;
