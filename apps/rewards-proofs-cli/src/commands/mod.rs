pub mod claim;
pub mod root;
pub mod snapshots;
pub mod source;
