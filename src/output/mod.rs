//! Output formatting for the clustering stage.

mod json;

pub use json::{to_json, to_json_pretty, LocalizedRecord};
