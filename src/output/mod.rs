//! Result formatting and display
//!
//! - `list` - one category per line, optionally colored, pages after
//! - `json` - the whole `WalkResult` as pretty-printed JSON

mod config;
mod json;
mod list;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use list::{ListFormatter, print_list};
