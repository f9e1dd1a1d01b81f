//! Output module for persisting scrape results
//!
//! Results are dumped as indented JSON; nothing is written unless the caller
//! asks for it.

mod json;

pub use json::save_to_json;
