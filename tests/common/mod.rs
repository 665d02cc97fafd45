#![allow(dead_code)]

pub mod command;
pub mod file;

/// Root sentinel as stored in `.trit/prev` before the first commit
pub const ROOT_COMMIT_ID: &str = "0000000000000000000000000000000000000000";

/// Read one of the metadata files under `.trit`
pub fn read_metadata(dir: &std::path::Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(".trit").join(name))
        .unwrap_or_else(|e| panic!("Failed to read .trit/{}: {}", name, e))
}
