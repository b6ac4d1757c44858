//! Client-side upload filter.
//!
//! The backend decides what it can ingest; this only narrows the file picker
//! and skips obviously unsupported picks before they are sent.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

pub const ACCEPTED_EXTENSIONS: [&str; 4] = [".pdf", ".doc", ".docx", ".txt"];

/// Value for the file input's `accept` attribute.
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Whether a picked file name has one of the accepted extensions.
pub fn is_accepted_file_name(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|ext| lower.len() > ext.len() && lower.ends_with(ext))
}

/// Split picked files into accepted and rejected by name, preserving order.
pub fn partition_by_name<T>(
    files: impl IntoIterator<Item = T>,
    name: impl Fn(&T) -> String,
) -> (Vec<T>, Vec<T>) {
    files.into_iter().partition(|file| is_accepted_file_name(&name(file)))
}
