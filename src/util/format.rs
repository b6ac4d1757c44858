//! Display formatting for document metadata.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Document;

const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

/// Human-readable byte size: `512 B`, `1.5 KB`, `2.0 MB`.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Tooltip text for a document chip: type and size.
pub fn document_summary(doc: &Document) -> String {
    let kind = doc.content_type.as_deref().unwrap_or("unknown type");
    format!("{kind}, {}", format_size(doc.size))
}
