use tracing::info;

use crate::codec::encode::encode;
use crate::constant::{CSV_MEDIA_TYPE, EXPORT_FILENAME};
use crate::types::resultset::ResultSet;

/// A downloadable rendition of the full record set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: &'static str,
    pub media_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Re-encodes the current ResultSet for download. Always covers the full
/// set, never a filtered view. An empty or absent set is a no-op: no
/// artifact, no error.
pub fn export(set: Option<&ResultSet>) -> Option<ExportArtifact> {
    let set = set?;
    if set.is_empty() {
        return None;
    }
    let text = encode(set);
    info!("Prepared {} ({} bytes)", EXPORT_FILENAME, text.len());
    Some(ExportArtifact {
        filename: EXPORT_FILENAME,
        media_type: CSV_MEDIA_TYPE,
        bytes: text.into_bytes(),
    })
}
