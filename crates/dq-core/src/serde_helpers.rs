//! Shared serde customizations

use crate::report::SuiteEntry;
use serde::ser::SerializeMap;
use serde::Serializer;

/// Serialize suite entries as a JSON map keyed by table name,
/// preserving entry order.
pub(crate) fn suite_entries_as_map<S: Serializer>(
    entries: &[SuiteEntry],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for entry in entries {
        map.serialize_entry(&entry.table, &entry.outcome)?;
    }
    map.end()
}
