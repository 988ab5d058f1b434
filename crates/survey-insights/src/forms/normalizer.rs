/// Clean one header label from the export: strip BOM and zero-width
/// characters, collapse runs of whitespace. Exported headers keep their
/// original casing so catalog labels match exactly.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
