use crate::index::types::Platform;

/// Separates the platform name from its location list.
pub const FIELD_DELIMITER: char = ':';
/// Separates locations within the location list.
pub const LOCATION_DELIMITER: char = ',';

/// Parses a whole catalogue, one platform per line.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Malformed lines are skipped
/// without being reported.
pub fn parse_catalogue(text: &str) -> Vec<Platform> {
    text.trim_start_matches('\u{feff}')
        .split(['\n', '\r'])
        .filter_map(parse_line)
        .collect()
}

/// Parses a single `name:/loc1,/loc2` line.
///
/// Returns `None` for blank lines, lines without exactly two fields, an empty
/// name, or a location list that is empty once blank items are removed.
pub fn parse_line(line: &str) -> Option<Platform> {
    if line.trim().is_empty() {
        return None;
    }

    let mut fields = line.split(FIELD_DELIMITER);
    let (name, locations) = match (fields.next(), fields.next(), fields.next()) {
        (Some(name), Some(locations), None) => (name.trim(), locations.trim()),
        _ => return None,
    };

    if name.is_empty() {
        return None;
    }

    let locations: Vec<String> = locations
        .split(LOCATION_DELIMITER)
        .map(str::trim)
        .filter(|location| !location.is_empty())
        .map(str::to_string)
        .collect();

    if locations.is_empty() {
        return None;
    }

    Some(Platform::new(name, locations))
}
