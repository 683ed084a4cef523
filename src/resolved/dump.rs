use crate::error::*;
use crate::resolved::schema::ResolvedDocument;

/// Serialize `document` the way `swift package` writes `Package.resolved`:
/// keys sorted at every object level, two-space indentation, and a single
/// newline at the end of the file. The `pins` array keeps its order.
//
// Going through `serde_json::Value` is what sorts the keys: its object
// representation is a BTreeMap, so the flattened extra fields end up in
// order too instead of being appended after the typed ones.
pub fn dump(document: &ResolvedDocument) -> Result<String, Error> {
    let value = serde_json::to_value(document)
        .map_err(|e| new_error(format!("could not serialize resolved document: {}", e)))?;
    let mut res = serde_json::to_string_pretty(&value)
        .map_err(|e| new_error(format!("could not serialize resolved document: {}", e)))?;
    res.push('\n');
    Ok(res)
}
