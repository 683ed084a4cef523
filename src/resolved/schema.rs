use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The single `Package.resolved` format version this tool understands.
pub const SUPPORTED_RESOLVED_VERSION: u64 = 1;

/// Home for the types that represent a parsed `Package.resolved` file.
///
/// The document is strongly typed, but the document, pin list, and pin
/// levels carry a flattened `extra` map so that keys written by newer
/// tools survive a load/save round trip instead of being silently
/// dropped. The resolution state itself is strict: exactly the three
/// keys, always present, null allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDocument {
    pub object: PinList,
    pub version: u64,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinList {
    pub pins: Vec<Pin>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One resolved dependency. In the file this looks like:
///
/// ```text
/// {
///     "package": "DatadogSDK",
///     "repositoryURL": "https://github.com/DataDog/dd-sdk-ios",
///     "state": {
///         "branch": "dogfooding",
///         "revision": "4e93a8f1f662d9126074a0f355b4b6d20f9f30a7",
///         "version": null
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pin {
    pub package: String,

    #[serde(rename = "repositoryURL")]
    pub repository_url: String,

    pub state: ResolutionState,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// How a pin is currently resolved.
//
// Normally only one of `revision`/`version` is meaningfully set, next
// to an optional branch name. All three keys are always present in the
// file: `None` maps to an explicit `null`, never to a missing key.
// The `deserialize_with` hooks keep the keys required: without them,
// serde would default a missing `Option` field to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolutionState {
    #[serde(deserialize_with = "nullable_string")]
    pub branch: Option<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub revision: Option<String>,
    #[serde(deserialize_with = "nullable_string")]
    pub version: Option<String>,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
}

impl std::fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        fn field(value: &Option<String>) -> String {
            match value {
                Some(x) => format!("\"{}\"", x),
                None => "null".to_string(),
            }
        }
        write!(
            f,
            "{{branch: {}, revision: {}, version: {}}}",
            field(&self.branch),
            field(&self.revision),
            field(&self.version)
        )
    }
}
