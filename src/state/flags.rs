#[cfg(test)]
#[path = "flags_test.rs"]
mod flags_test;

use serde::Deserialize;

/// Capability flags delivered by the server's feature-flag endpoint.
///
/// Every flag defaults to off, so a missing or partially populated payload
/// degrades to the corresponding features staying disabled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    pub chat: bool,
}
