//! Resolved metadata value types.

use serde::Serialize;

/// Service classification of a number, as a closed enumeration.
///
/// Kept closed so an unknown classification is a compile error at the call
/// site rather than a silently stringified value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineType {
    Mobile,
    FixedLine,
    FixedLineOrMobile,
    TollFree,
    Voip,
    Unknown,
}

impl std::fmt::Display for LineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LineType::Mobile => "mobile",
            LineType::FixedLine => "fixed-line",
            LineType::FixedLineOrMobile => "fixed-line-or-mobile",
            LineType::TollFree => "toll-free",
            LineType::Voip => "voip",
            LineType::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Immutable enriched metadata for one resolved number.
///
/// This is the cached value and, serialized as-is, the success response
/// body. Field order matches the wire contract; serde emits camelCase keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataResult {
    /// Canonical number, e.g. `+14155552671`.
    pub input: String,
    /// National formatting, e.g. `(415) 555-2671`.
    pub formatted: String,
    /// English country name.
    pub country: String,
    /// Calling code with leading `+`, e.g. `+1`.
    pub country_code: String,
    /// Two-letter territory identifier, e.g. `US`.
    pub region_code: String,
    /// Geocoded location description; empty when unknown.
    pub location: String,
    /// Carrier name; empty when unknown.
    pub carrier: String,
    /// Service classification.
    pub line_type: LineType,
    /// IANA timezone identifiers for the number's territory.
    pub time_zones: Vec<String>,
    /// Valid under the territory's numbering plan.
    pub is_valid: bool,
    /// Length-plausible under any plan.
    pub is_possible: bool,
    /// Valid specifically for the resolved region.
    pub is_valid_for_region: bool,
    /// Matches an emergency short code for the region.
    pub is_emergency: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MetadataResult {
        MetadataResult {
            input: "+14155552671".to_string(),
            formatted: "(415) 555-2671".to_string(),
            country: "United States".to_string(),
            country_code: "+1".to_string(),
            region_code: "US".to_string(),
            location: "California".to_string(),
            carrier: String::new(),
            line_type: LineType::FixedLineOrMobile,
            time_zones: vec!["America/Los_Angeles".to_string()],
            is_valid: true,
            is_possible: true,
            is_valid_for_region: true,
            is_emergency: false,
        }
    }

    #[test]
    fn serializes_with_camel_case_wire_keys() {
        let json = serde_json::to_string(&sample()).unwrap();
        for key in [
            "\"input\"",
            "\"formatted\"",
            "\"country\"",
            "\"countryCode\"",
            "\"regionCode\"",
            "\"location\"",
            "\"carrier\"",
            "\"lineType\"",
            "\"timeZones\"",
            "\"isValid\"",
            "\"isPossible\"",
            "\"isValidForRegion\"",
            "\"isEmergency\"",
        ] {
            assert!(json.contains(key), "missing {key} in {json}");
        }
    }

    #[test]
    fn line_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&LineType::FixedLineOrMobile).unwrap(),
            "\"fixed-line-or-mobile\""
        );
        assert_eq!(
            serde_json::to_string(&LineType::TollFree).unwrap(),
            "\"toll-free\""
        );
    }

    #[test]
    fn serialization_is_deterministic() {
        let a = serde_json::to_string(&sample()).unwrap();
        let b = serde_json::to_string(&sample()).unwrap();
        assert_eq!(a, b);
    }
}
