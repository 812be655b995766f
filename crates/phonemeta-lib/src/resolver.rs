//! Metadata resolution: the capability contract plus the offline
//! implementation backed by the static numbering-plan tables.

use crate::error::ResolveError;
use crate::metadata::{LineType, MetadataResult};
use crate::plan::{self, PlanEntry, NANP_CALLING_CODE};

/// Capability contract the request handler requires from a resolver.
///
/// Implementations must be deterministic and side-effect-free: identical
/// input always yields an identical [`MetadataResult`]. That purity is what
/// makes duplicate concurrent resolution of the same key an acceptable
/// race at the cache layer.
pub trait Resolve: Send + Sync {
    /// Resolve an international-format candidate into enriched metadata.
    ///
    /// The candidate is usually pre-validated, but any string is accepted;
    /// syntactic garbage yields [`ResolveError::Unparseable`] and a number
    /// with no assignable territory yields [`ResolveError::NoRegion`].
    fn resolve(&self, candidate: &str) -> Result<MetadataResult, ResolveError>;
}

/// Pure in-process resolver over the static plan tables in [`plan`].
///
/// Coverage is the curated territory subset of [`plan::PLAN`]; calling
/// codes outside it are a no-region outcome, not a fault.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineResolver;

impl OfflineResolver {
    pub fn new() -> Self {
        Self
    }

    /// Number of territories the resolver can assign.
    pub fn plan_size(&self) -> usize {
        plan::PLAN.len()
    }
}

impl Resolve for OfflineResolver {
    fn resolve(&self, candidate: &str) -> Result<MetadataResult, ResolveError> {
        let trimmed = candidate.trim();
        let digits = trimmed.strip_prefix('+').ok_or_else(|| ResolveError::Unparseable {
            reason: "missing leading '+'".to_string(),
        })?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResolveError::Unparseable {
                reason: "expected digits after '+'".to_string(),
            });
        }

        let entry = plan::match_calling_code(digits).ok_or_else(|| ResolveError::NoRegion {
            number: format!("+{digits}"),
        })?;

        let national = &digits[entry.calling_code.len()..];
        if national.is_empty() {
            return Err(ResolveError::NoRegion {
                number: format!("+{digits}"),
            });
        }

        if entry.calling_code == NANP_CALLING_CODE {
            Ok(resolve_nanp(entry, digits, national))
        } else {
            Ok(resolve_geographic(entry, digits, national))
        }
    }
}

/// NANP (`+1`) resolution: the region is decided by the area code, which
/// splits the shared calling code between the US and Canada.
fn resolve_nanp(entry: &'static PlanEntry, digits: &str, national: &str) -> MetadataResult {
    let area = plan::nanp_area_code(national.get(..3).unwrap_or(""));

    let (region, country) = match area {
        Some(a) if a.region == "CA" => ("CA", "Canada"),
        _ => (entry.region, entry.country),
    };

    let is_valid = national.len() == 10 && national.starts_with(|c: char| ('2'..='9').contains(&c));
    let is_possible = possible_length(digits);
    let toll_free = area.is_some_and(|a| a.toll_free);

    let line_type = if !is_valid {
        LineType::Unknown
    } else if toll_free {
        LineType::TollFree
    } else {
        // NANP area codes do not distinguish mobile from fixed-line service.
        LineType::FixedLineOrMobile
    };

    let location = match area {
        Some(a) if !a.location.is_empty() => a.location.to_string(),
        _ if is_valid => country.to_string(),
        _ => String::new(),
    };

    let time_zones: Vec<String> = match area {
        Some(a) => vec![a.time_zone.to_string()],
        None => entry.time_zones.iter().map(|tz| tz.to_string()).collect(),
    };

    MetadataResult {
        input: format!("+{digits}"),
        formatted: format_nanp(national),
        country: country.to_string(),
        country_code: "+1".to_string(),
        region_code: region.to_string(),
        location,
        carrier: String::new(),
        line_type,
        time_zones,
        is_valid,
        is_possible,
        is_valid_for_region: is_valid && area.is_some(),
        is_emergency: entry.emergency.contains(&national),
    }
}

fn resolve_geographic(entry: &'static PlanEntry, digits: &str, national: &str) -> MetadataResult {
    let (min, max) = entry.national_lengths;
    let is_valid = (min..=max).contains(&national.len());
    let is_possible = possible_length(digits);

    let line_type = if entry
        .toll_free_prefixes
        .iter()
        .any(|p| national.starts_with(p))
    {
        LineType::TollFree
    } else if entry.mobile_prefixes.iter().any(|p| national.starts_with(p)) {
        LineType::Mobile
    } else if is_valid {
        LineType::FixedLine
    } else {
        LineType::Unknown
    };

    MetadataResult {
        input: format!("+{digits}"),
        formatted: format_grouped(national),
        country: entry.country.to_string(),
        country_code: format!("+{}", entry.calling_code),
        region_code: entry.region.to_string(),
        location: if is_valid {
            entry.country.to_string()
        } else {
            String::new()
        },
        carrier: String::new(),
        line_type,
        time_zones: entry.time_zones.iter().map(|tz| tz.to_string()).collect(),
        is_valid,
        is_possible,
        is_valid_for_region: is_valid,
        is_emergency: entry.emergency.contains(&national),
    }
}

/// Length plausibility under any plan: 8 to 15 digits including the
/// calling code.
fn possible_length(digits: &str) -> bool {
    (8..=15).contains(&digits.len())
}

/// `(415) 555-2671` for a full 10-digit NANP national number.
fn format_nanp(national: &str) -> String {
    if national.len() == 10 {
        format!(
            "({}) {}-{}",
            &national[..3],
            &national[3..6],
            &national[6..]
        )
    } else {
        national.to_string()
    }
}

/// Space-separated groups of three digits, remainder leading, e.g.
/// `2071838750` becomes `2 071 838 750`.
fn format_grouped(national: &str) -> String {
    let lead = national.len() % 3;
    let mut out = String::with_capacity(national.len() + national.len() / 3 + 1);
    for (i, c) in national.chars().enumerate() {
        if i != 0 && (i == lead || (i > lead && (i - lead) % 3 == 0)) {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(candidate: &str) -> Result<MetadataResult, ResolveError> {
        OfflineResolver::new().resolve(candidate)
    }

    #[test]
    fn resolves_us_number_with_known_area_code() {
        let meta = resolve("+14155552671").unwrap();
        assert_eq!(meta.input, "+14155552671");
        assert_eq!(meta.formatted, "(415) 555-2671");
        assert_eq!(meta.country, "United States");
        assert_eq!(meta.country_code, "+1");
        assert_eq!(meta.region_code, "US");
        assert_eq!(meta.location, "California");
        assert_eq!(meta.line_type, LineType::FixedLineOrMobile);
        assert_eq!(meta.time_zones, vec!["America/Los_Angeles".to_string()]);
        assert!(meta.is_valid);
        assert!(meta.is_possible);
        assert!(meta.is_valid_for_region);
        assert!(!meta.is_emergency);
    }

    #[test]
    fn splits_canadian_area_codes_off_the_shared_calling_code() {
        let meta = resolve("+16045551234").unwrap();
        assert_eq!(meta.region_code, "CA");
        assert_eq!(meta.country, "Canada");
        assert_eq!(meta.location, "British Columbia");
    }

    #[test]
    fn classifies_nanp_toll_free() {
        let meta = resolve("+18005551234").unwrap();
        assert_eq!(meta.line_type, LineType::TollFree);
        assert_eq!(meta.region_code, "US");
        assert!(meta.is_valid);
    }

    #[test]
    fn unknown_nanp_area_code_is_not_valid_for_region() {
        let meta = resolve("+19995551234").unwrap();
        assert_eq!(meta.region_code, "US");
        assert!(meta.is_valid);
        assert!(!meta.is_valid_for_region);
        assert_eq!(meta.location, "United States");
    }

    #[test]
    fn resolves_uk_mobile() {
        let meta = resolve("+447911123456").unwrap();
        assert_eq!(meta.region_code, "GB");
        assert_eq!(meta.country, "United Kingdom");
        assert_eq!(meta.line_type, LineType::Mobile);
        assert_eq!(meta.formatted, "7 911 123 456");
        assert!(meta.is_valid);
    }

    #[test]
    fn resolves_german_fixed_line() {
        let meta = resolve("+49301234567").unwrap();
        assert_eq!(meta.region_code, "DE");
        assert_eq!(meta.line_type, LineType::FixedLine);
        assert_eq!(meta.time_zones, vec!["Europe/Berlin".to_string()]);
    }

    #[test]
    fn unassigned_calling_code_is_no_region() {
        let err = resolve("+999555012345678").unwrap_err();
        assert!(matches!(err, ResolveError::NoRegion { .. }));
    }

    #[test]
    fn garbage_is_unparseable() {
        assert!(matches!(
            resolve("not-a-number").unwrap_err(),
            ResolveError::Unparseable { .. }
        ));
        assert!(matches!(
            resolve("+44abc").unwrap_err(),
            ResolveError::Unparseable { .. }
        ));
        assert!(matches!(
            resolve("+").unwrap_err(),
            ResolveError::Unparseable { .. }
        ));
    }

    #[test]
    fn resolution_is_deterministic() {
        let a = resolve("+14155552671").unwrap();
        let b = resolve("+14155552671").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_length_for_region_is_not_valid_but_reported() {
        let meta = resolve("+34612345678").unwrap();
        assert_eq!(meta.region_code, "ES");
        assert!(meta.is_valid, "9 national digits is valid");

        let meta = resolve("+34612345").unwrap();
        assert!(!meta.is_valid);
        assert!(!meta.is_valid_for_region);
        assert_eq!(meta.line_type, LineType::Mobile);
    }

    #[test]
    fn grouped_formatting_is_stable() {
        assert_eq!(format_grouped("2071838750"), "2 071 838 750");
        assert_eq!(format_grouped("123456"), "123 456");
        assert_eq!(format_grouped("12345"), "12 345");
    }
}
