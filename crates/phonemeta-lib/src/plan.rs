//! Static numbering-plan tables backing the offline resolver.
//!
//! Coverage is a curated subset of territories, not the full ITU plan;
//! calling codes missing from [`PLAN`] resolve to the no-region outcome.

/// One territory's slice of the international numbering plan.
#[derive(Debug, Clone, Copy)]
pub struct PlanEntry {
    /// Country calling code digits, without `+`.
    pub calling_code: &'static str,
    /// Two-letter region identifier.
    pub region: &'static str,
    /// English country name.
    pub country: &'static str,
    /// Valid national number lengths, inclusive bounds.
    pub national_lengths: (usize, usize),
    /// National prefixes assigned to mobile services.
    pub mobile_prefixes: &'static [&'static str],
    /// National prefixes assigned to toll-free services.
    pub toll_free_prefixes: &'static [&'static str],
    /// IANA timezone identifiers for the territory.
    pub time_zones: &'static [&'static str],
    /// Emergency short codes dialable in the territory.
    pub emergency: &'static [&'static str],
}

/// North American Numbering Plan area code assignment.
#[derive(Debug, Clone, Copy)]
pub struct NanpAreaCode {
    pub code: &'static str,
    /// `US` or `CA`; toll-free codes are plan-wide and use `US`.
    pub region: &'static str,
    /// Geographic description, empty for non-geographic codes.
    pub location: &'static str,
    pub time_zone: &'static str,
    pub toll_free: bool,
}

/// NANP shared calling code, split by area code in [`NANP_AREA_CODES`].
pub const NANP_CALLING_CODE: &str = "1";

pub const PLAN: &[PlanEntry] = &[
    PlanEntry {
        calling_code: "1",
        region: "US",
        country: "United States",
        national_lengths: (10, 10),
        mobile_prefixes: &[],
        toll_free_prefixes: &[],
        time_zones: &["America/New_York", "America/Chicago", "America/Denver", "America/Los_Angeles"],
        emergency: &["911"],
    },
    PlanEntry {
        calling_code: "7",
        region: "RU",
        country: "Russia",
        national_lengths: (10, 10),
        mobile_prefixes: &["9"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Moscow", "Asia/Yekaterinburg", "Asia/Vladivostok"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "20",
        region: "EG",
        country: "Egypt",
        national_lengths: (8, 10),
        mobile_prefixes: &["10", "11", "12", "15"],
        toll_free_prefixes: &["800"],
        time_zones: &["Africa/Cairo"],
        emergency: &["122"],
    },
    PlanEntry {
        calling_code: "27",
        region: "ZA",
        country: "South Africa",
        national_lengths: (9, 9),
        mobile_prefixes: &["6", "7", "8"],
        toll_free_prefixes: &["80"],
        time_zones: &["Africa/Johannesburg"],
        emergency: &["10111", "112"],
    },
    PlanEntry {
        calling_code: "30",
        region: "GR",
        country: "Greece",
        national_lengths: (10, 10),
        mobile_prefixes: &["69"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Athens"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "31",
        region: "NL",
        country: "Netherlands",
        national_lengths: (9, 9),
        mobile_prefixes: &["6"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Amsterdam"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "32",
        region: "BE",
        country: "Belgium",
        national_lengths: (8, 9),
        mobile_prefixes: &["4"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Brussels"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "33",
        region: "FR",
        country: "France",
        national_lengths: (9, 9),
        mobile_prefixes: &["6", "7"],
        toll_free_prefixes: &["80"],
        time_zones: &["Europe/Paris"],
        emergency: &["112", "15", "17", "18"],
    },
    PlanEntry {
        calling_code: "34",
        region: "ES",
        country: "Spain",
        national_lengths: (9, 9),
        mobile_prefixes: &["6", "7"],
        toll_free_prefixes: &["800", "900"],
        time_zones: &["Europe/Madrid"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "36",
        region: "HU",
        country: "Hungary",
        national_lengths: (8, 9),
        mobile_prefixes: &["20", "30", "70"],
        toll_free_prefixes: &["80"],
        time_zones: &["Europe/Budapest"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "39",
        region: "IT",
        country: "Italy",
        national_lengths: (8, 11),
        mobile_prefixes: &["3"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Rome"],
        emergency: &["112", "113"],
    },
    PlanEntry {
        calling_code: "40",
        region: "RO",
        country: "Romania",
        national_lengths: (9, 9),
        mobile_prefixes: &["7"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Bucharest"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "41",
        region: "CH",
        country: "Switzerland",
        national_lengths: (9, 9),
        mobile_prefixes: &["74", "75", "76", "77", "78", "79"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Zurich"],
        emergency: &["112", "117", "118"],
    },
    PlanEntry {
        calling_code: "43",
        region: "AT",
        country: "Austria",
        national_lengths: (7, 12),
        mobile_prefixes: &["6"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Vienna"],
        emergency: &["112", "133"],
    },
    PlanEntry {
        calling_code: "44",
        region: "GB",
        country: "United Kingdom",
        national_lengths: (9, 10),
        mobile_prefixes: &["7"],
        toll_free_prefixes: &["800", "808"],
        time_zones: &["Europe/London"],
        emergency: &["112", "999"],
    },
    PlanEntry {
        calling_code: "45",
        region: "DK",
        country: "Denmark",
        national_lengths: (8, 8),
        mobile_prefixes: &["2", "3", "4", "5", "6", "7"],
        toll_free_prefixes: &["80"],
        time_zones: &["Europe/Copenhagen"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "46",
        region: "SE",
        country: "Sweden",
        national_lengths: (7, 9),
        mobile_prefixes: &["7"],
        toll_free_prefixes: &["20"],
        time_zones: &["Europe/Stockholm"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "47",
        region: "NO",
        country: "Norway",
        national_lengths: (8, 8),
        mobile_prefixes: &["4", "9"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Oslo"],
        emergency: &["112", "110", "113"],
    },
    PlanEntry {
        calling_code: "48",
        region: "PL",
        country: "Poland",
        national_lengths: (9, 9),
        mobile_prefixes: &["45", "5", "6", "7", "8"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Warsaw"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "49",
        region: "DE",
        country: "Germany",
        national_lengths: (6, 13),
        mobile_prefixes: &["15", "16", "17"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Berlin"],
        emergency: &["112", "110"],
    },
    PlanEntry {
        calling_code: "52",
        region: "MX",
        country: "Mexico",
        national_lengths: (10, 10),
        mobile_prefixes: &[],
        toll_free_prefixes: &["800"],
        time_zones: &["America/Mexico_City", "America/Tijuana"],
        emergency: &["911"],
    },
    PlanEntry {
        calling_code: "54",
        region: "AR",
        country: "Argentina",
        national_lengths: (10, 10),
        mobile_prefixes: &["9"],
        toll_free_prefixes: &["800"],
        time_zones: &["America/Argentina/Buenos_Aires"],
        emergency: &["911"],
    },
    PlanEntry {
        calling_code: "55",
        region: "BR",
        country: "Brazil",
        national_lengths: (10, 11),
        mobile_prefixes: &[],
        toll_free_prefixes: &["800"],
        time_zones: &["America/Sao_Paulo", "America/Manaus"],
        emergency: &["190", "192", "193"],
    },
    PlanEntry {
        calling_code: "61",
        region: "AU",
        country: "Australia",
        national_lengths: (9, 9),
        mobile_prefixes: &["4"],
        toll_free_prefixes: &["18"],
        time_zones: &["Australia/Sydney", "Australia/Brisbane", "Australia/Perth"],
        emergency: &["000", "112"],
    },
    PlanEntry {
        calling_code: "62",
        region: "ID",
        country: "Indonesia",
        national_lengths: (8, 12),
        mobile_prefixes: &["8"],
        toll_free_prefixes: &["800"],
        time_zones: &["Asia/Jakarta", "Asia/Makassar"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "63",
        region: "PH",
        country: "Philippines",
        national_lengths: (10, 10),
        mobile_prefixes: &["9"],
        toll_free_prefixes: &["1800"],
        time_zones: &["Asia/Manila"],
        emergency: &["911"],
    },
    PlanEntry {
        calling_code: "64",
        region: "NZ",
        country: "New Zealand",
        national_lengths: (8, 10),
        mobile_prefixes: &["2"],
        toll_free_prefixes: &["800"],
        time_zones: &["Pacific/Auckland"],
        emergency: &["111"],
    },
    PlanEntry {
        calling_code: "65",
        region: "SG",
        country: "Singapore",
        national_lengths: (8, 8),
        mobile_prefixes: &["8", "9"],
        toll_free_prefixes: &["800"],
        time_zones: &["Asia/Singapore"],
        emergency: &["999", "995"],
    },
    PlanEntry {
        calling_code: "66",
        region: "TH",
        country: "Thailand",
        national_lengths: (8, 9),
        mobile_prefixes: &["6", "8", "9"],
        toll_free_prefixes: &["1800"],
        time_zones: &["Asia/Bangkok"],
        emergency: &["191"],
    },
    PlanEntry {
        calling_code: "81",
        region: "JP",
        country: "Japan",
        national_lengths: (9, 10),
        mobile_prefixes: &["70", "80", "90"],
        toll_free_prefixes: &["120", "800"],
        time_zones: &["Asia/Tokyo"],
        emergency: &["110", "119"],
    },
    PlanEntry {
        calling_code: "82",
        region: "KR",
        country: "South Korea",
        national_lengths: (8, 10),
        mobile_prefixes: &["1"],
        toll_free_prefixes: &["80"],
        time_zones: &["Asia/Seoul"],
        emergency: &["112", "119"],
    },
    PlanEntry {
        calling_code: "84",
        region: "VN",
        country: "Vietnam",
        national_lengths: (9, 10),
        mobile_prefixes: &["3", "5", "7", "8", "9"],
        toll_free_prefixes: &["1800"],
        time_zones: &["Asia/Ho_Chi_Minh"],
        emergency: &["113", "114", "115"],
    },
    PlanEntry {
        calling_code: "86",
        region: "CN",
        country: "China",
        national_lengths: (10, 11),
        mobile_prefixes: &["1"],
        toll_free_prefixes: &["400", "800"],
        time_zones: &["Asia/Shanghai"],
        emergency: &["110", "119", "120"],
    },
    PlanEntry {
        calling_code: "90",
        region: "TR",
        country: "Turkey",
        national_lengths: (10, 10),
        mobile_prefixes: &["5"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Istanbul"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "91",
        region: "IN",
        country: "India",
        national_lengths: (10, 10),
        mobile_prefixes: &["6", "7", "8", "9"],
        toll_free_prefixes: &["1800"],
        time_zones: &["Asia/Kolkata"],
        emergency: &["112", "100", "101"],
    },
    PlanEntry {
        calling_code: "234",
        region: "NG",
        country: "Nigeria",
        national_lengths: (8, 10),
        mobile_prefixes: &["7", "8", "9"],
        toll_free_prefixes: &["800"],
        time_zones: &["Africa/Lagos"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "351",
        region: "PT",
        country: "Portugal",
        national_lengths: (9, 9),
        mobile_prefixes: &["9"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Lisbon"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "353",
        region: "IE",
        country: "Ireland",
        national_lengths: (7, 9),
        mobile_prefixes: &["8"],
        toll_free_prefixes: &["1800"],
        time_zones: &["Europe/Dublin"],
        emergency: &["112", "999"],
    },
    PlanEntry {
        calling_code: "358",
        region: "FI",
        country: "Finland",
        national_lengths: (6, 11),
        mobile_prefixes: &["4", "50"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Helsinki"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "380",
        region: "UA",
        country: "Ukraine",
        national_lengths: (9, 9),
        mobile_prefixes: &["39", "50", "6", "7", "9"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Kyiv"],
        emergency: &["112"],
    },
    PlanEntry {
        calling_code: "420",
        region: "CZ",
        country: "Czechia",
        national_lengths: (9, 9),
        mobile_prefixes: &["6", "7"],
        toll_free_prefixes: &["800"],
        time_zones: &["Europe/Prague"],
        emergency: &["112", "150", "155", "158"],
    },
    PlanEntry {
        calling_code: "852",
        region: "HK",
        country: "Hong Kong",
        national_lengths: (8, 8),
        mobile_prefixes: &["4", "5", "6", "7", "9"],
        toll_free_prefixes: &["800"],
        time_zones: &["Asia/Hong_Kong"],
        emergency: &["999"],
    },
    PlanEntry {
        calling_code: "971",
        region: "AE",
        country: "United Arab Emirates",
        national_lengths: (8, 9),
        mobile_prefixes: &["5"],
        toll_free_prefixes: &["800"],
        time_zones: &["Asia/Dubai"],
        emergency: &["999", "112"],
    },
    PlanEntry {
        calling_code: "972",
        region: "IL",
        country: "Israel",
        national_lengths: (8, 9),
        mobile_prefixes: &["5"],
        toll_free_prefixes: &["1800"],
        time_zones: &["Asia/Jerusalem"],
        emergency: &["100", "101", "102"],
    },
];

/// NANP area code assignments used for geocoding and the US/CA split.
pub const NANP_AREA_CODES: &[NanpAreaCode] = &[
    NanpAreaCode { code: "202", region: "US", location: "Washington, D.C.", time_zone: "America/New_York", toll_free: false },
    NanpAreaCode { code: "212", region: "US", location: "New York", time_zone: "America/New_York", toll_free: false },
    NanpAreaCode { code: "213", region: "US", location: "California", time_zone: "America/Los_Angeles", toll_free: false },
    NanpAreaCode { code: "303", region: "US", location: "Colorado", time_zone: "America/Denver", toll_free: false },
    NanpAreaCode { code: "305", region: "US", location: "Florida", time_zone: "America/New_York", toll_free: false },
    NanpAreaCode { code: "312", region: "US", location: "Illinois", time_zone: "America/Chicago", toll_free: false },
    NanpAreaCode { code: "404", region: "US", location: "Georgia", time_zone: "America/New_York", toll_free: false },
    NanpAreaCode { code: "415", region: "US", location: "California", time_zone: "America/Los_Angeles", toll_free: false },
    NanpAreaCode { code: "416", region: "CA", location: "Ontario", time_zone: "America/Toronto", toll_free: false },
    NanpAreaCode { code: "512", region: "US", location: "Texas", time_zone: "America/Chicago", toll_free: false },
    NanpAreaCode { code: "514", region: "CA", location: "Quebec", time_zone: "America/Montreal", toll_free: false },
    NanpAreaCode { code: "604", region: "CA", location: "British Columbia", time_zone: "America/Vancouver", toll_free: false },
    NanpAreaCode { code: "617", region: "US", location: "Massachusetts", time_zone: "America/New_York", toll_free: false },
    NanpAreaCode { code: "646", region: "US", location: "New York", time_zone: "America/New_York", toll_free: false },
    NanpAreaCode { code: "650", region: "US", location: "California", time_zone: "America/Los_Angeles", toll_free: false },
    NanpAreaCode { code: "702", region: "US", location: "Nevada", time_zone: "America/Los_Angeles", toll_free: false },
    NanpAreaCode { code: "713", region: "US", location: "Texas", time_zone: "America/Chicago", toll_free: false },
    NanpAreaCode { code: "206", region: "US", location: "Washington", time_zone: "America/Los_Angeles", toll_free: false },
    NanpAreaCode { code: "773", region: "US", location: "Illinois", time_zone: "America/Chicago", toll_free: false },
    NanpAreaCode { code: "833", region: "US", location: "", time_zone: "America/New_York", toll_free: true },
    NanpAreaCode { code: "800", region: "US", location: "", time_zone: "America/New_York", toll_free: true },
    NanpAreaCode { code: "844", region: "US", location: "", time_zone: "America/New_York", toll_free: true },
    NanpAreaCode { code: "855", region: "US", location: "", time_zone: "America/New_York", toll_free: true },
    NanpAreaCode { code: "866", region: "US", location: "", time_zone: "America/New_York", toll_free: true },
    NanpAreaCode { code: "877", region: "US", location: "", time_zone: "America/New_York", toll_free: true },
    NanpAreaCode { code: "888", region: "US", location: "", time_zone: "America/New_York", toll_free: true },
    NanpAreaCode { code: "905", region: "CA", location: "Ontario", time_zone: "America/Toronto", toll_free: false },
];

/// Longest-prefix match of a digit string against the plan table.
///
/// Calling codes are 1-3 digits; the longest assigned code wins so that
/// e.g. `972` is Israel rather than Russia's `9...` space.
pub fn match_calling_code(digits: &str) -> Option<&'static PlanEntry> {
    let mut best: Option<&'static PlanEntry> = None;
    for entry in PLAN {
        if digits.starts_with(entry.calling_code) {
            match best {
                Some(b) if b.calling_code.len() >= entry.calling_code.len() => {}
                _ => best = Some(entry),
            }
        }
    }
    best
}

/// Look up a NANP area code assignment.
pub fn nanp_area_code(code: &str) -> Option<&'static NanpAreaCode> {
    NANP_AREA_CODES.iter().find(|a| a.code == code)
}
