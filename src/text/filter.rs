/// Lowercase vocabulary a zone label must mention
pub const KEYWORDS: &[&str] = &[
    "zone",
    "range",
    "support",
    "resistance",
    "hvn",
    "gap",
    "initial",
    "aggressive",
    "pre-market",
];

/// Whether a normalized line names a zone or marker
pub fn is_zone_label(line: &str) -> bool {
    let lower = line.to_lowercase();
    KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}
