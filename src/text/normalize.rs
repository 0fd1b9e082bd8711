//! OCR repair rules for chart zone labels
//!
//! Rules run in a fixed order; several assume earlier ones already ran
//! (the `Zone)` closure only matches canonical keyword spellings, and the
//! keyword filter only matches canonical vocabulary).

use once_cell::sync::Lazy;
use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}

static LEADING_NOISE: Lazy<Regex> = Lazy::new(|| compile(r#"^[|!"'\s,.;:]+"#));

/// Trailing "00" read as two letters right after a digit
static DIGIT_RUNS: Lazy<[Regex; 2]> = Lazy::new(|| [compile(r"(\d)UU"), compile(r"(\d)0C")]);

static RANGE_WORD: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:Ranne|Ranae|Kange|Ranaea)\b"));
static RANGE_EXTRA_S: Lazy<Regex> = Lazy::new(|| compile(r"\bRanges?\s+E"));

const EXHAUSTION_VARIANTS: &[&str] = &[
    "Evhauetinn",
    "Exnaustion",
    "Frhaustian",
    "CAnausuon",
    "CAnaustion",
    "CANausiCn",
    "CANaUuSIVN",
    "Fehaustion",
    "Frhaustinn",
    "Exnausuon",
    "Fxhaustion",
];

static EXHAUSTION_WORD: Lazy<Regex> = Lazy::new(|| {
    compile(&format!(r"(?i)\b(?:{})\b", EXHAUSTION_VARIANTS.join("|")))
});

static HIGH_WORD: Lazy<Regex> = Lazy::new(|| compile(r"\b(?:Hinh|Hiah|nigh|Mign)\b"));

/// Literal, case-sensitive substitutions
const WORD_FIXES: &[(&str, &str)] = &[
    ("Contirming", "Confirming"),
    ("contirming", "Confirming"),
    ("Contimming", "Confirming"),
    ("Cnanging", "Changing"),
    ("Chanaina", "Changing"),
    ("Channing", "Changing"),
];

static ZONE_CLOSURE: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        compile(r"\(([^)]*(?:Confirming|Changing|Weakness|Strength))\s+[Zz]on[aegkno]\)?\s*$"),
        compile(r"\(([^)]*(?:Confirming|Changing|Weakness|Strength))\s+[Zz]cne\)?\s*$"),
    ]
});

static UNCLOSED_PAREN: Lazy<Regex> =
    Lazy::new(|| compile(r"\(([^)]*(?:Zone|Weakness|Strength))\s*$"));

static REPEATED_CLOSE: Lazy<Regex> = Lazy::new(|| compile(r"\)\)+"));

static SPACE_BEFORE_POINT: Lazy<Regex> = Lazy::new(|| compile(r"(\d)\s+\."));
static SPACE_AFTER_POINT: Lazy<Regex> = Lazy::new(|| compile(r"\.\s+(\d)"));
static SPACE_BETWEEN_DIGITS: Lazy<Regex> = Lazy::new(|| compile(r"(\d)\s+(\d)"));

static OVERNIGHT: Lazy<Regex> = Lazy::new(|| compile(r"O['’`/]?N\b"));

static LOWERCASE_ZONE: Lazy<Regex> = Lazy::new(|| compile(r"(Confirming|Changing)\s+zone\)"));

/// Clean one raw OCR line. `None` means nothing meaningful is left.
///
/// The rule chain is re-applied until the line stops changing, so a later rule
/// exposing work for an earlier one ("2 0C" -> "20C" -> "200") is finished here.
pub fn normalize_line(raw: &str) -> Option<String> {
    let line = until_stable(raw, apply_rules);
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

fn apply_rules(raw: &str) -> String {
    let line = strip_leading_noise(raw);
    let line = normalize_brackets(&line);
    let line = repair_digit_runs(&line);
    let line = fix_vocabulary(&line);
    let line = close_zone_parenthetical(&line);
    let line = collapse_closing_parens(&line);
    let line = truncate_after_parenthetical(&line);
    let line = repair_numeric_spacing(&line);
    let line = repair_overnight(&line);
    let line = capitalize_trailing_zone(&line);
    line.trim().to_string()
}

/// Apply `rule` until its output equals its input
fn until_stable<F>(line: &str, rule: F) -> String
where
    F: Fn(&str) -> String,
{
    let mut current = line.to_string();
    loop {
        let next = rule(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Drop leading quotes, bars and punctuation; digits ("24H") stay
pub fn strip_leading_noise(line: &str) -> String {
    LEADING_NOISE.replace(line, "").into_owned()
}

/// `[`/`{` become `(`, `]`/`}` become `)`, then `((` collapses
pub fn normalize_brackets(line: &str) -> String {
    line.replace(['[', '{'], "(")
        .replace([']', '}'], ")")
        .replace("((", "(")
}

/// Matches are non-overlapping, so "20CC" needs a second pass to reach "2000"
pub fn repair_digit_runs(line: &str) -> String {
    until_stable(line, |line| {
        DIGIT_RUNS
            .iter()
            .fold(line.to_string(), |acc, re| re.replace_all(&acc, "${1}00").into_owned())
    })
}

/// Whole-word fixes for garbled Range/Exhaustion/High, literal fixes for Confirming/Changing
pub fn fix_vocabulary(line: &str) -> String {
    let line = RANGE_WORD.replace_all(line, "Range");
    let line = RANGE_EXTRA_S.replace_all(&line, "Range E");
    let line = EXHAUSTION_WORD.replace_all(&line, "Exhaustion");
    let line = HIGH_WORD.replace_all(&line, "High");

    WORD_FIXES
        .iter()
        .fold(line.into_owned(), |acc, &(wrong, right)| acc.replace(wrong, right))
}

/// Rewrite a garbled trailing "Zone" after a canonical keyword, then close any
/// parenthetical left open after Zone/Weakness/Strength
pub fn close_zone_parenthetical(line: &str) -> String {
    let line = ZONE_CLOSURE
        .iter()
        .fold(line.to_string(), |acc, re| re.replace(&acc, "(${1} Zone)").into_owned());
    UNCLOSED_PAREN.replace(&line, "(${1})").into_owned()
}

pub fn collapse_closing_parens(line: &str) -> String {
    REPEATED_CLOSE.replace_all(line, ")").into_owned()
}

/// Keep everything up to the last `)` when an `(` precedes it
pub fn truncate_after_parenthetical(line: &str) -> String {
    match line.rfind(')') {
        Some(close) if line[..close].contains('(') => line[..=close].to_string(),
        _ => line.to_string(),
    }
}

/// "25092 .25" / "25092. 25" -> "25092.25", "2 5 092" -> "25092"
pub fn repair_numeric_spacing(line: &str) -> String {
    let line = SPACE_BEFORE_POINT.replace_all(line, "${1}.");
    let line = SPACE_AFTER_POINT.replace_all(&line, ".${1}");
    until_stable(&line, |line| {
        SPACE_BETWEEN_DIGITS.replace_all(line, "${1}${2}").into_owned()
    })
}

/// O'N, O`N, ON -> O/N
pub fn repair_overnight(line: &str) -> String {
    OVERNIGHT.replace_all(line, "O/N").into_owned()
}

pub fn capitalize_trailing_zone(line: &str) -> String {
    LOWERCASE_ZONE.replace_all(line, "${1} Zone)").into_owned()
}
