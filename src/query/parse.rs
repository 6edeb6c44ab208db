//! Query string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.

use alloc::string::String;
use alloc::vec::Vec;

use log::warn;

use super::ParseWarning;
use super::instructions::Instructions;
use crate::debounce::SettlePolicy;
use crate::orientation::Orientation;

/// Parse a query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let key = percent_decode(&raw_key);
        let value = percent_decode(&raw_value);
        let key_lower = key.to_ascii_lowercase();

        dispatch_key(&key_lower, &value, &mut inst, &mut warnings);
    }

    for w in &warnings {
        warn!("query: {w:?}");
    }
    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        "orientation" | "mode" => set_or_warn(
            &mut inst.orientation,
            parse_orientation(value),
            key,
            value,
            "expected landscape|portrait",
            warnings,
        ),
        "maxwidth" => set_or_warn(
            &mut inst.max_width,
            parse_pixels(value),
            key,
            value,
            "expected a positive number",
            warnings,
        ),
        "maxheight" => set_or_warn(
            &mut inst.max_height,
            parse_pixels(value),
            key,
            value,
            "expected a positive number",
            warnings,
        ),
        "aspect" => set_or_warn(
            &mut inst.aspect,
            parse_ratio(value),
            key,
            value,
            "expected w:h, w/h or a positive number",
            warnings,
        ),
        "aspect.landscape" => set_or_warn(
            &mut inst.aspect_landscape,
            parse_ratio(value),
            key,
            value,
            "expected w:h, w/h or a positive number",
            warnings,
        ),
        "aspect.portrait" => set_or_warn(
            &mut inst.aspect_portrait,
            parse_ratio(value),
            key,
            value,
            "expected w:h, w/h or a positive number",
            warnings,
        ),
        "settle" | "debounce" => set_or_warn(
            &mut inst.settle_ms,
            parse_millis(value),
            key,
            value,
            "expected milliseconds",
            warnings,
        ),
        "settle.policy" => set_or_warn(
            &mut inst.settle_policy,
            parse_policy(value),
            key,
            value,
            "expected overlap|coalesce",
            warnings,
        ),
        _ => warnings.push(ParseWarning::KeyNotRecognized {
            key: String::from(key),
            value: String::from(value),
        }),
    }
}

/// Set a field, warning on duplicate or unparseable value.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    reason: &'static str,
    warnings: &mut Vec<ParseWarning>,
) {
    match parsed {
        Some(v) => {
            if field.is_some() {
                warnings.push(ParseWarning::DuplicateKey {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
            *field = Some(v);
        }
        None => warnings.push(ParseWarning::ValueInvalid {
            key: canonical_key(key),
            value: String::from(value),
            reason,
        }),
    }
}

// ---- Value parsers ----

fn parse_f64(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Positive pixel count, optional trailing "px".
fn parse_pixels(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s.strip_suffix("px").unwrap_or(s);
    parse_f64(s).filter(|&v| v > 0.0)
}

/// `16:9`, `16/9`, or a plain decimal.
fn parse_ratio(s: &str) -> Option<f64> {
    let ratio = match s.find([':', '/']) {
        Some(pos) => parse_f64(&s[..pos])? / parse_f64(&s[pos + 1..])?,
        None => parse_f64(s)?,
    };
    Some(ratio).filter(|r| r.is_finite() && *r > 0.0)
}

/// Milliseconds, optional trailing "ms".
fn parse_millis(s: &str) -> Option<u64> {
    let s = s.trim();
    let s = s.strip_suffix("ms").unwrap_or(s);
    s.trim().parse::<u64>().ok()
}

fn parse_orientation(s: &str) -> Option<Orientation> {
    match s.trim().to_ascii_lowercase().as_str() {
        "landscape" | "l" => Some(Orientation::Landscape),
        "portrait" | "p" => Some(Orientation::Portrait),
        _ => None,
    }
}

fn parse_policy(s: &str) -> Option<SettlePolicy> {
    match s.trim().to_ascii_lowercase().as_str() {
        "overlap" => Some(SettlePolicy::Overlap),
        "coalesce" => Some(SettlePolicy::Coalesce),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&'.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (String, String) {
    match pair.find('=') {
        Some(pos) => (String::from(&pair[..pos]), String::from(&pair[pos + 1..])),
        None => (String::from(pair), String::new()),
    }
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                if let (Some(hi), Some(lo)) = (hex_digit(bytes[i + 1]), hex_digit(bytes[i + 2])) {
                    out.push(hi << 4 | lo);
                    i += 3;
                } else {
                    out.push(b'%');
                    i += 1;
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Static name for a recognized key, used in warnings.
fn canonical_key(key: &str) -> &'static str {
    match key {
        "orientation" | "mode" => "orientation",
        "maxwidth" => "maxwidth",
        "maxheight" => "maxheight",
        "aspect" => "aspect",
        "aspect.landscape" => "aspect.landscape",
        "aspect.portrait" => "aspect.portrait",
        "settle" | "debounce" => "settle",
        "settle.policy" => "settle.policy",
        _ => "unknown",
    }
}
