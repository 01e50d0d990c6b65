// src/core/color.rs
//! Inline color → canonical `#rrggbb`.
//!
//! Lenient by contract: anything we cannot read comes back as `None` and the
//! caller falls through to the next source (ultimately the configured default).
use std::sync::LazyLock;

use regex::Regex;

static RGB: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(rgba?)\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$",
    )
    .unwrap_or_else(|e| panic!("rgb pattern: {e}"))
});

// First color-looking token inside a `background` shorthand.
static SHORTHAND_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)rgba?\([^)]*\)|#[0-9a-f]+|\btransparent\b")
        .unwrap_or_else(|e| panic!("shorthand pattern: {e}"))
});

/// `rgb(R, G, B)` → `#rrggbb`, `#…` unchanged, empty/`transparent`/unknown → `None`.
///
/// `rgba(…, 0)` counts as transparent; any other alpha is dropped. The alpha
/// argument belongs to `rgba` only: `rgb` with four components is unrecognized.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    let v = raw?.trim();
    if v.is_empty() || v.eq_ignore_ascii_case("transparent") {
        return None;
    }
    if v.starts_with('#') {
        return Some(s!(v));
    }

    let caps = RGB.captures(v)?;
    let is_rgba = caps[1].eq_ignore_ascii_case("rgba");
    match (is_rgba, caps.get(5)) {
        (true, Some(alpha)) => {
            let a: f32 = alpha.as_str().parse().ok()?;
            if a == 0.0 {
                return None;
            }
        }
        (false, None) => {}
        _ => return None,
    }

    let mut hex = String::with_capacity(7);
    hex.push('#');
    for i in 2..=4 {
        let c: u8 = caps[i].parse().ok()?; // >255 fails here
        hex.push_str(&format!("{c:02x}"));
    }
    Some(hex)
}

/// Pull the color out of a `background` shorthand such as `#fff url(x.png) no-repeat`.
///
/// Only the color token is returned; `normalize` decides whether it is usable.
pub fn shorthand_color(value: &str) -> Option<&str> {
    SHORTHAND_COLOR.find(value).map(|m| m.as_str())
}

/// Explicit value first, then each inline candidate, then the default.
pub fn resolve<'a, I>(explicit: Option<&str>, inline: I, default: &str) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    normalize(explicit)
        .or_else(|| inline.into_iter().find_map(normalize))
        .unwrap_or_else(|| s!(default))
}
