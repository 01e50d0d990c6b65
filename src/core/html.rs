// src/core/html.rs
//! Small helpers over the `scraper` tree. Everything here is read-only.
use scraper::{ElementRef, Selector};

/// Compile a selector known at build time.
///
/// Callers only pass literals from `config::consts`; a failure is a typo in that file.
pub fn compile(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("bad selector {css:?}: {e:?}"),
    }
}

/// Concatenated descendant text, trimmed at both ends (inner whitespace kept).
pub fn text_of(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    s!(raw.trim())
}

/// Trimmed text, `None` when it trims to nothing.
pub fn non_empty_text(el: ElementRef<'_>) -> Option<String> {
    let t = text_of(el);
    if t.is_empty() { None } else { Some(t) }
}

/// First descendant matching `sel`.
pub fn first<'a>(scope: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    scope.select(sel).next()
}

/// First match of the first selector that matches anything (precedence order).
pub fn first_of<'a>(scope: ElementRef<'a>, sels: &[Selector]) -> Option<ElementRef<'a>> {
    sels.iter().find_map(|sel| first(scope, sel))
}

/// Direct element children with the given tag name.
pub fn children_named<'a>(
    el: ElementRef<'a>,
    tag: &'a str,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name().eq_ignore_ascii_case(tag))
}

/// Nearest ancestor element with the given tag name (the element itself excluded).
pub fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name().eq_ignore_ascii_case(tag))
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Attribute value, `None` when missing or blank.
pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name).filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn closest_walks_up_to_cell() {
        let doc = Html::parse_document(
            r#"<table><tr><td data-date="2025-11-04"><div><a id="x">hi</a></div></td></tr></table>"#,
        );
        let a = doc.select(&compile("a#x")).next().unwrap();
        let td = closest(a, "td").unwrap();
        assert_eq!(attr(td, "data-date"), Some("2025-11-04"));
        assert!(closest(td, "a").is_none());
    }

    #[test]
    fn text_is_trimmed_not_collapsed() {
        let doc = Html::parse_fragment("<h4>\n  Linear  Algebra <b>II</b>\n</h4><p>   </p>");
        let h4 = doc.select(&compile("h4")).next().unwrap();
        assert_eq!(text_of(h4), "Linear  Algebra II");
        let p = doc.select(&compile("p")).next().unwrap();
        assert_eq!(non_empty_text(p), None);
    }

    #[test]
    fn first_of_respects_precedence() {
        let doc = Html::parse_fragment(r#"<li><p>fallback</p><p class="teacher">Prof. A</p></li>"#);
        let li = doc.select(&compile("li")).next().unwrap();
        let sels = [compile("p.teacher"), compile("p")];
        assert_eq!(text_of(first_of(li, &sels).unwrap()), "Prof. A");
    }
}
