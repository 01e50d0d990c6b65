// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression: literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! selector {
    // Lazily compiled CSS selector for a `static`.
    // Only ever fed string literals from config::consts, so a parse failure is a typo.
    ($css:expr) => {
        ::std::sync::LazyLock::new(|| $crate::core::html::compile($css))
    };
}
