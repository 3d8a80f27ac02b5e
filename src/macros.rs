/// Compile a regex literal once and hand out a `&'static Regex`.
///
/// Patterns are literals checked by the unit tests of every call site, so the
/// compile step cannot fail at runtime.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
