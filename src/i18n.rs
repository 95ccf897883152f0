// ==========================================
// Internationalization (i18n)
// ==========================================
// Backed by rust-i18n; the product surface is Vietnamese ("vi"),
// English ("en") is the fallback and development locale
// Note: the rust_i18n::i18n! macro is initialized in lib.rs
// ==========================================

/// Current locale code.
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Switch locale ("vi" or "en").
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message without parameters.
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message, substituting `%{name}` placeholders.
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
