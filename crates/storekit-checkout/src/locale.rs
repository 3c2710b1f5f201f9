//! Locale-prefixed path construction for country/language switching.
//!
//! Selecting a market triggers a full navigation to
//! `/{lang}-{COUNTRY}{current_path}` — a deliberate boundary that forces
//! server-rendered, locale-correct data. This module only does the path
//! math; the navigation itself belongs to the caller.

use storekit_core::Locale;

/// Splits a path into its locale prefix (if it carries one) and the rest.
///
/// `"/fr-CA/collections/all"` becomes `(Some(fr-CA), "/collections/all")`;
/// a bare `"/fr-CA"` yields `(Some(fr-CA), "/")`. Paths without a valid
/// locale segment are returned unchanged.
#[must_use]
pub fn strip_locale_prefix(path: &str) -> (Option<Locale>, &str) {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let end = trimmed.find(['/', '?']).unwrap_or(trimmed.len());

    match Locale::parse(&trimmed[..end]) {
        Some(locale) => {
            let rest = &trimmed[end..];
            if rest.is_empty() {
                (Some(locale), "/")
            } else {
                (Some(locale), rest)
            }
        }
        None => (None, path),
    }
}

/// Builds the navigation target for switching to `locale`, keeping the
/// current page and query string.
///
/// Any existing locale prefix on `current_path` is replaced, never stacked.
#[must_use]
pub fn localized_path(locale: &Locale, current_path: &str) -> String {
    let (_, rest) = strip_locale_prefix(current_path);
    match rest {
        "" | "/" => locale.prefix(),
        r if r.starts_with('/') || r.starts_with('?') => format!("{}{r}", locale.prefix()),
        // Tolerate callers passing "collections/all" without a slash.
        r => format!("{}/{r}", locale.prefix()),
    }
}
