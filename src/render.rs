use std::iter;

use crate::{default_formatter, render_raw, CaseInsensitiveMap, Delimiters, FormatValue, Model};

/// Render `document` with `##` delimiters and case-insensitive keys.
///
/// ```
/// assert_eq!(sharps::render("###No##", [("No", 1)]), "#1");
/// assert_eq!(sharps::render("####", [("No", 1)]), "####");
/// ```
pub fn render<K, V>(document: &str, values: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: FormatValue,
{
    render_with(document, values, iter::empty::<(K, V)>(), default_formatter::<V>)
}

/// Like [`render`], with fallback values for keys `values` lacks.
///
/// ```
/// let out = sharps::render_with_alts(
///     "Your name is ##firstname##.##lastname##",
///     Vec::<(&str, Option<&str>)>::new(),
///     [("firstname", None), ("lastname", Some(""))],
/// );
/// assert_eq!(out, "Your name is .");
/// ```
pub fn render_with_alts<K, L, V>(
    document: &str,
    values: impl IntoIterator<Item = (K, V)>,
    alts: impl IntoIterator<Item = (L, V)>,
) -> String
where
    K: AsRef<str>,
    L: AsRef<str>,
    V: FormatValue,
{
    render_with(document, values, alts, default_formatter::<V>)
}

/// Like [`render_with_alts`], turning resolved values into text with
/// `formatter` instead of [`default_formatter`].
///
/// ```
/// let out = sharps::render_with(
///     "##a## ##b##",
///     [("a", 1.5)],
///     [("b", 2.0)],
///     |v: &f64| format!("{v:.2}"),
/// );
/// assert_eq!(out, "1.50 2.00");
/// ```
pub fn render_with<K, L, V, F>(
    document: &str,
    values: impl IntoIterator<Item = (K, V)>,
    alts: impl IntoIterator<Item = (L, V)>,
    formatter: F,
) -> String
where
    K: AsRef<str>,
    L: AsRef<str>,
    F: Fn(&V) -> String,
{
    let model = Model::from_parts(
        values.into_iter().collect::<CaseInsensitiveMap<V>>(),
        alts.into_iter().collect::<CaseInsensitiveMap<V>>(),
        formatter,
    );

    render_raw(document, &model, &Delimiters::SHARPS)
}
