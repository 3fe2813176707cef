/// Escapes the five HTML-significant characters. Ampersands go first so
/// the entities introduced by the later substitutions are left alone.
pub(crate) fn html_escape(input: &str) -> String {
    input.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
