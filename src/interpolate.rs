use crate::context::{Context, Scope};
use crate::escape::html_escape;

/// Substitutes interpolation tokens in two passes: raw `{{{ expr }}}`
/// first, then escaped `{{ expr }}`. Raw must run first or the escaped
/// pass would match inside the triple braces.
///
/// The escaped pass re-scans the whole output of the raw pass, so a raw
/// value that itself contains `{{` may be reinterpreted as a token.
/// Callers must not feed token-like text through raw values; this is a
/// recognized constraint of the grammar, not something the engine
/// detects.
pub(crate) fn interpolate(template: &str, scope: &Scope) -> String {
    let raw = substitute(template, "{{{", "}}}", scope, false);
    substitute(&raw, "{{", "}}", scope, true)
}

fn substitute(
    input: &str, open: &str, close: &str, scope: &Scope, escaped: bool
) -> String {
    let mut output = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(start) = rest.find(open) {
        let after_open = start + open.len();
        let expr_len = match rest[after_open..].find(close) {
            Some(len) => len,
            // missing close delimiter, the tail stays verbatim
            None => break,
        };
        let expr = rest[after_open..after_open + expr_len].trim();
        if expr.starts_with('#') || expr.starts_with('/') {
            // block marker, not an interpolation token; any such marker
            // still present at this point is left visible in the output
            output.push_str(&rest[..after_open]);
            rest = &rest[after_open..];
            continue;
        }
        output.push_str(&rest[..start]);
        let text = scope.lookup(expr)
            .and_then(Context::value)
            .unwrap_or_default();
        match escaped {
            true => output.push_str(&html_escape(&text)),
            false => output.push_str(&text),
        }
        rest = &rest[after_open + expr_len + close.len()..];
    }
    output.push_str(rest);
    output
}
