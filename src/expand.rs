use crate::context::{Context, Scope};
use crate::template::render_scoped;

const OPEN: &str = "{{#each";
const CLOSE: &str = "{{/each}}";

/// Expands `{{#each expr}} body {{/each}}` blocks. The keyword must be
/// followed by whitespace; a token like `{{#eachitems}}` is not a block
/// opener and stays verbatim.
///
/// The body runs to the first `{{/each}}` after the opening tag, so
/// blocks do not nest: an inner `{{#each}}` ends the outer body early
/// and its stray markers survive into the output. The deployed document
/// templates are all flat row lists and depend on this exact shape.
///
/// The bound expression must resolve to a sequence; anything else is
/// treated as empty and the block disappears. Each element renders the
/// body through the full pipeline as the new local context, with the
/// root carried through unchanged, and the renderings are concatenated
/// in element order. An opening tag with no matching close is left in
/// the output verbatim.
pub(crate) fn expand(template: &str, scope: &Scope) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        let after_open = start + OPEN.len();
        if !rest[after_open..].starts_with(|c: char| c.is_whitespace()) {
            // not the block keyword, e.g. "{{#eachitems}}"
            output.push_str(&rest[..after_open]);
            rest = &rest[after_open..];
            continue;
        }
        let (expr, body, after_block) = match span_block(&rest[after_open..]) {
            Some((expr, body, after)) => (expr, body, after_open + after),
            // unterminated block, the marker text stays visible
            None => break,
        };
        output.push_str(&rest[..start]);
        if let Some(items) = scope.lookup(expr).and_then(Context::children) {
            for item in items {
                output.push_str(&render_scoped(body, &scope.nested(item)));
            }
        }
        rest = &rest[after_block..];
    }
    output.push_str(rest);
    output
}

// splits the text following an opening "{{#each" into the bound
// expression, the block body and the position after the close tag
fn span_block(tail: &str) -> Option<(&str, &str, usize)> {
    let expr_len = tail.find("}}")?;
    let body_start = expr_len + 2;
    let body_len = tail[body_start..].find(CLOSE)?;
    let expr = tail[..expr_len].trim();
    let body = &tail[body_start..body_start + body_len];
    Some((expr, body, body_start + body_len + CLOSE.len()))
}
