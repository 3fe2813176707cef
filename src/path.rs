use crate::context::Context;

/// Walks a dotted identifier path into a context tree.
///
/// The path is trimmed and one leading `.` is stripped; an empty path
/// resolves to nothing. Each non-empty dot segment is a plain property
/// name, numeric ones included (`items.0.name` does not index into a
/// sequence). A missing step short-circuits to `None`; absence is never
/// an error.
pub(crate) fn resolve<'a>(obj: &'a dyn Context, path: &str) -> Option<&'a dyn Context> {
    let path = path.trim();
    let path = path.strip_prefix('.').unwrap_or(path);
    if path.is_empty() {
        return None;
    }
    let mut current = obj;
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        current = current.child(segment)?;
    }
    Some(current)
}
