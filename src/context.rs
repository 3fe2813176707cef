use crate::path::resolve;

/// Read-only view over a data tree of mappings, sequences and scalars.
///
/// Implemented for [crate::JsonValue] and [crate::YamlValue]; callers
/// with a native data model can implement it directly instead of
/// converting through serde values.
pub trait Context {
    /// Property lookup by name. `None` for scalars, sequences and
    /// missing properties.
    fn child(&self, name: &str) -> Option<&dyn Context>;

    /// Element views, for sequences only.
    fn children(&self) -> Option<Vec<&dyn Context>>;

    /// Scalar display text. `None` for mappings and sequences,
    /// `Some("")` for null.
    fn value(&self) -> Option<String>;
}


/// The two-level environment a (sub)template renders in: the current
/// local context plus the unchanging outermost root. Block expansion
/// narrows `local` to each element; `root` is carried through untouched.
pub(crate) struct Scope<'a> {
    local: &'a dyn Context,
    root: &'a dyn Context,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(local: &'a dyn Context, root: &'a dyn Context) -> Self {
        Scope { local, root }
    }

    pub(crate) fn nested(&self, local: &'a dyn Context) -> Self {
        Scope::new(local, self.root)
    }

    /// Resolves a token expression. `this` and `.` name the local
    /// context as a whole; an `@root.` prefix forces root-only lookup;
    /// anything else resolves against the local context first and falls
    /// back to the root on a miss.
    pub(crate) fn lookup(&self, expr: &str) -> Option<&'a dyn Context> {
        let expr = expr.trim();
        if expr == "this" || expr == "." {
            return Some(self.local);
        }
        if let Some(path) = expr.strip_prefix("@root.") {
            return resolve(self.root, path);
        }
        resolve(self.local, expr).or_else(|| resolve(self.root, expr))
    }
}
