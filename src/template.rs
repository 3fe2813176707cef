use crate::context::{Context, Scope};
use crate::expand::expand;
use crate::interpolate::interpolate;

/// A template source and its render entry points.
///
/// Rendering is a pure function of the source and the context: block
/// expansion first, then interpolation over its result. There is no
/// compile step and no failure mode; whatever the tokens cannot resolve
/// degrades to empty output or verbatim marker text.
pub struct Template {
    source: String
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Template { source: source.into() }
    }

    /// Renders against `context`, which also serves as the root for
    /// `@root.` lookups and fallback resolution.
    pub fn render(&self, context: &dyn Context) -> String {
        self.render_with_root(context, context)
    }

    /// Renders against `context` with an explicitly supplied root, for
    /// callers that render a fragment scoped to part of a larger
    /// document context.
    pub fn render_with_root(&self, context: &dyn Context, root: &dyn Context) -> String {
        render_scoped(&self.source, &Scope::new(context, root))
    }
}

pub(crate) fn render_scoped(template: &str, scope: &Scope) -> String {
    interpolate(&expand(template, scope), scope)
}
