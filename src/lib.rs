//! A small template engine for printable business documents.
//!
//! A [Template] holds an HTML source string with placeholder tokens and
//! renders it against a [Context] tree (payslip, delivery note, invoice
//! and report pages all feed it the same way: template text from a
//! configuration resource, data assembled from business records).
//!
//! The token grammar is deliberately tiny:
//! - `{{ path }}` — interpolation, HTML-escaped
//! - `{{{ path }}}` — interpolation, raw (caller-trusted HTML)
//! - `{{#each path}} ... {{/each}}` — one body render per sequence element
//! - `this` or `.` — the current context as a whole
//! - `@root.` prefix — force lookup against the outermost context
//!
//! Inside an `{{#each}}` body the element becomes the current context and
//! lookups that miss it fall back to the root context, so company-wide
//! fields stay reachable from per-row markup. Elements need not be
//! mappings: a scalar or null element is rendered as itself, so
//! `{{this}}` over a sequence of strings yields each string while any
//! property lookup into it simply misses. (Earlier in-page copies of
//! this logic flattened such elements to an empty mapping instead;
//! keeping the element reachable is a deliberate difference.) Rendering
//! never fails: missing values become empty strings and malformed block
//! markers are left in the output verbatim.
//!
//! A rendered fragment can be wrapped into a standalone printable page
//! with [DocumentKind::wrap].
//!
//!
//! # Samples
//!
//! ## Hello world
//!
//! ```
//! use stencil::{Template, JsonValue};
//!
//! let text = "hello, {{you}}!";
//! let data = r#"{
//!     "you": "world"
//! }"#;
//!
//! let template = Template::new(text);
//! let context = serde_json::from_str::<JsonValue>(data).unwrap();
//!
//! let result = template.render(&context);
//!
//! assert_eq!(result, "hello, world!")
//! ```
//!
//! ## Invoice rows
//!
//! ```
//! use stencil::{Template, YamlValue};
//! let text = "<ul>{{#each items}}<li>{{code}} {{name}} ({{@root.currency}})</li>{{/each}}</ul>";
//! let data = r#"
//!   currency: EUR
//!   items:
//!     - code: A1
//!       name: Widget
//!     - code: B2
//!       name: Gadget
//! "#;
//!
//! let template = Template::new(text);
//! let context = serde_yaml::from_str::<YamlValue>(data).unwrap();
//!
//! let result = template.render(&context);
//! assert_eq!(result, "<ul><li>A1 Widget (EUR)</li><li>B2 Gadget (EUR)</li></ul>");
//! ```
mod template;
mod context;
mod path;
mod escape;
mod interpolate;
mod expand;
mod document;
mod json;
mod yaml;

pub use self::template::Template;
pub use self::context::Context;
pub use self::document::DocumentKind;
pub use self::json::JsonValue;
pub use self::yaml::YamlValue;
