extern crate stencil;
use stencil::{Template, JsonValue};


#[test]
fn token_free_template_is_identity() {
    let text = "<table><tr><td>fixed</td></tr></table>";
    let template = Template::new(text);
    let context = serde_json::json!({"anything": 1});
    assert_eq!(template.render(&context), text);
}

#[test]
fn missing_path_renders_empty() {
    let template = Template::new("{{missing}}");
    let context = serde_json::json!({"present": 1});
    assert_eq!(template.render(&context), "");
}

#[test]
fn escaped_interpolation() {
    let template = Template::new("{{v}}");
    let context = serde_json::json!({"v": "<b>&\"'"});
    assert_eq!(template.render(&context), "&lt;b&gt;&amp;&quot;&#39;");
}

#[test]
fn raw_interpolation() {
    let template = Template::new("{{{v}}}");
    let context = serde_json::json!({"v": "<b>X</b>"});
    assert_eq!(template.render(&context), "<b>X</b>");
}

#[test]
fn this_token_over_a_scalar_context() {
    let template = Template::new("{{this}}");
    let context = JsonValue::String("value".to_owned());
    assert_eq!(template.render(&context), "value");
}

#[test]
fn iteration_over_rows() {
    let template = Template::new("{{#each items}}[{{n}}]{{/each}}");
    let context = serde_json::json!({"items": [{"n": 1}, {"n": 2}]});
    assert_eq!(template.render(&context), "[1][2]");
}

#[test]
fn root_lookup_inside_a_loop() {
    let context = serde_json::json!({"items": [{"n": 1}], "title": "T"});
    let explicit = Template::new("{{#each items}}{{@root.title}}-{{n}}{{/each}}");
    assert_eq!(explicit.render(&context), "T-1");
    let fallback = Template::new("{{#each items}}{{title}}-{{n}}{{/each}}");
    assert_eq!(fallback.render(&context), "T-1");
}

#[test]
fn non_sequence_each_binding_renders_nothing() {
    let template = Template::new("{{#each x}}Y{{/each}}");
    let context = serde_json::json!({"x": 5});
    assert_eq!(template.render(&context), "");
}

#[test]
fn delivery_note_rows_end_to_end() {
    let template = Template::new(
        "<ul>{{#each rows}}<li>{{code}} - {{name}}</li>{{/each}}</ul>"
    );
    let context = serde_json::json!({
        "rows": [
            {"code": "A1", "name": "Widget"},
            {"code": "B2", "name": "Gadget"}
        ]
    });
    assert_eq!(
        template.render(&context),
        "<ul><li>A1 - Widget</li><li>B2 - Gadget</li></ul>"
    );
}

#[test]
fn explicit_root_serves_fallback_lookups() {
    // a fragment rendered against part of a larger document context
    let root = serde_json::json!({"company": {"name": "Acme"}, "invoice": {"number": "F-12"}});
    let local = serde_json::json!({"number": "F-12"});
    let template = Template::new("{{company.name}} {{number}}");
    assert_eq!(template.render_with_root(&local, &root), "Acme F-12");
}

#[test]
fn explicit_root_serves_block_bindings() {
    let root = serde_json::json!({"lines": [{"qty": 2}, {"qty": 3}]});
    let local = serde_json::json!({"label": "out"});
    let template = Template::new("{{label}}:{{#each lines}}{{qty}}{{/each}}");
    assert_eq!(template.render_with_root(&local, &root), "out:23");
}

#[test]
fn contexts_are_not_mutated() {
    let context = serde_json::json!({"items": [{"n": 1}], "title": "T"});
    let before = context.clone();
    let template = Template::new("{{#each items}}{{title}}{{n}}{{/each}}");
    let _ = template.render(&context);
    assert_eq!(context, before);
}

#[test]
fn renders_are_independent() {
    let template = Template::new("{{v}}");
    let a = serde_json::json!({"v": "a"});
    let b = serde_json::json!({"v": "b"});
    assert_eq!(template.render(&a), "a");
    assert_eq!(template.render(&b), "b");
    assert_eq!(template.render(&a), "a");
}
