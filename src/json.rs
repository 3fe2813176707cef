use crate::context::Context;
pub use serde_json::Value as JsonValue;


impl Context for JsonValue {
    fn child(&self, name: &str) -> Option<&dyn Context> {
        self.get(name)
            .map(|v| v as &dyn Context)
    }

    fn children(&self) -> Option<Vec<&dyn Context>> {
        match self {
            JsonValue::Array(seq) =>
                Some(
                    seq.iter()
                        .map(|v| v as &dyn Context)
                        .collect::<_>()
                ),
            _ => None
        }
    }

    fn value(&self) -> Option<String> {
        match self {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            JsonValue::Null => Some(String::new()),
            _ => None
        }
    }
}
