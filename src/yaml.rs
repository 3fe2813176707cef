use crate::context::Context;
pub use serde_yaml::Value as YamlValue;


impl Context for YamlValue {
    fn child(&self, name: &str) -> Option<&dyn Context> {
        self.get(name)
            .map(|v| v as &dyn Context)
    }

    fn children(&self) -> Option<Vec<&dyn Context>> {
        match self {
            YamlValue::Sequence(seq) =>
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
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => Some(n.to_string()),
            YamlValue::Bool(b) => Some(b.to_string()),
            YamlValue::Null => Some(String::new()),
            _ => None
        }
    }
}
