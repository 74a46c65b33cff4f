use toml::Value;

/// Literal token replaced by the current year during configuration loading.
pub const YEAR_TOKEN: &str = "YEAR_PLACEHOLDER";

/// Literal token replaced by the configured name during configuration loading.
pub const NAME_TOKEN: &str = "NAME_PLACEHOLDER";

/// The values substituted for the two placeholder tokens.
#[derive(Debug, Clone)]
pub struct PlaceholderContext {
    name: String,
    year: i32,
}

impl PlaceholderContext {
    pub fn new(name: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            year,
        }
    }

    /// Replace every occurrence of both tokens in a single string.
    ///
    /// The year token is substituted first, then the name token; each pass is
    /// a plain non-overlapping literal replacement.
    pub fn substitute(&self, text: &str) -> String {
        text.replace(YEAR_TOKEN, &self.year.to_string())
            .replace(NAME_TOKEN, &self.name)
    }

    /// Recursively substitute tokens in every string leaf of a TOML value.
    ///
    /// Tables and arrays are walked at any nesting depth; non-string scalars
    /// pass through untouched.
    pub fn resolve(&self, value: Value) -> Value {
        match value {
            Value::String(s) => Value::String(self.substitute(&s)),
            Value::Table(table) => Value::Table(
                table
                    .into_iter()
                    .map(|(key, inner)| (key, self.resolve(inner)))
                    .collect(),
            ),
            Value::Array(items) => {
                Value::Array(items.into_iter().map(|inner| self.resolve(inner)).collect())
            }
            other => other,
        }
    }
}
