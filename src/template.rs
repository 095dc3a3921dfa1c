//! Prompt template definitions
//!
//! A [`PromptTemplate`] declares everything needed to build a few-shot
//! prompt: the instruction, worked examples, the input variable names, the
//! output variable name, and the output format. Definitions can be built in
//! code with the `with_*` methods or loaded from a TOML file.
//!
//! # Example
//!
//! ```rust
//! use prompt_loom::{Example, OutputFormat, PromptTemplate};
//!
//! let template = PromptTemplate::new("Translate the word to French.")
//!     .with_input_keys(["word"])
//!     .with_output_key("translation")
//!     .with_output_format(OutputFormat::Text)
//!     .with_example(Example::new().with("word", "cat").with("translation", "chat"));
//!
//! assert_eq!(template.examples.len(), 1);
//! ```

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors that can occur when loading a template definition from TOML
#[derive(Error, Debug)]
pub enum TemplateFileError {
    #[error("Failed to read template file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse template TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Expected format of the output variable in examples
///
/// In `Json` mode, textual example outputs must parse as JSON and serialized
/// values have their braces doubled so they survive placeholder substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    #[default]
    Json,
}

/// A worked input/output example shown to the model before the live query
///
/// Keys map to any JSON-serializable value. Insertion order is preserved and
/// determines the line order in the rendered example block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Example {
    pub values: Map<String, Value>,
}

impl Example {
    /// Create an empty example
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key/value pair, preserving insertion order
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }
}

/// A declarative description of a few-shot prompt
#[derive(Debug, Clone, Deserialize)]
pub struct PromptTemplate {
    /// Task instruction, rendered first
    pub instruction: String,
    /// Worked examples, rendered in order after the instruction
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Names of the variables supplied at bind time
    pub input_keys: Vec<String>,
    /// Name of the variable the model is expected to produce
    pub output_key: String,
    /// Expected output format, defaults to JSON
    #[serde(default)]
    pub output_format: OutputFormat,
    /// Descriptive language label, never enforced
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "english".to_string()
}

impl PromptTemplate {
    /// Create a template with the given instruction and no keys or examples
    pub fn new(instruction: impl Into<String>) -> Self {
        Self {
            instruction: instruction.into(),
            examples: Vec::new(),
            input_keys: Vec::new(),
            output_key: String::new(),
            output_format: OutputFormat::default(),
            language: default_language(),
        }
    }

    /// Set the input variable names
    pub fn with_input_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the output variable name
    pub fn with_output_key(mut self, key: impl Into<String>) -> Self {
        self.output_key = key.into();
        self
    }

    /// Append a worked example
    pub fn with_example(mut self, example: Example) -> Self {
        self.examples.push(example);
        self
    }

    /// Set the output format
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    /// Set the language label
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Load a template definition from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, TemplateFileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a template definition from a TOML string
    ///
    /// Examples are `[[examples]]` tables; their key order in the file is
    /// the order they render in.
    pub fn from_toml(content: &str) -> Result<Self, TemplateFileError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let template = PromptTemplate::new("Do the thing.");
        assert_eq!(template.instruction, "Do the thing.");
        assert_eq!(template.output_format, OutputFormat::Json);
        assert_eq!(template.language, "english");
        assert!(template.examples.is_empty());
    }

    #[test]
    fn test_example_preserves_insertion_order() {
        let example = Example::new()
            .with("zulu", 1)
            .with("alpha", 2)
            .with("mike", 3);
        let keys: Vec<_> = example.values.keys().cloned().collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn test_from_toml() {
        let template = PromptTemplate::from_toml(
            r#"
            instruction = "Classify the ticket."
            input_keys = ["ticket"]
            output_key = "category"
            output_format = "text"

            [[examples]]
            ticket = "my invoice is wrong"
            category = "billing"
            "#,
        )
        .expect("Should parse");

        assert_eq!(template.instruction, "Classify the ticket.");
        assert_eq!(template.input_keys, vec!["ticket"]);
        assert_eq!(template.output_key, "category");
        assert_eq!(template.output_format, OutputFormat::Text);
        assert_eq!(template.language, "english");
        assert_eq!(template.examples.len(), 1);
        assert_eq!(
            template.examples[0].get("category"),
            Some(&Value::String("billing".to_string()))
        );
    }

    #[test]
    fn test_from_toml_defaults_to_json_format() {
        let template = PromptTemplate::from_toml(
            r#"
            instruction = "Extract the city."
            input_keys = ["text"]
            output_key = "city"
            "#,
        )
        .expect("Should parse");

        assert_eq!(template.output_format, OutputFormat::Json);
        assert!(template.examples.is_empty());
    }

    #[test]
    fn test_from_toml_example_key_order_is_file_order() {
        let template = PromptTemplate::from_toml(
            r#"
            instruction = "Answer."
            input_keys = ["b", "a"]
            output_key = "out"

            [[examples]]
            b = "second letter"
            a = "first letter"
            out = "done"
            "#,
        )
        .expect("Should parse");

        let keys: Vec<_> = template.examples[0].values.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a", "out"]);
    }

    #[test]
    fn test_from_toml_rejects_unknown_format() {
        let result = PromptTemplate::from_toml(
            r#"
            instruction = "Answer."
            input_keys = ["a"]
            output_key = "out"
            output_format = "yaml"
            "#,
        );
        assert!(matches!(result, Err(TemplateFileError::ParseError(_))));
    }
}
