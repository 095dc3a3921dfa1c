//! Prompt Loom - a few-shot prompt template engine
//!
//! This library renders a declarative template definition (instruction,
//! worked examples, input variables, output variable) into deterministic
//! prompt text with `{key}` placeholders, then binds concrete values into
//! that text to produce a final prompt for a language model.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use prompt_loom::{bind, Example, PromptTemplate};
//!
//! let template = PromptTemplate::new("Extract the city the question is about.")
//!     .with_input_keys(["question"])
//!     .with_output_key("city")
//!     .with_example(
//!         Example::new()
//!             .with("question", "is it raining in Paris?")
//!             .with("city", r#"{"city": "Paris"}"#),
//!     );
//!
//! let values = HashMap::from([("question".to_string(), "what about Oslo?".to_string())]);
//! let prompt = bind(&template, &values).unwrap();
//!
//! assert!(prompt.text().contains("question: what about Oslo?"));
//! assert!(prompt.text().ends_with("city: \n"));
//! ```

pub mod bind;
pub mod error;
pub mod message;
pub mod render;
pub mod template;
pub mod validate;
pub mod value;

pub use bind::{bind, BoundPrompt};
pub use error::PromptError;
pub use message::{Message, Role};
pub use render::{example_text, render};
pub use template::{Example, OutputFormat, PromptTemplate, TemplateFileError};
pub use validate::validate;
pub use value::{check_json, escape_braces, serialize_value, unescape_braces};
