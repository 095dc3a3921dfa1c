//! Error types for template validation and binding

use thiserror::Error;

/// Errors raised while validating a template definition, binding input
/// values, or accessing examples.
///
/// All variants are usage errors: they are raised fail-fast at the point of
/// detection and none of them is transient or retryable.
#[derive(Error, Debug)]
pub enum PromptError {
    /// The template instruction is empty
    #[error("instruction cannot be empty")]
    EmptyInstruction,

    /// The template declares no input keys
    #[error("input keys cannot be empty")]
    EmptyInputKeys,

    /// The template output key is empty
    #[error("output key cannot be empty")]
    EmptyOutputKey,

    /// An example omits a required input or output key (1-based index)
    #[error("example {example} does not have the variable {key} in the definition")]
    ExampleMissingKey { example: usize, key: String },

    /// An example's textual output value is not valid JSON (1-based index)
    #[error("{key} in example {example} is not in valid json format: {message}")]
    InvalidJsonExample {
        example: usize,
        key: String,
        message: String,
    },

    /// Bind-time values do not exactly match the declared input keys
    #[error(
        "input keys [{}] do not match the provided keys [{}]",
        .expected.join(", "),
        .provided.join(", ")
    )]
    KeySetMismatch {
        expected: Vec<String>,
        provided: Vec<String>,
    },

    /// Example accessor called with an index outside the example list
    #[error("example index {index} is out of range ({count} examples)")]
    ExampleIndexOutOfRange { index: usize, count: usize },
}
