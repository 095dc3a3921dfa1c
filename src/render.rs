//! Template rendering
//!
//! Rendering is a pure function of the template definition: it produces the
//! template text with unresolved `{key}` placeholders, before any input
//! values are bound. The layout is the classic few-shot shape: instruction,
//! worked examples with their answers shown, placeholder lines for the live
//! input keys, and an empty slot for the expected answer.

use crate::error::PromptError;
use crate::template::{Example, OutputFormat, PromptTemplate};
use crate::value::serialize_value;

/// Render a template definition into placeholder-bearing template text
///
/// The wire format is exact and newline-separated:
///
/// ```text
/// <instruction>\n
/// \n<key>: <value>   (per example pair, in insertion order)
/// \n                 (after each example)
/// \n<key>: {<key>}   (per input key)
/// \n<output_key>: \n
/// ```
///
/// Rendering does not validate; callers that need validation run
/// [`crate::validate`] first, as [`crate::bind`] does.
pub fn render(template: &PromptTemplate) -> String {
    let mut out = String::new();
    out.push_str(&template.instruction);
    out.push('\n');

    for example in &template.examples {
        out.push_str(&format_example(example, template.output_format));
        out.push('\n');
    }

    for key in &template.input_keys {
        out.push_str(&format!("\n{}: {{{}}}", key, key));
    }

    out.push_str(&format!("\n{}: \n", template.output_key));
    out
}

/// Format a single example block: one `\nkey: value` line per pair
pub(crate) fn format_example(example: &Example, format: OutputFormat) -> String {
    let mut out = String::new();
    for (key, value) in &example.values {
        out.push_str(&format!("\n{}: {}", key, serialize_value(value, format)));
    }
    out
}

/// Format one example block by index, without instruction or placeholders
///
/// Produces exactly the block [`render`] emits for that example. Useful for
/// introspection independent of the render/bind pipeline.
pub fn example_text(template: &PromptTemplate, index: usize) -> Result<String, PromptError> {
    let count = template.examples.len();
    if index >= count {
        return Err(PromptError::ExampleIndexOutOfRange { index, count });
    }
    Ok(format_example(
        &template.examples[index],
        template.output_format,
    ))
}
