//! Structural validation of template definitions

use crate::error::PromptError;
use crate::template::{OutputFormat, PromptTemplate};
use crate::value::check_json;

/// Validate a template definition before rendering
///
/// Checks, in order: the instruction is non-empty, at least one input key is
/// declared, the output key is non-empty, and every example contains every
/// input key plus the output key. In JSON output mode each example's textual
/// output value must also parse as JSON. Fails fast on the first violation;
/// example indices in error messages are 1-based.
pub fn validate(template: &PromptTemplate) -> Result<(), PromptError> {
    if template.instruction.is_empty() {
        return Err(PromptError::EmptyInstruction);
    }

    if template.input_keys.is_empty() {
        return Err(PromptError::EmptyInputKeys);
    }

    if template.output_key.is_empty() {
        return Err(PromptError::EmptyOutputKey);
    }

    for (position, example) in template.examples.iter().enumerate() {
        let number = position + 1;

        for key in &template.input_keys {
            if !example.values.contains_key(key) {
                return Err(PromptError::ExampleMissingKey {
                    example: number,
                    key: key.clone(),
                });
            }
        }

        match example.get(&template.output_key) {
            None => {
                return Err(PromptError::ExampleMissingKey {
                    example: number,
                    key: template.output_key.clone(),
                });
            }
            Some(output) if template.output_format == OutputFormat::Json => {
                check_json(output).map_err(|err| PromptError::InvalidJsonExample {
                    example: number,
                    key: template.output_key.clone(),
                    message: err.to_string(),
                })?;
            }
            Some(_) => {}
        }
    }

    Ok(())
}
