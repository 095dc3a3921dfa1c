//! Value binding and placeholder substitution
//!
//! Binding validates the definition, checks that the supplied values cover
//! exactly the declared input keys, renders the template, substitutes every
//! placeholder in a single tokenizing pass, and reverses the brace escaping
//! applied during example serialization.
//!
//! Substitution is deliberately simultaneous rather than key-by-key: the
//! rendered text is scanned once with a lexer, each recognized `{name}`
//! token is replaced from the final value mapping, and substituted values
//! are never re-scanned. A bound value that happens to contain another
//! key's placeholder (say `x = "{y}"`) therefore survives verbatim, and
//! placeholder-shaped text inside `{{`-escaped regions is left alone.

use std::collections::{HashMap, HashSet};
use std::fmt;

use logos::Logos;

use crate::error::PromptError;
use crate::message::Message;
use crate::render::render;
use crate::template::PromptTemplate;
use crate::validate::validate;
use crate::value::unescape_braces;

/// Lexical chunks of rendered template text
///
/// Escape pairs lex before single braces and placeholders, so `{{` opening
/// a serialized JSON object can never start a placeholder match.
#[derive(Logos, Debug, Clone, PartialEq)]
enum Chunk {
    #[token("{{")]
    EscapedOpen,

    #[token("}}")]
    EscapedClose,

    #[regex(r"\{[^{}]+\}")]
    Placeholder,

    #[regex(r"[^{}]+")]
    Text,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,
}

/// Replace every recognized `{name}` placeholder in one pass
///
/// Unrecognized placeholders and stray braces pass through verbatim; escape
/// pairs are kept for the later unescape pass.
fn substitute(template_text: &str, values: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(template_text.len());
    let mut lexer = Chunk::lexer(template_text);

    while let Some(chunk) = lexer.next() {
        let slice = lexer.slice();
        match chunk {
            Ok(Chunk::Placeholder) => {
                let name = &slice[1..slice.len() - 1];
                match values.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(slice),
                }
            }
            _ => out.push_str(slice),
        }
    }

    out
}

/// Final prompt text with all placeholders substituted and escaping undone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundPrompt {
    text: String,
}

impl BoundPrompt {
    /// The final prompt text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the prompt, returning the final text
    pub fn into_text(self) -> String {
        self.text
    }

    /// Wrap the prompt as a single human conversational turn
    pub fn to_messages(&self) -> Vec<Message> {
        vec![Message::human(&self.text)]
    }
}

impl fmt::Display for BoundPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Bind concrete input values into a template definition
///
/// Validates the definition first; any validation failure propagates
/// unchanged. The key set of `values` must equal the declared input keys
/// exactly, with both missing and extra keys reported in a single
/// [`PromptError::KeySetMismatch`].
pub fn bind(
    template: &PromptTemplate,
    values: &HashMap<String, String>,
) -> Result<BoundPrompt, PromptError> {
    validate(template)?;

    let expected: HashSet<&str> = template.input_keys.iter().map(String::as_str).collect();
    let provided: HashSet<&str> = values.keys().map(String::as_str).collect();
    if expected != provided {
        let mut provided: Vec<String> = values.keys().cloned().collect();
        provided.sort();
        return Err(PromptError::KeySetMismatch {
            expected: template.input_keys.clone(),
            provided,
        });
    }

    let substituted = substitute(&render(template), values);
    Ok(BoundPrompt {
        text: unescape_braces(&substituted),
    })
}
