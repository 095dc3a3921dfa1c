//! Prompt Loom CLI
//!
//! Usage:
//!   prompt-loom [OPTIONS] [FILE]
//!
//! Options:
//!   -b, --bind <KEY=VALUE>  Bind a value to an input key (repeatable)
//!   -e, --example <N>       Print one example block by zero-based index
//!       --messages          Print the bound prompt as a JSON message list
//!       --demo              Run the built-in date-extraction demonstration
//!   -h, --help              Print help

use std::collections::HashMap;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;

use prompt_loom::{
    bind, example_text, render, validate, Example, OutputFormat, PromptTemplate,
};

#[derive(Parser)]
#[command(name = "prompt-loom")]
#[command(about = "Few-shot prompt template engine")]
struct Cli {
    /// Template definition file in TOML (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Bind a value to an input key, formatted KEY=VALUE (repeatable)
    #[arg(short, long = "bind", value_name = "KEY=VALUE")]
    bind: Vec<String>,

    /// Print one example block by zero-based index
    #[arg(short, long)]
    example: Option<usize>,

    /// Print the bound prompt as a JSON message list
    #[arg(long)]
    messages: bool,

    /// Run the built-in date-extraction demonstration
    #[arg(long)]
    demo: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.demo {
        run_demo();
        return;
    }

    // If no input file and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let template = match load_template(&cli.input) {
        Ok(template) => template,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    if let Some(index) = cli.example {
        match example_text(&template, index) {
            Ok(block) => println!("{}", block.trim_start_matches('\n')),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if cli.bind.is_empty() {
        // No values supplied: validate and print the unbound template text.
        if let Err(e) = validate(&template) {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        print!("{}", render(&template));
        return;
    }

    let values = match parse_bindings(&cli.bind) {
        Ok(values) => values,
        Err(message) => {
            eprintln!("{}", message);
            std::process::exit(1);
        }
    };

    let prompt = match bind(&template, &values) {
        Ok(prompt) => prompt,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.messages {
        match serde_json::to_string_pretty(&prompt.to_messages()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing messages: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", prompt.text());
    }
}

/// Load a template definition from a file or stdin
fn load_template(input: &Option<PathBuf>) -> Result<PromptTemplate, String> {
    let content = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| format!("Error reading file '{}': {}", path.display(), e))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Error reading from stdin: {}", e))?;
            buffer
        }
    };
    PromptTemplate::from_toml(&content).map_err(|e| format!("Error: {}", e))
}

/// Parse repeated KEY=VALUE arguments into a value mapping
fn parse_bindings(pairs: &[String]) -> Result<HashMap<String, String>, String> {
    let mut values = HashMap::new();
    for pair in pairs {
        match pair.split_once('=') {
            Some((key, value)) => {
                values.insert(key.to_string(), value.to_string());
            }
            None => {
                return Err(format!(
                    "Invalid binding '{}': expected KEY=VALUE",
                    pair
                ));
            }
        }
    }
    Ok(values)
}

/// The date-extraction prompt carried over as a demonstration
fn demo_template() -> PromptTemplate {
    PromptTemplate::new(
        "Given user's query and current datetime, complete the following task \
         and output answer {format} date format.\n\
         Generate a date query in the format \"{format}\" from a user request.\n",
    )
    .with_input_keys(["current datetime", "query"])
    .with_output_key("output")
    .with_output_format(OutputFormat::Text)
    .with_example(
        Example::new()
            .with("current datetime", "20240209 12:00")
            .with("query", "today at 9")
            .with("output", "20240209 21:00"),
    )
    .with_example(
        Example::new()
            .with("current datetime", "20240209 12:00")
            .with("query", "tomorrow at 12")
            .with("output", "20240210 12:00"),
    )
    .with_example(
        Example::new()
            .with("current datetime", "20240209 12:00")
            .with("query", "12 of february at 12")
            .with("output", "20240212 12:00"),
    )
    .with_example(
        Example::new()
            .with("current datetime", "20240209 12:00")
            .with("query", "2024-02-14T12:00:00+06:00")
            .with("output", "20240214 12:00"),
    )
}

fn run_demo() {
    let values = HashMap::from([
        ("current datetime".to_string(), "20240209 12:00".to_string()),
        ("query".to_string(), "next friday at noon".to_string()),
    ]);
    match bind(&demo_template(), &values) {
        Ok(prompt) => print!("{}", prompt.text()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_intro() {
    println!(
        r#"Prompt Loom - Few-shot prompt template engine

USAGE:
    prompt-loom [OPTIONS] [FILE]
    cat template.toml | prompt-loom -b key=value

OPTIONS:
    -b, --bind KEY=VALUE   Bind a value to an input key (repeatable)
    -e, --example N        Print one example block by zero-based index
    --messages             Print the bound prompt as a JSON message list
    --demo                 Run the built-in date-extraction demonstration
    -h, --help             Print help

TEMPLATE FILE (TOML):
    instruction = "Extract the city the question is about."
    input_keys = ["question"]
    output_key = "city"
    output_format = "json"   # or "text"

    [[examples]]
    question = "is it raining in Paris?"
    city = '{{"city": "Paris"}}'

QUICK START:
    prompt-loom --demo

With no --bind arguments the validated template text is printed with its
{{key}} placeholders unresolved."#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bindings() {
        let values =
            parse_bindings(&["query=today at 9".to_string(), "city=Paris".to_string()])
                .expect("Should parse");
        assert_eq!(values.get("query").map(String::as_str), Some("today at 9"));
        assert_eq!(values.get("city").map(String::as_str), Some("Paris"));
    }

    #[test]
    fn test_parse_bindings_keeps_later_equals_signs() {
        let values = parse_bindings(&["expr=a=b".to_string()]).expect("Should parse");
        assert_eq!(values.get("expr").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_parse_bindings_rejects_missing_equals() {
        assert!(parse_bindings(&["queryonly".to_string()]).is_err());
    }

    #[test]
    fn test_demo_template_is_valid() {
        assert!(validate(&demo_template()).is_ok());
    }
}
