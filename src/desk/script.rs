//! Line-oriented desk scripts.
//!
//! ```text
//! # comment
//! add 5 Sue | A-100 | cannot log in
//! serve
//! show
//! ```

use super::Customer;
use crate::error::ScriptError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { customer: Customer, priority: i64 },
    Serve,
    Show,
}

fn parse_add(line: usize, rest: &str) -> Result<Command, ScriptError> {
    let rest = rest.trim_start();
    let split = rest.find(char::is_whitespace).unwrap_or_else(|| rest.len());
    let (priority, fields) = rest.split_at(split);
    let priority = priority.parse::<i64>().map_err(|_| {
        ScriptError::new(line, format!("invalid priority '{}'", priority))
    })?;

    let fields: Vec<&str> = fields.split('|').map(str::trim).collect();
    if fields.len() != 3 {
        return Err(ScriptError::new(
            line,
            "expected 'name | account id | problem'",
        ));
    }
    if fields.iter().any(|field| field.is_empty()) {
        return Err(ScriptError::new(line, "empty customer field"));
    }
    let customer = Customer::new(fields[0], fields[1], fields[2]);
    Ok(Command::Add { customer, priority })
}

fn parse_line(
    line: usize,
    text: &str,
) -> Result<Option<Command>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let split = text.find(char::is_whitespace).unwrap_or_else(|| text.len());
    let (word, rest) = text.split_at(split);
    let command = match word {
        "add" => parse_add(line, rest)?,
        "serve" | "show" if !rest.trim().is_empty() => {
            return Err(ScriptError::new(
                line,
                format!("'{}' takes no arguments", word),
            ))
        }
        "serve" => Command::Serve,
        "show" => Command::Show,
        _ => {
            return Err(ScriptError::new(
                line,
                format!("unknown command '{}'", word),
            ))
        }
    };
    Ok(Some(command))
}

/// Parse a whole script, stopping at the first bad line.
pub fn parse(source: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = vec![];
    for (index, text) in source.lines().enumerate() {
        if let Some(command) = parse_line(index + 1, text)? {
            commands.push(command);
        }
    }
    Ok(commands)
}
