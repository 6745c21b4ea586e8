//! Multibyte regular-expression replace: `mb_ereg_replace`.
//!
//! Pattern matching is delegated to the `regex` crate. This module owns only
//! the option string, the replacement back-reference syntax and the
//! function's own warnings.

use regex::RegexBuilder;

use core_types::{RuntimeResult, Value};

use crate::coercion::{ParamClass, Signature};
use crate::registry::CallFrame;

/// Options accepted in the `$options` string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ReplaceOptions {
    ignore_case: bool,
    extended: bool,
    dot_matches_newline: bool,
}

/// Regex builtins
pub struct MbRegex;

impl MbRegex {
    /// `mb_ereg_replace(string $pattern, string $replacement, string $string, string $options = "")`
    pub fn replace_signature() -> Signature {
        Signature::new("mb_ereg_replace", vec![ParamClass::String; 4], 3)
    }

    /// Replace every match of the pattern in the subject.
    ///
    /// Returns `false` with a warning for an empty pattern, a pattern that
    /// fails to compile, or the unsupported `e` option.
    pub fn replace(frame: &mut CallFrame) -> RuntimeResult<Value> {
        let pattern = frame.str_arg(0).unwrap_or_default().to_string();
        let replacement = frame.str_arg(1).unwrap_or_default().to_string();
        let subject = frame.str_arg(2).unwrap_or_default().to_string();
        let options = frame.str_arg(3).unwrap_or_default().to_string();

        if pattern.is_empty() {
            frame.warn("Empty pattern");
            return Ok(Value::Bool(false));
        }

        let options = match parse_options(&options) {
            Ok(options) => options,
            Err(message) => {
                frame.warn(message);
                return Ok(Value::Bool(false));
            }
        };

        let regex = match RegexBuilder::new(&pattern)
            .case_insensitive(options.ignore_case)
            .ignore_whitespace(options.extended)
            .dot_matches_new_line(options.dot_matches_newline)
            .build()
        {
            Ok(regex) => regex,
            Err(err) => {
                frame.warn(format!("mbregex compile err: {}", compile_error_summary(&err)));
                return Ok(Value::Bool(false));
            }
        };

        let expansion = translate_replacement(&replacement);
        let replaced = regex.replace_all(&subject, expansion.as_str());
        tracing::trace!(%pattern, matched = regex.is_match(&subject), "mb_ereg_replace");
        Ok(Value::String(replaced.into_owned()))
    }
}

fn parse_options(options: &str) -> Result<ReplaceOptions, String> {
    let mut parsed = ReplaceOptions::default();
    for ch in options.chars() {
        match ch {
            'i' => parsed.ignore_case = true,
            'x' => parsed.extended = true,
            'm' | 'p' => parsed.dot_matches_newline = true,
            'e' => return Err("Option 'e' is not supported".to_string()),
            // syntax and search-mode letters the regex crate has no equivalent for
            _ => {}
        }
    }
    Ok(parsed)
}

/// One-line summary of a compile error; the crate's message spans several lines.
fn compile_error_summary(err: &regex::Error) -> String {
    let text = err.to_string();
    text.lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.strip_prefix("error: ").unwrap_or(line).to_string())
        .unwrap_or(text)
}

/// Rewrite `\N` and `\k<name>` back-references into the regex crate's
/// `${N}` / `${name}` form, escaping literal `$`.
fn translate_replacement(replacement: &str) -> String {
    let mut out = String::with_capacity(replacement.len());
    let mut chars = replacement.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '$' => out.push_str("$$"),
            '\\' => match chars.peek().copied() {
                Some(d) if d.is_ascii_digit() => {
                    chars.next();
                    out.push_str("${");
                    out.push(d);
                    out.push('}');
                }
                Some('k') => {
                    chars.next();
                    if chars.peek() == Some(&'<') {
                        chars.next();
                        let rest: String = chars.clone().collect();
                        match rest.split_once('>') {
                            Some((name, _)) => {
                                out.push_str("${");
                                out.push_str(name);
                                out.push('}');
                                chars.nth(name.chars().count());
                            }
                            // unterminated: the text is kept literally
                            None => out.push_str("\\k<"),
                        }
                    } else {
                        out.push_str("\\k");
                    }
                }
                Some('\\') => {
                    chars.next();
                    out.push('\\');
                }
                _ => out.push('\\'),
            },
            other => out.push(other),
        }
    }
    out
}
