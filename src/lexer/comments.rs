use std::iter::Peekable;
use std::str::Chars;

use super::{is_eol, is_whitespace};

/// Where on a line the stripper currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    LineStart,
    Key,
    Header,
    AfterHeader,
    Value { depth: usize },
}

impl Context {
    fn after_eol(self) -> Context {
        match self {
            // multi-line arrays keep their value context
            Context::Value { depth } if depth > 0 => self,
            _ => Context::LineStart,
        }
    }
}

/// Remove `#` comments while keeping every end-of-line marker in place.
///
/// A `#` only opens a comment where a comment may appear: at the start of a
/// line, after a key group header, or in value position outside a string.
/// Inside quoted strings, key group headers (`[the.hard.bit#]`) and keys it
/// is ordinary text. Line and column positions of the remaining text are
/// unchanged, so parse errors point at the input as written.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut context = Context::LineStart;
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(&next) = chars.peek() {
                        if !is_eol(next) {
                            out.push(next);
                            chars.next();
                        }
                    }
                }
                '"' => in_string = false,
                c if is_eol(c) => {
                    // unterminated, the grammar reports it
                    in_string = false;
                    context = context.after_eol();
                }
                _ => {}
            }
            continue;
        }

        if is_eol(c) {
            out.push(c);
            context = context.after_eol();
            continue;
        }

        match context {
            Context::LineStart => match c {
                c if is_whitespace(c) => out.push(c),
                '#' => skip_comment(&mut chars),
                '[' => {
                    out.push(c);
                    context = Context::Header;
                }
                '=' => {
                    out.push(c);
                    context = Context::Value { depth: 0 };
                }
                _ => {
                    out.push(c);
                    context = Context::Key;
                }
            },
            Context::Key => {
                out.push(c);
                if c == '=' {
                    context = Context::Value { depth: 0 };
                }
            }
            Context::Header => {
                out.push(c);
                if c == ']' {
                    context = Context::AfterHeader;
                }
            }
            Context::AfterHeader => {
                if c == '#' {
                    skip_comment(&mut chars);
                } else {
                    out.push(c);
                }
            }
            Context::Value { depth } => match c {
                '#' => skip_comment(&mut chars),
                '"' => {
                    out.push(c);
                    in_string = true;
                }
                '[' => {
                    out.push(c);
                    context = Context::Value { depth: depth + 1 };
                }
                ']' => {
                    out.push(c);
                    context = Context::Value { depth: depth.saturating_sub(1) };
                }
                _ => out.push(c),
            },
        }
    }

    out
}

fn skip_comment(chars: &mut Peekable<Chars<'_>>) {
    while let Some(&c) = chars.peek() {
        if is_eol(c) {
            break;
        }
        chars.next();
    }
}
