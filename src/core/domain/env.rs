//! Env file type.
//!
//! A dotenv-style file held as lines so that an upsert rewrites exactly one
//! assignment and leaves comments, blank lines and other keys untouched.

use std::fmt;

/// One line of an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    /// `KEY=value`, optionally prefixed by `export`. `raw` is written back verbatim.
    Assignment { key: String, raw: String, eol: Eol },
    /// Comments, blank lines, anything unparsable.
    Other { raw: String, eol: Eol },
}

impl Line {
    fn eol(&self) -> Eol {
        match self {
            Line::Assignment { eol, .. } | Line::Other { eol, .. } => *eol,
        }
    }

    fn eol_mut(&mut self) -> &mut Eol {
        match self {
            Line::Assignment { eol, .. } | Line::Other { eol, .. } => eol,
        }
    }
}

/// Terminator a line was read with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eol {
    Lf,
    CrLf,
    /// Last line of a file without a final newline.
    Missing,
}

impl Eol {
    fn as_str(self) -> &'static str {
        match self {
            Eol::Lf => "\n",
            Eol::CrLf => "\r\n",
            Eol::Missing => "",
        }
    }
}

/// A parsed env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    lines: Vec<Line>,
}

impl EnvFile {
    /// Parse env file contents. Never fails; unrecognized lines are kept as-is,
    /// and each line keeps its own `\n` or `\r\n` terminator.
    pub fn parse(contents: &str) -> Self {
        let lines = contents
            .split_inclusive('\n')
            .map(|segment| {
                let (body, eol) = if let Some(body) = segment.strip_suffix("\r\n") {
                    (body, Eol::CrLf)
                } else if let Some(body) = segment.strip_suffix('\n') {
                    (body, Eol::Lf)
                } else {
                    (segment, Eol::Missing)
                };
                match assignment_key(body) {
                    Some(key) => Line::Assignment {
                        key: key.to_string(),
                        raw: body.to_string(),
                        eol,
                    },
                    None => Line::Other {
                        raw: body.to_string(),
                        eol,
                    },
                }
            })
            .collect();

        Self { lines }
    }

    /// Terminator for appended lines: whatever the first line uses.
    fn line_ending(&self) -> Eol {
        match self.lines.first().map(Line::eol) {
            Some(Eol::CrLf) => Eol::CrLf,
            _ => Eol::Lf,
        }
    }

    /// Value of the first assignment for `key`, unquoted.
    pub fn get(&self, key: &str) -> Option<String> {
        self.lines.iter().find_map(|line| match line {
            Line::Assignment { key: k, raw, .. } if k == key => {
                raw.split_once('=').map(|(_, value)| parse_env_value(value.trim()))
            }
            _ => None,
        })
    }

    /// Set `key` to `value`.
    ///
    /// Replaces the first assignment for `key` in place and drops any later
    /// duplicates, or appends a new line if the key is absent. Afterwards the
    /// file holds exactly one assignment for `key`.
    pub fn upsert(&mut self, key: &str, value: &str) {
        let rendered = render_assignment(key, value);
        let mut replaced = false;

        self.lines.retain_mut(|line| match line {
            Line::Assignment { key: k, raw, .. } if k == key => {
                if replaced {
                    return false;
                }
                *raw = rendered.clone();
                replaced = true;
                true
            }
            _ => true,
        });

        if !replaced {
            let eol = self.line_ending();
            if let Some(last) = self.lines.last_mut() {
                if last.eol() == Eol::Missing {
                    *last.eol_mut() = eol;
                }
            }
            self.lines.push(Line::Assignment {
                key: key.to_string(),
                raw: rendered,
                eol,
            });
        }
    }

    /// Number of assignment lines for `key`.
    pub fn count(&self, key: &str) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, Line::Assignment { key: k, .. } if k == key))
            .count()
    }

    /// Assigned key names in file order.
    pub fn keys(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                Line::Assignment { key, .. } => Some(key.as_str()),
                Line::Other { .. } => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for EnvFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            match line {
                Line::Assignment { raw, eol, .. } | Line::Other { raw, eol } => {
                    write!(f, "{}{}", raw, eol.as_str())?
                }
            }
        }
        Ok(())
    }
}

/// Key of an assignment line, or `None` for comments and junk.
fn assignment_key(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return None;
    }
    let body = trimmed.strip_prefix("export ").unwrap_or(trimmed);
    let (key, _) = body.split_once('=')?;
    let key = key.trim();
    let valid = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !key.starts_with(|c: char| c.is_ascii_digit());
    valid.then_some(key)
}

/// Render `KEY='value'`, falling back to double quotes when the value
/// itself contains a single quote or a line break.
fn render_assignment(key: &str, value: &str) -> String {
    if value.contains('\'') || value.contains('\n') || value.contains('\r') {
        format!("{}=\"{}\"", key, escape_env_value(value))
    } else {
        format!("{}='{}'", key, value)
    }
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn escape_env_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
