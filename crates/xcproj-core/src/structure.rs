//! Structural checks for generated descriptors.
//!
//! This is not a parser: it tracks delimiter nesting line by line, notes
//! which identifiers are declared directly inside `objects`, and checks the
//! `rootObject` pointer.

use std::collections::BTreeMap;

use crate::descriptor::UTF8_MARKER;
use crate::error::StructureError;

/// Nesting depth of object declarations: root dictionary, then `objects`.
const OBJECTS_DEPTH: usize = 2;

/// Facts gathered from a well-formed descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureSummary {
    pub root_object: String,
    /// Number of object declarations, counting repeated identifiers.
    pub object_count: usize,
    /// Identifiers declared more than once inside `objects`, sorted.
    pub duplicate_ids: Vec<String>,
}

/// Check delimiter balance, the header line and the `rootObject` pointer.
///
/// Leading indentation is ignored, as are comments after the `rootObject`
/// identifier.
pub fn check_structure(text: &str) -> Result<StructureSummary, StructureError> {
    if text.lines().next() != Some(UTF8_MARKER) {
        return Err(StructureError::MissingHeader);
    }

    let mut scanner = Scanner::default();
    let mut declarations: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut object_count = 0;
    let mut current: Option<String> = None;
    let mut in_objects = false;
    let mut root_objects = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_no = index + 1;
        let depth = scanner.depth();
        let line = raw_line.trim_start();

        if scanner.in_code() {
            if depth == 1 {
                in_objects = line.starts_with("objects = {");
                if let Some(rest) = line.strip_prefix("rootObject = ") {
                    root_objects.push(root_object_id(rest).to_string());
                }
            } else if depth == OBJECTS_DEPTH
                && in_objects
                && let Some(id) = declared_id(line)
            {
                object_count += 1;
                let isas = declarations.entry(id.to_string()).or_default();
                if let Some(isa) = line
                    .find("{isa = ")
                    .and_then(|pos| isa_value(&line[pos + 1..]))
                {
                    isas.push(isa.to_string());
                }
                current = Some(id.to_string());
            } else if depth == OBJECTS_DEPTH + 1
                && let (Some(id), Some(isa)) = (&current, isa_value(line))
                && let Some(isas) = declarations.get_mut(id)
            {
                isas.push(isa.to_string());
            }
        }

        scanner.feed_line(line, line_no)?;
    }
    scanner.finish()?;

    let root_object = match root_objects.len() {
        0 => return Err(StructureError::MissingRootObject),
        1 => root_objects.remove(0),
        count => return Err(StructureError::MultipleRootObjects { count }),
    };
    let is_project = declarations
        .get(&root_object)
        .is_some_and(|isas| isas.iter().any(|isa| isa == "PBXProject"));
    if !is_project {
        return Err(StructureError::RootObjectNotProject { id: root_object });
    }

    let duplicate_ids = declarations
        .into_iter()
        .filter(|(_, isas)| isas.len() > 1)
        .map(|(id, _)| id)
        .collect();

    Ok(StructureSummary {
        root_object,
        object_count,
        duplicate_ids,
    })
}

/// Identifier of a `rootObject = <id>;` value, without trailing comments.
fn root_object_id(value: &str) -> &str {
    let value = value.split(';').next().unwrap_or_default();
    let value = value.split("/*").next().unwrap_or_default();
    value.trim()
}

/// Leading identifier of a `<id> ... = {` line.
fn declared_id(line: &str) -> Option<&str> {
    let end = line
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(line.len());
    let id = &line[..end];
    (!id.is_empty() && line[end..].contains(" = {")).then_some(id)
}

/// Value of an `isa = <value>;` fragment at the start of `text`.
fn isa_value(text: &str) -> Option<&str> {
    let rest = text.strip_prefix("isa = ")?;
    let end = rest.find(';')?;
    Some(rest[..end].trim())
}

fn closing_for(open: char) -> char {
    if open == '{' { '}' } else { ')' }
}

/// Delimiter tracker that skips quoted strings and comments.
#[derive(Debug, Default)]
struct Scanner {
    stack: Vec<char>,
    string_start: Option<usize>,
    comment_start: Option<usize>,
}

impl Scanner {
    fn depth(&self) -> usize {
        self.stack.len()
    }

    fn in_code(&self) -> bool {
        self.string_start.is_none() && self.comment_start.is_none()
    }

    fn feed_line(&mut self, line: &str, line_no: usize) -> Result<(), StructureError> {
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if self.comment_start.is_some() {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.comment_start = None;
                }
                continue;
            }
            if self.string_start.is_some() {
                match ch {
                    '\\' => {
                        chars.next();
                    }
                    '"' => self.string_start = None,
                    _ => {}
                }
                continue;
            }
            match ch {
                '"' => self.string_start = Some(line_no),
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.comment_start = Some(line_no);
                }
                '/' if chars.peek() == Some(&'/') => break,
                '{' | '(' => self.stack.push(ch),
                '}' | ')' => {
                    let expected = if ch == '}' { '{' } else { '(' };
                    match self.stack.pop() {
                        None => {
                            return Err(StructureError::UnexpectedClose {
                                line: line_no,
                                found: ch,
                            });
                        }
                        Some(open) if open != expected => {
                            return Err(StructureError::MismatchedClose {
                                line: line_no,
                                expected: closing_for(open),
                                found: ch,
                            });
                        }
                        Some(_) => {}
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn finish(&self) -> Result<(), StructureError> {
        if let Some(line) = self.string_start {
            return Err(StructureError::UnterminatedString { line });
        }
        if let Some(line) = self.comment_start {
            return Err(StructureError::UnterminatedComment { line });
        }
        if !self.stack.is_empty() {
            return Err(StructureError::Unclosed {
                count: self.stack.len(),
            });
        }
        Ok(())
    }
}
