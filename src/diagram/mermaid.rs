//! Structural Mermaid checks.
//!
//! This is not a full Mermaid grammar. It rejects what breaks rendering most
//! often in hand-written course content: an unknown diagram type, a bad
//! flowchart direction, unbalanced brackets or quotes, and unclosed or stray
//! `subgraph`/`loop`/`alt`/... blocks. Errors are shaped like the parser's
//! own: a `Parse error on line N:` headline followed by the offending line,
//! a caret and what was expected.

use super::{DiagramChecker, DiagramError};

const OTHER_DIAGRAMS: &[&str] = &[
    "journey",
    "gantt",
    "pie",
    "quadrantChart",
    "requirementDiagram",
    "gitGraph",
    "C4Context",
    "C4Container",
    "C4Component",
    "C4Dynamic",
    "C4Deployment",
    "mindmap",
    "timeline",
    "zenuml",
    "sankey-beta",
    "xychart-beta",
    "block-beta",
    "packet-beta",
    "architecture-beta",
    "kanban",
    "radar-beta",
    "info",
];

const FLOWCHART_DIRECTIONS: &[&str] = &["TB", "TD", "BT", "RL", "LR"];
const SUBGRAPH_BLOCKS: &[&str] = &["subgraph"];
const SEQUENCE_BLOCKS: &[&str] = &["loop", "alt", "opt", "par", "critical", "break", "rect", "box"];
const SEQUENCE_BRANCHES: &[&str] = &["else", "and", "option"];

#[derive(Debug, Clone, Copy, Default)]
pub struct MermaidChecker;

impl MermaidChecker {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Flowchart,
    Sequence,
    /// Class and state diagrams: brace blocks, free text after `:`
    Structured,
    /// ER diagrams: braces double as cardinality markers
    Entity,
    Other,
}

impl Family {
    fn detect(keyword: &str) -> Option<Self> {
        match keyword {
            "graph" | "flowchart" | "flowchart-elk" => Some(Self::Flowchart),
            "sequenceDiagram" => Some(Self::Sequence),
            "classDiagram" | "classDiagram-v2" | "stateDiagram" | "stateDiagram-v2" => {
                Some(Self::Structured)
            }
            "erDiagram" => Some(Self::Entity),
            other if OTHER_DIAGRAMS.contains(&other) => Some(Self::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl Line<'_> {
    fn indent(&self) -> usize {
        self.text.chars().take_while(|c| c.is_whitespace()).count()
    }
}

impl DiagramChecker for MermaidChecker {
    fn check(&self, source: &str) -> Result<(), DiagramError> {
        let lines = statements(source);
        let Some((header, body)) = lines.split_first() else {
            return Err(unknown_diagram(source));
        };
        let keyword = first_token(header.text);
        let family = Family::detect(keyword).ok_or_else(|| unknown_diagram(source))?;

        match family {
            Family::Flowchart => {
                check_direction(header, keyword)?;
                check_brackets(&lines, family)?;
                check_blocks(body, SUBGRAPH_BLOCKS, &[])
            }
            Family::Sequence => check_blocks(body, SEQUENCE_BLOCKS, SEQUENCE_BRANCHES),
            Family::Structured => check_brackets(&lines, family),
            Family::Entity => check_entity_blocks(body),
            Family::Other => Ok(()),
        }
    }
}

/// Non-blank, non-comment lines with their 1-based numbers. A leading
/// `---` front-matter block is skipped.
fn statements(source: &str) -> Vec<Line<'_>> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(idx, text)| Line {
            number: idx + 1,
            text,
        })
        .filter(|line| !line.text.trim().is_empty())
        .peekable();

    if lines.peek().is_some_and(|line| line.text.trim() == "---") {
        lines.next();
        for line in lines.by_ref() {
            if line.text.trim() == "---" {
                break;
            }
        }
    }

    lines
        .filter(|line| !line.text.trim_start().starts_with("%%"))
        .collect()
}

fn first_token(text: &str) -> &str {
    text.trim()
        .split(|c: char| c.is_whitespace() || c == '{' || c == ';')
        .next()
        .unwrap_or_default()
}

fn unknown_diagram(source: &str) -> DiagramError {
    DiagramError::new(format!(
        "No diagram type detected matching given configuration for text: {}",
        source.trim()
    ))
}

fn parse_error(line: &Line<'_>, column: usize, expected: &str, got: &str) -> DiagramError {
    DiagramError::new(format!(
        "Parse error on line {}:\n{}\n{}^\nExpecting {expected}, got '{got}'",
        line.number,
        line.text.trim_end(),
        "-".repeat(column)
    ))
}

fn check_direction(header: &Line<'_>, keyword: &str) -> Result<(), DiagramError> {
    let rest = header.text.trim_start()[keyword.len()..].trim_start();
    let Some(direction) = rest.split_whitespace().next() else {
        return Ok(());
    };
    let direction = direction.trim_end_matches(';');
    if direction.is_empty() || FLOWCHART_DIRECTIONS.contains(&direction) {
        return Ok(());
    }
    let column = header.text.len() - rest.len();
    Err(parse_error(header, column, "'DIR'", direction))
}

const fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '{' => '}',
        // `id>text]` is the flowchart asymmetric shape
        _ => ']',
    }
}

fn check_brackets(lines: &[Line<'_>], family: Family) -> Result<(), DiagramError> {
    let mut stack: Vec<(char, Line<'_>, usize)> = Vec::new();

    for line in lines {
        let base_depth = stack.len();
        let mut quote: Option<(char, usize)> = None;
        let mut previous: Option<char> = None;

        for (column, ch) in line.text.chars().enumerate() {
            if let Some((delimiter, _)) = quote {
                if ch == delimiter {
                    quote = None;
                }
                previous = Some(ch);
                continue;
            }

            match ch {
                '"' => quote = Some(('"', column)),
                '|' if family == Family::Flowchart => quote = Some(('|', column)),
                '(' | '[' | '{' => stack.push((ch, *line, column)),
                '>' if family == Family::Flowchart
                    && stack.len() == base_depth
                    && previous.is_some_and(|p| p.is_alphanumeric() || p == '_') =>
                {
                    stack.push(('>', *line, column));
                }
                ')' | ']' | '}' => match stack.pop() {
                    Some((open, ..)) if closing(open) == ch => {}
                    Some((open, ..)) => {
                        let expected = format!("'{}'", closing(open));
                        return Err(parse_error(line, column, &expected, &ch.to_string()));
                    }
                    None => {
                        return Err(parse_error(line, column, "a statement", &ch.to_string()));
                    }
                },
                ':' if family == Family::Structured && stack.len() == base_depth => break,
                _ => {}
            }
            previous = Some(ch);
        }

        if let Some((delimiter, column)) = quote {
            return Err(parse_error(line, column, &format!("'{delimiter}'"), "EOL"));
        }
    }

    match stack.pop() {
        Some((open, line, column)) => {
            let expected = format!("'{}'", closing(open));
            Err(parse_error(&line, column, &expected, "EOF"))
        }
        None => Ok(()),
    }
}

fn check_blocks(
    body: &[Line<'_>],
    openers: &[&str],
    branches: &[&str],
) -> Result<(), DiagramError> {
    let mut depth = 0usize;

    for line in body {
        let token = first_token(line.text);
        if openers.contains(&token) {
            depth += 1;
        } else if token == "end" {
            if depth == 0 {
                return Err(parse_error(line, line.indent(), "a statement", "end"));
            }
            depth -= 1;
        } else if depth == 0 && branches.contains(&token) {
            return Err(parse_error(line, line.indent(), "a statement", token));
        }
    }

    match body.last() {
        Some(last) if depth > 0 => Err(parse_error(
            last,
            last.text.trim_end().chars().count(),
            "'end'",
            "EOF",
        )),
        _ => Ok(()),
    }
}

fn check_entity_blocks(body: &[Line<'_>]) -> Result<(), DiagramError> {
    let mut open: Option<Line<'_>> = None;

    for line in body {
        let trimmed = line.text.trim();
        if trimmed == "}" {
            if open.take().is_none() {
                return Err(parse_error(line, line.indent(), "a statement", "}"));
            }
        } else if trimmed.ends_with('{') && !trimmed.contains(':') {
            if open.is_some() {
                let column = line.text.trim_end().chars().count() - 1;
                return Err(parse_error(line, column, "'}'", "{"));
            }
            open = Some(*line);
        }
    }

    match open {
        Some(line) => {
            let column = line.text.trim_end().chars().count() - 1;
            Err(parse_error(&line, column, "'}'", "EOF"))
        }
        None => Ok(()),
    }
}
