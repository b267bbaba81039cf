// file: src/format/template.rs
// description: compiled log line templates with named placeholders
// reference: https://docs.rs/regex

use crate::error::{LogError, Result};
use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_TEMPLATE: &str = "[{asctime}] {process} {levelname} {session_id}: {message}";

lazy_static! {
    // `{name}` or `%(name)s`
    static ref PLACEHOLDER: Regex = Regex::new(
        r"\{(\w+)\}|%\((\w+)\)s"
    ).expect("PLACEHOLDER regex is valid");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Asctime,
    Process,
    Levelname,
    SessionId,
    Message,
    Name,
}

impl Placeholder {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asctime" => Some(Placeholder::Asctime),
            "process" => Some(Placeholder::Process),
            "levelname" => Some(Placeholder::Levelname),
            "session_id" => Some(Placeholder::SessionId),
            "message" => Some(Placeholder::Message),
            "name" => Some(Placeholder::Name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Placeholder),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LineFields<'a> {
    pub asctime: &'a str,
    pub process: &'a str,
    pub levelname: &'a str,
    pub session_id: &'a str,
    pub message: &'a str,
    pub name: &'a str,
}

impl LineFields<'_> {
    fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Asctime => self.asctime,
            Placeholder::Process => self.process,
            Placeholder::Levelname => self.levelname,
            Placeholder::SessionId => self.session_id,
            Placeholder::Message => self.message,
            Placeholder::Name => self.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl LineTemplate {
    pub fn new() -> Self {
        let (segments, _) = compile(DEFAULT_TEMPLATE);
        Self {
            source: DEFAULT_TEMPLATE.to_string(),
            segments,
        }
    }

    pub fn parse(source: &str) -> Result<Self> {
        let (segments, unknown) = compile(source);

        if !unknown.is_empty() {
            return Err(LogError::Template(format!(
                "unknown placeholder(s) {} in template '{}'",
                unknown.join(", "),
                source
            )));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn placeholders(&self) -> impl Iterator<Item = Placeholder> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(placeholder) => Some(*placeholder),
            Segment::Literal(_) => None,
        })
    }

    pub fn render(&self, fields: &LineFields<'_>) -> String {
        let mut line = String::with_capacity(self.source.len() + fields.message.len() + 64);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Field(placeholder) => line.push_str(fields.get(*placeholder)),
            }
        }

        line
    }
}

impl Default for LineTemplate {
    fn default() -> Self {
        Self::new()
    }
}

fn compile(source: &str) -> (Vec<Segment>, Vec<String>) {
    let mut segments = Vec::new();
    let mut unknown = Vec::new();
    let mut last = 0;

    for captures in PLACEHOLDER.captures_iter(source) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let Some(name) = captures.get(1).or_else(|| captures.get(2)) else {
            continue;
        };

        if whole.start() > last {
            segments.push(Segment::Literal(source[last..whole.start()].to_string()));
        }

        match Placeholder::from_name(name.as_str()) {
            Some(placeholder) => segments.push(Segment::Field(placeholder)),
            None => unknown.push(name.as_str().to_string()),
        }

        last = whole.end();
    }

    if last < source.len() {
        segments.push(Segment::Literal(source[last..].to_string()));
    }

    (segments, unknown)
}
