//! Streaming JSON5 parsing for leader modification records
//!
//! Supports both single-line JSONL and multi-line JSON5 formats.
//! JSON5 adds support for comments, trailing commas, and unquoted keys,
//! which mod authors tend to lean on when editing records by hand.

use crate::models::LeaderModification;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, BufReader, Read};
use thiserror::Error;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// A malformed record skipped while parsing a stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}

/// Result of parsing a record stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub records: Vec<LeaderModification>,
    pub warnings: Vec<Warning>,
}

/// Parse a single JSON5 string into a modification record.
pub fn parse_line(line: &str, line_number: usize) -> Result<LeaderModification, ParseError> {
    json5::from_str(line).map_err(|e| ParseError { message: e.to_string(), line: line_number })
}

/// Parse a stream of JSON5 objects into modification records.
///
/// Objects may sit one per line or span several lines; an object ends when
/// its braces and brackets balance outside of strings and comments. A
/// malformed object is recorded as a warning (with the line it started on)
/// and parsing resumes with the next object. Lines that are not valid UTF-8
/// are read lossily and flagged with a warning. Record order follows the
/// stream.
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    let mut result = ParseResult::default();
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    let mut accumulator = String::new();
    let mut start_line = 1;
    let mut current_line = 0;
    let mut depth = DepthTracker::default();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                result.warnings.push(Warning { message: e.to_string(), line: current_line + 1 });
                break;
            }
        }
        current_line += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(text) => text.to_string(),
            Err(_) => {
                result.warnings.push(Warning {
                    message: "invalid UTF-8, bytes replaced".to_string(),
                    line: current_line,
                });
                String::from_utf8_lossy(&buf).into_owned()
            }
        };
        let line = line.trim_end_matches(['\n', '\r']);

        // Skip empty lines when not accumulating
        if accumulator.is_empty() && line.trim().is_empty() {
            start_line = current_line + 1;
            continue;
        }

        if !accumulator.is_empty() {
            accumulator.push('\n');
        }
        accumulator.push_str(line);
        depth.scan_line(line);

        if depth.is_balanced() {
            // Comment-only lines between objects carry nothing to parse
            if depth.has_content {
                push_object(&mut result, &accumulator, start_line);
            }

            accumulator.clear();
            start_line = current_line + 1;
            depth = DepthTracker::default();
        }
    }

    // Whatever is left never balanced; report it against its first line
    if depth.has_content {
        push_object(&mut result, &accumulator, start_line);
    }

    result
}

/// Brace and bracket depth outside of JSON5 strings and comments.
#[derive(Debug, Default)]
struct DepthTracker {
    braces: i32,
    brackets: i32,
    /// Quote character of the open string, if any
    quote: Option<char>,
    escape_next: bool,
    in_block_comment: bool,
    /// Anything seen outside comments and whitespace
    has_content: bool,
}

impl DepthTracker {
    fn scan_line(&mut self, line: &str) {
        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if self.in_block_comment {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }

            if let Some(quote) = self.quote {
                if self.escape_next {
                    self.escape_next = false;
                } else if ch == '\\' {
                    self.escape_next = true;
                } else if ch == quote {
                    self.quote = None;
                }
                continue;
            }

            if !ch.is_whitespace() && !(ch == '/' && matches!(chars.peek(), Some('/') | Some('*'))) {
                self.has_content = true;
            }

            match ch {
                '"' | '\'' => self.quote = Some(ch),
                '/' if chars.peek() == Some(&'/') => break,
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                '{' => self.braces += 1,
                '}' => self.braces -= 1,
                '[' => self.brackets += 1,
                ']' => self.brackets -= 1,
                _ => {}
            }
        }

        // Strings end at the line break unless continued with a backslash
        if !self.escape_next {
            self.quote = None;
        }
        self.escape_next = false;
    }

    fn is_balanced(&self) -> bool {
        self.braces == 0 && self.brackets == 0 && !self.in_block_comment
    }
}

fn push_object(result: &mut ParseResult, text: &str, line: usize) {
    match parse_line(text, line) {
        Ok(record) => result.records.push(record),
        Err(e) => result.warnings.push(Warning { message: e.message, line: e.line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AggressionLevel, LeaderIdentity, MilitarismLevel};
    use std::io::Cursor;

    #[test]
    fn test_parse_line_record() {
        let line = r#"{"leader": "caesar", "name": "Augustus", "militarism": "militaristic"}"#;
        let record = parse_line(line, 1).unwrap();
        assert_eq!(record.leader, LeaderIdentity::Caesar);
        assert_eq!(record.name.as_deref(), Some("Augustus"));
        assert_eq!(record.militarism, Some(MilitarismLevel::Militaristic));
    }

    #[test]
    fn test_parse_line_invalid_json() {
        let err = parse_line("{not valid json}", 5).unwrap_err();
        assert_eq!(err.line, 5);
    }

    #[test]
    fn test_parse_line_missing_leader() {
        assert!(parse_line(r#"{"name": "Nobody"}"#, 1).is_err());
    }

    #[test]
    fn test_parse_line_unknown_leader() {
        assert!(parse_line(r#"{"leader": "cleopatra"}"#, 1).is_err());
    }

    #[test]
    fn test_parse_stream_preserves_order() {
        let input = r#"{"leader": "gandhi", "name": "First"}

{"leader": "gandhi", "name": "Second"}
{"leader": "napoleon"}"#;
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty());
        let names: Vec<_> = result.records.iter().map(|r| r.name.clone()).collect();
        assert_eq!(names, vec![Some("First".into()), Some("Second".into()), None]);
    }

    #[test]
    fn test_parse_stream_skips_malformed_object() {
        let input = r#"{"leader": "gandhi"}
{invalid json}
{"leader": "shaka", "aggression": "aggressive"}"#;
        let result = parse_stream(Cursor::new(input));
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].line, 2);
        assert_eq!(result.records[1].aggression, Some(AggressionLevel::Aggressive));
    }

    #[test]
    fn test_parse_stream_multiline_json5() {
        let input = r#"{
  // Gandhi, but grumpier
  leader: "gandhi",
  aggression: "aggressive",
}
{
  leader: "mao",
  name: "Mao Zedong", /* modern romanisation */
}"#;
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].leader, LeaderIdentity::Gandhi);
        assert_eq!(result.records[1].name.as_deref(), Some("Mao Zedong"));
    }

    #[test]
    fn test_parse_stream_braces_inside_strings() {
        let input = r#"{"leader": "alexander", "name": "Alexander {the Great}"}"#;
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty());
        assert_eq!(result.records[0].name.as_deref(), Some("Alexander {the Great}"));
    }

    #[test]
    fn test_parse_stream_unterminated_object() {
        let input = "{\"leader\": \"gandhi\"}\n{\"leader\": \"mao\",";
        let result = parse_stream(Cursor::new(input));
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].line, 2);
    }

    #[test]
    fn test_parse_stream_invalid_utf8_keeps_going() {
        let mut input = b"{\"leader\": \"gandhi\"}\n{\"leader\": \"mao\", \"name\": \"M".to_vec();
        input.push(0xff);
        input.extend_from_slice(b"o\"}\n{\"leader\": \"shaka\"}\n");

        let result = parse_stream(Cursor::new(input));
        let leaders: Vec<_> = result.records.iter().map(|r| r.leader).collect();
        assert_eq!(leaders, vec![LeaderIdentity::Gandhi, LeaderIdentity::Mao, LeaderIdentity::Shaka]);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].line, 2);
        assert_eq!(result.records[1].name.as_deref(), Some("M\u{FFFD}o"));
    }

    #[test]
    fn test_parse_stream_braces_in_single_quotes() {
        let input = "{leader: 'gandhi', name: 'Mahatma }'}\n{leader: 'shaka', name: 'Z'}";
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].name.as_deref(), Some("Mahatma }"));
        assert_eq!(result.records[1].leader, LeaderIdentity::Shaka);
    }

    #[test]
    fn test_parse_stream_braces_in_comments() {
        let input = r#"{
  leader: "gandhi", // closes with }
  /* { opens
     another } */
  name: "Bapu",
}
{leader: "mao", name: "Chairman \"}\" Mao"}"#;
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].name.as_deref(), Some("Bapu"));
        assert_eq!(result.records[1].name.as_deref(), Some("Chairman \"}\" Mao"));
    }

    #[test]
    fn test_parse_stream_comment_lines_between_objects() {
        let input = "// balance patch\n{leader: 'caesar'}\n/* rulers below\n   are renamed */\n{leader: 'mao', name: 'Mao'}";
        let result = parse_stream(Cursor::new(input));
        assert!(result.warnings.is_empty(), "{:?}", result.warnings);
        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn test_parse_stream_empty_input() {
        let result = parse_stream(Cursor::new(""));
        assert!(result.records.is_empty());
        assert!(result.warnings.is_empty());
    }
}
