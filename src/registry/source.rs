//! Discovery of modification records.

use std::io::Read;

use crate::models::LeaderModification;
use crate::parser::{parse_stream, Warning};

/// Supplies every well-formed modification record found in loaded data,
/// in a stable discovery order.
pub trait ModificationSource {
    fn discover(&self) -> Vec<LeaderModification>;
}

impl ModificationSource for [LeaderModification] {
    fn discover(&self) -> Vec<LeaderModification> {
        self.to_vec()
    }
}

impl ModificationSource for Vec<LeaderModification> {
    fn discover(&self) -> Vec<LeaderModification> {
        self.clone()
    }
}

/// Records parsed from a JSONL/JSON5 stream.
///
/// Malformed objects are dropped from discovery; their warnings stay
/// available through [`StreamSource::warnings`].
#[derive(Debug, Clone, Default)]
pub struct StreamSource {
    records: Vec<LeaderModification>,
    warnings: Vec<Warning>,
}

impl StreamSource {
    /// Parse every record from `reader`.
    pub fn from_reader<R: Read>(reader: R) -> Self {
        let result = parse_stream(reader);
        Self { records: result.records, warnings: result.warnings }
    }

    /// Parse every record from an in-memory string.
    pub fn from_str(text: &str) -> Self {
        Self::from_reader(text.as_bytes())
    }

    /// Append the records of another stream after the current ones.
    ///
    /// Later streams layer over earlier ones, like successive patch files.
    pub fn extend<R: Read>(&mut self, reader: R) {
        let result = parse_stream(reader);
        self.records.extend(result.records);
        self.warnings.extend(result.warnings);
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}

impl ModificationSource for StreamSource {
    fn discover(&self) -> Vec<LeaderModification> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LeaderIdentity;

    #[test]
    fn test_vec_source_keeps_order() {
        let records = vec![
            LeaderModification::new(LeaderIdentity::Mao),
            LeaderModification::new(LeaderIdentity::Caesar),
        ];
        assert_eq!(records.discover(), records);
        assert_eq!(records.as_slice().discover(), records);
    }

    #[test]
    fn test_stream_source_drops_malformed() {
        let source = StreamSource::from_str("{\"leader\": \"gandhi\"}\n{\"leader\": 42}\n");
        assert_eq!(source.discover().len(), 1);
        assert_eq!(source.warnings().len(), 1);
        assert_eq!(source.warnings()[0].line, 2);
    }

    #[test]
    fn test_stream_source_extend_layers_after() {
        let mut source = StreamSource::from_str(r#"{"leader": "gandhi", "name": "Base"}"#);
        source.extend(r#"{"leader": "gandhi", "name": "Patch"}"#.as_bytes());
        let names: Vec<_> = source.discover().into_iter().filter_map(|r| r.name).collect();
        assert_eq!(names, vec!["Base", "Patch"]);
    }
}
