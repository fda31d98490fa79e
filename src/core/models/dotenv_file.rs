/// A single `KEY=value` entry in an overrides file.
#[derive(Debug, Clone, PartialEq)]
pub struct DotenvEntry {
    pub key: String,
    pub value: String,
    pub line_number: usize,
}

/// The entries of a parsed dotenv-style file, in file order.
///
/// Comments and blank lines are dropped by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct DotenvFile {
    pub entries: Vec<DotenvEntry>,
}
