pub mod document;
pub mod field;
pub mod namespace;
mod tcx;

pub use tcx::TcxParser;

use crate::error::ParseError;
use crate::types::activity::TcxDocument;

pub trait Parser {
    fn parse(&self, bytes: &[u8]) -> Result<TcxDocument, ParseError>;
}

pub fn parse(bytes: &[u8]) -> Result<TcxDocument, ParseError> {
    TcxParser::default().parse(bytes)
}
