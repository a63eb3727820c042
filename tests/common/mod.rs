//! Shared test utilities for minidxf integration tests.
//!
//! Parses emitted DXF text back into group code/value pairs and provides
//! a sink that fails on demand.

#![allow(dead_code)]

use std::io::{self, Write};

use minidxf::DxfWriter;
use nom::{
    character::complete::{char, digit1, line_ending, not_line_ending},
    combinator::{map_res, opt, recognize},
    multi::many0,
    sequence::{pair, preceded, terminated},
    IResult,
};

/// One parsed group code/value pair
pub type Pair = (i32, String);

fn group_code(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(opt(char('-')), digit1)), |s: &str| s.parse::<i32>())(input)
}

fn tagged_pair(input: &str) -> IResult<&str, Pair> {
    let (input, code) = terminated(preceded(char('\t'), group_code), line_ending)(input)?;
    let (input, value) = terminated(not_line_ending, line_ending)(input)?;
    Ok((input, (code, value.to_string())))
}

/// Parse a complete DXF text stream, panicking on leftover input.
pub fn parse_pairs(text: &str) -> Vec<Pair> {
    let (rest, pairs) = many0(tagged_pair)(text).expect("stream should parse");
    assert!(rest.is_empty(), "unparsed trailing input: {rest:?}");
    pairs
}

/// Parse the bytes a session wrote
pub fn parse_output(bytes: Vec<u8>) -> Vec<Pair> {
    parse_pairs(&String::from_utf8(bytes).expect("output is UTF-8"))
}

/// Run `f` against a fresh default session and parse what it wrote.
pub fn emit<F>(f: F) -> Vec<Pair>
where
    F: FnOnce(&mut DxfWriter<Vec<u8>>) -> minidxf::Result<()>,
{
    let mut dxf = DxfWriter::new(Vec::new());
    f(&mut dxf).expect("emission should succeed");
    parse_output(dxf.into_inner())
}

/// Values of every pair with the given code, in order
pub fn values_of(pairs: &[Pair], code: i32) -> Vec<&str> {
    pairs
        .iter()
        .filter(|(c, _)| *c == code)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Record type names (group 0 values), in order
pub fn record_types(pairs: &[Pair]) -> Vec<&str> {
    values_of(pairs, 0)
}

/// Sink that accepts a fixed number of `write` calls and then fails.
///
/// Every call after the first failure is counted, so tests can check
/// that nothing more was attempted.
#[derive(Debug)]
pub struct FailingSink {
    remaining: usize,
    failed: bool,
    pub calls_after_failure: usize,
}

impl FailingSink {
    pub fn new(successful_writes: usize) -> Self {
        FailingSink {
            remaining: successful_writes,
            failed: false,
            calls_after_failure: 0,
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failed
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.failed {
            self.calls_after_failure += 1;
            return Err(io::Error::new(io::ErrorKind::Other, "sink already failed"));
        }
        if self.remaining == 0 {
            self.failed = true;
            return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
        }
        self.remaining -= 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
