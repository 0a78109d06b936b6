// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! graph6 encoding and decoding.
//!
//! graph6 is the printable format used by nauty and most graph catalogues.
//! A string starts with the vertex count `n` (one byte `n + 63` for `n < 63`,
//! otherwise `~` followed by three bytes of 6 bits each), followed by the
//! upper triangle of the adjacency matrix in column order, packed six bits per
//! byte with an offset of 63. An optional `>>graph6<<` header is accepted.

use crate::error::{ModelError, Result};
use crate::graph::Graph;
use thinness_core::set::MAX_VERTICES;
use thiserror::Error;

const OFFSET: u8 = 63;
const LONG_PREFIX: u8 = 126;
const HEADER: &str = ">>graph6<<";

/// Structural problems in a graph6 string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Graph6Error {
    #[error("input is empty")]
    Empty,

    #[error("byte {byte:#04x} at position {position} is outside the printable graph6 range")]
    InvalidByte { position: usize, byte: u8 },

    #[error("expected {expected} bytes of adjacency data, found {actual}")]
    UnexpectedLength { expected: usize, actual: usize },

    #[error("padding bits in the last byte are not zero")]
    NonZeroPadding,
}

fn sextet(position: usize, byte: u8) -> Result<u8> {
    if !(OFFSET..=OFFSET + 63).contains(&byte) {
        return Err(Graph6Error::InvalidByte { position, byte }.into());
    }
    Ok(byte - OFFSET)
}

/// Decodes a graph6 string into a `Graph`.
///
/// Trailing whitespace (such as the newline of a catalogue line) is ignored.
///
/// # Errors
///
/// Returns `ModelError::Graph6` for malformed input and
/// `ModelError::TooManyVertices` for graphs with more than 64 vertices.
pub fn decode(input: &str) -> Result<Graph> {
    let trimmed = input.trim_end();
    let body = trimmed.strip_prefix(HEADER).unwrap_or(trimmed).as_bytes();
    if body.is_empty() {
        return Err(Graph6Error::Empty.into());
    }

    let (n, data_start) = if body[0] != LONG_PREFIX {
        (sextet(0, body[0])? as usize, 1)
    } else {
        if body.len() < 4 {
            return Err(Graph6Error::UnexpectedLength {
                expected: 3,
                actual: body.len() - 1,
            }
            .into());
        }
        if body[1] == LONG_PREFIX {
            // 8-byte form, only used for n >= 258048.
            return Err(ModelError::TooManyVertices {
                count: 258_048,
                max: MAX_VERTICES,
            });
        }
        let mut n = 0usize;
        for (position, &byte) in body.iter().enumerate().take(4).skip(1) {
            n = (n << 6) | sextet(position, byte)? as usize;
        }
        (n, 4)
    };

    let mut graph = Graph::new(n)?;
    let data = &body[data_start..];
    let num_bits = n * n.saturating_sub(1) / 2;
    let expected = num_bits.div_ceil(6);
    if data.len() != expected {
        return Err(Graph6Error::UnexpectedLength {
            expected,
            actual: data.len(),
        }
        .into());
    }

    let mut bits = Vec::with_capacity(expected * 6);
    for (i, &byte) in data.iter().enumerate() {
        let value = sextet(data_start + i, byte)?;
        for shift in (0..6).rev() {
            bits.push((value >> shift) & 1 == 1);
        }
    }
    if bits[num_bits..].iter().any(|&b| b) {
        return Err(Graph6Error::NonZeroPadding.into());
    }

    let mut k = 0;
    for v in 1..n {
        for u in 0..v {
            if bits[k] {
                graph.add_edge(u, v)?;
            }
            k += 1;
        }
    }

    Ok(graph)
}

/// Encodes `graph` as a graph6 string without header.
pub fn encode(graph: &Graph) -> String {
    let n = graph.num_vertices();
    let mut out: Vec<u8> = Vec::new();

    if n < 63 {
        out.push(n as u8 + OFFSET);
    } else {
        out.push(LONG_PREFIX);
        for shift in [12, 6, 0] {
            out.push(((n >> shift) & 0x3f) as u8 + OFFSET);
        }
    }

    let mut acc = 0u8;
    let mut filled = 0;
    for v in 1..n {
        for u in 0..v {
            acc = (acc << 1) | graph.has_edge(u, v) as u8;
            filled += 1;
            if filled == 6 {
                out.push(acc + OFFSET);
                acc = 0;
                filled = 0;
            }
        }
    }
    if filled > 0 {
        out.push((acc << (6 - filled)) + OFFSET);
    }

    // Every pushed byte lies in 63..=126, which is ASCII.
    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_strings() {
        // Single vertex.
        let g = decode("@").unwrap();
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.num_edges(), 0);

        // Path 0-1-2: bits (0,1)=1, (0,2)=0, (1,2)=1 -> 101000 = 40.
        let g = decode("Bg").unwrap();
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2)]);

        // K4 is "C~".
        let g = decode("C~").unwrap();
        assert!(g.is_complete());
        assert_eq!(g.num_vertices(), 4);

        // C4 with edges 0-1, 1-2, 2-3, 0-3 -> bits 1 0 1 1 0 1 -> 45 -> 'l'.
        let g = decode("Cl").unwrap();
        assert_eq!(
            g.edges().collect::<Vec<_>>(),
            vec![(0, 1), (0, 3), (1, 2), (2, 3)]
        );
    }

    #[test]
    fn test_decode_accepts_header_and_trailing_newline() {
        let g = decode(">>graph6<<C~\n").unwrap();
        assert!(g.is_complete());
    }

    #[test]
    fn test_decode_eleven_vertex_catalogue_entry() {
        let g = decode(r"J?AADI\x\z_").unwrap();
        assert_eq!(g.num_vertices(), 11);
        assert_eq!(encode(&g), r"J?AADI\x\z_");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode(""), Err(ModelError::Graph6(Graph6Error::Empty)));
        assert_eq!(
            decode("C"),
            Err(ModelError::Graph6(Graph6Error::UnexpectedLength {
                expected: 1,
                actual: 0
            }))
        );
        assert_eq!(
            decode("C~~"),
            Err(ModelError::Graph6(Graph6Error::UnexpectedLength {
                expected: 1,
                actual: 2
            }))
        );
        assert_eq!(
            decode("B!"),
            Err(ModelError::Graph6(Graph6Error::InvalidByte {
                position: 1,
                byte: b'!'
            }))
        );
        // Three vertices use 3 of 6 bits; '@' + 1 sets a padding bit.
        assert_eq!(
            decode("BA"),
            Err(ModelError::Graph6(Graph6Error::NonZeroPadding))
        );
    }

    #[test]
    fn test_decode_rejects_large_graphs() {
        // n = 65 in the long form: 65 = 0b000000_000001_000001.
        let mut s = String::from("~?@@");
        let bits: usize = 65 * 64 / 2;
        s.push_str(&"?".repeat(bits.div_ceil(6)));
        assert!(matches!(
            decode(&s),
            Err(ModelError::TooManyVertices { count: 65, .. })
        ));
    }

    #[test]
    fn test_encode_matches_decode() {
        let g = Graph::from_edges(5, [(0, 4), (1, 2), (3, 4)]).unwrap();
        let s = encode(&g);
        assert_eq!(decode(&s).unwrap(), g);
        assert_eq!(encode(&Graph::new(0).unwrap()), "?");
    }
}
