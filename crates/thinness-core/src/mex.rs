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

//! Minimum excluded value.

use crate::set::{VertexSet, MAX_VERTICES};

/// Returns the smallest non-negative integer that does not occur in `values`.
///
/// Values below `MAX_VERTICES` are tracked in a single word; larger values
/// spill into a vector sized by the number of values seen, since the answer
/// can never exceed that count.
pub fn mex<I>(values: I) -> usize
where
    I: IntoIterator<Item = usize>,
{
    let mut small = VertexSet::new();
    let mut large: Vec<usize> = Vec::new();
    let mut count = 0usize;

    for value in values {
        count += 1;
        if value < MAX_VERTICES {
            small.insert(value);
        } else {
            large.push(value);
        }
    }

    let candidate = small.first_absent();
    if candidate < MAX_VERTICES || large.is_empty() {
        return candidate;
    }

    let mut seen = vec![false; count + 1];
    for value in large {
        if value <= count {
            seen[value] = true;
        }
    }
    (MAX_VERTICES..=count)
        .find(|&v| !seen[v])
        .unwrap_or(count + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mex_of_empty_is_zero() {
        assert_eq!(mex(std::iter::empty()), 0);
    }

    #[test]
    fn test_mex_skips_present_values_in_any_order() {
        assert_eq!(mex([1, 0, 3]), 2);
        assert_eq!(mex([2, 1]), 0);
        assert_eq!(mex([0, 0, 1, 1]), 2);
    }

    #[test]
    fn test_mex_beyond_one_word() {
        let values: Vec<usize> = (0..70).collect();
        assert_eq!(mex(values.iter().copied()), 70);

        let gap: Vec<usize> = (0..70).filter(|&v| v != 66).collect();
        assert_eq!(mex(gap), 66);
    }
}
