//! Value sources used to populate a matrix cell by cell, in row-major
//! order.

use rand::distributions::uniform::SampleUniform;
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{MatrixError, Result};

/// Yields one value per cell. `row` and `col` are 0-based and only
/// reported back in prompts and errors.
pub trait ValueSource<T> {
    fn next_value(&mut self, row: usize, col: usize) -> Result<T>;
}

/// Programmatic source over any iterator.
pub struct IterSource<I> {
    inner: I,
}

impl<I: Iterator> IterSource<I> {
    pub fn new<V: IntoIterator<IntoIter = I>>(values: V) -> Self {
        IterSource {
            inner: values.into_iter(),
        }
    }
}

impl<T, I: Iterator<Item = T>> ValueSource<T> for IterSource<I> {
    fn next_value(&mut self, row: usize, col: usize) -> Result<T> {
        self.inner
            .next()
            .ok_or(MatrixError::SourceExhausted { row, col })
    }
}

/// Whitespace separated numbers read from `reader`. When a prompt writer
/// is set, `r{row}c{col}: ` (1-based) is written before each cell.
pub struct ReaderSource<R, W> {
    reader: R,
    prompt: Option<W>,
    pending: Vec<String>,
}

impl<R: BufRead> ReaderSource<R, std::io::Sink> {
    pub fn new(reader: R) -> Self {
        ReaderSource {
            reader,
            prompt: None,
            pending: vec![],
        }
    }
}

impl<R: BufRead, W: Write> ReaderSource<R, W> {
    pub fn interactive(reader: R, prompt: W) -> Self {
        ReaderSource {
            reader,
            prompt: Some(prompt),
            pending: vec![],
        }
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            // reversed so that pop() hands tokens out in order
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop())
    }
}

impl<T: FromStr, R: BufRead, W: Write> ValueSource<T> for ReaderSource<R, W> {
    fn next_value(&mut self, row: usize, col: usize) -> Result<T> {
        if self.pending.is_empty() {
            if let Some(prompt) = self.prompt.as_mut() {
                write!(prompt, "r{}c{}: ", row + 1, col + 1)?;
                prompt.flush()?;
            }
        }

        let token = self
            .next_token()?
            .ok_or(MatrixError::SourceExhausted { row, col })?;
        token
            .parse()
            .map_err(|_| MatrixError::InvalidValue { row, col, token })
    }
}

/// Uniform random values in `[low, high)`.
pub struct RandomSource<R, T> {
    rng: R,
    low: T,
    high: T,
}

impl<R: Rng, T: SampleUniform + PartialOrd + Copy> RandomSource<R, T> {
    pub fn new(rng: R, low: T, high: T) -> Self {
        assert!(low < high, "empty sampling range");
        RandomSource { rng, low, high }
    }
}

impl<R: Rng, T: SampleUniform + PartialOrd + Copy> ValueSource<T> for RandomSource<R, T> {
    fn next_value(&mut self, _row: usize, _col: usize) -> Result<T> {
        Ok(self.rng.gen_range(self.low..self.high))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
