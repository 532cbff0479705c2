//! Line-selector parsing and direct retrieval
//!
//! A selector addresses log lines explicitly: a single number (`"7"`), an
//! inclusive range (`"2-5"`), or a comma-separated set (`"1,3,9"`). Forms
//! may be mixed (`"1,4-6,12"`).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::store::MemoryLog;
use crate::{MemlogError, Result};

/// A line retrieved by explicit address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedLine {
    /// 1-based line number in the log
    pub line_number: usize,
    /// Line content as stored
    pub text: String,
}

/// A resolved selector: distinct, ascending line numbers held as spans
///
/// Spans stay compact until clipped against the log, so memory is bounded
/// by the log length rather than the selector's span. A selector like
/// `"1-9000000000"` costs two words until real line numbers are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSelector {
    /// Inclusive (start, end) runs, ascending and non-overlapping
    spans: Vec<(usize, usize)>,
}

impl LineSelector {
    /// Merge raw spans into ascending, non-overlapping runs
    fn normalize(mut spans: Vec<(usize, usize)>) -> Self {
        spans.sort_unstable();
        let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
        for (start, end) in spans {
            match merged.last_mut() {
                Some(last) if start <= last.1.saturating_add(1) => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }
        Self { spans: merged }
    }

    /// True when the selector addresses no lines at all
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// All addressed line numbers, ascending
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.spans.iter().flat_map(|&(start, end)| start..=end)
    }

    /// Line numbers that fall inside `[1, len]`, ascending
    pub fn clip(&self, len: usize) -> Vec<usize> {
        let mut numbers = Vec::new();
        for &(start, end) in &self.spans {
            let lo = start.max(1);
            let hi = end.min(len);
            if lo <= hi {
                numbers.extend(lo..=hi);
            }
        }
        numbers
    }
}

/// Parse a selector expression into a [`LineSelector`]
///
/// Unparseable tokens are dropped silently; the selector is only invalid
/// when no token parses at all. A range whose start exceeds its end is a
/// valid, empty token, so `resolve("3-1")` yields an empty selector.
pub fn resolve(selector: &str) -> Result<LineSelector> {
    let mut spans = Vec::new();
    let mut parsed_any = false;

    for token in selector.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if let Some((start, end)) = token.split_once('-') {
            if let (Ok(start), Ok(end)) = (start.trim().parse::<usize>(), end.trim().parse::<usize>())
            {
                parsed_any = true;
                if start <= end {
                    spans.push((start, end));
                }
                continue;
            }
        }

        if let Ok(n) = token.parse::<usize>() {
            parsed_any = true;
            spans.push((n, n));
        }
    }

    if !parsed_any {
        return Err(MemlogError::InvalidSelector {
            expr: selector.to_string(),
        });
    }

    Ok(LineSelector::normalize(spans))
}

/// Resolve a selector and fetch every addressed line that exists
///
/// Numbers outside `[1, len]` are silently omitted. A selector that parses
/// but addresses nothing currently in the log is `NoneInRange`.
pub fn fetch(log: &MemoryLog, selector: &str) -> Result<Vec<FetchedLine>> {
    let resolved = resolve(selector)?;
    let lines = log.read_all()?;

    let fetched: Vec<FetchedLine> = resolved
        .clip(lines.len())
        .into_iter()
        .map(|n| FetchedLine {
            line_number: n,
            text: lines[n - 1].clone(),
        })
        .collect();

    if fetched.is_empty() {
        return Err(MemlogError::NoneInRange {
            expr: selector.to_string(),
            len: lines.len(),
        });
    }

    debug!("selector '{selector}' fetched {} line(s)", fetched.len());
    Ok(fetched)
}
