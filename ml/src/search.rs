//! Relevance search over the memory log

use log::debug;
use serde::{Deserialize, Serialize};

use crate::store::MemoryLog;
use crate::{DEFAULT_MAX_RESULTS, Result, score_line};

/// A scored line returned by search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMatch {
    /// 1-based line number in the log
    pub line_number: usize,
    /// Line content as stored
    pub text: String,
    /// Relevance score, always positive
    pub score: f64,
}

/// Rank log lines by relevance to `query`, best first
///
/// Reads the full log, scores every line, and drops lines that score zero.
/// Ties keep their original log order. `max_results` of `None` or `Some(0)`
/// falls back to [`DEFAULT_MAX_RESULTS`]. An empty log or a query nothing
/// matches yields an empty Vec, not an error.
pub fn search(log: &MemoryLog, query: &str, max_results: Option<usize>) -> Result<Vec<SearchMatch>> {
    let limit = match max_results {
        Some(n) if n > 0 => n,
        _ => DEFAULT_MAX_RESULTS,
    };
    let query = query.to_lowercase();

    let lines = log.read_all()?;
    let mut matches: Vec<SearchMatch> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let score = score_line(&query, &line.to_lowercase());
            (score > 0.0).then(|| SearchMatch {
                line_number: idx + 1,
                text: line.clone(),
                score,
            })
        })
        .collect();

    // Stable sort keeps log order for equal scores
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    matches.truncate(limit);

    debug!("search '{query}' matched {} of {} lines", matches.len(), lines.len());
    Ok(matches)
}
