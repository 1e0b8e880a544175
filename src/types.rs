use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How a changed path is correlated with a module root.
///
/// - `LiteralPrefix`: plain string prefix test. A root of `/a/b` also claims
///   `/a/bc/file.txt`. This is the default.
/// - `SegmentAware`: the root must end on a path-component boundary of the
///   changed path, so `/a/b` claims `/a/b/file.txt` but not `/a/bc/file.txt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    #[default]
    LiteralPrefix,
    SegmentAware,
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "literal-prefix" | "literal" => Ok(MatchMode::LiteralPrefix),
            "segment-aware" | "segment" => Ok(MatchMode::SegmentAware),
            other => Err(format!(
                "invalid match_mode: {other} (expected \"literal-prefix\" or \"segment-aware\")"
            )),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::LiteralPrefix => f.write_str("literal-prefix"),
            MatchMode::SegmentAware => f.write_str("segment-aware"),
        }
    }
}
