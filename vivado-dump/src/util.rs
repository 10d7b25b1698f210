use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;

// epim_3_7_utilization.txt:| Slice LUTs*             |  519 |     0 |    134600 |  0.38 |
static UTIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r".*epim_([0-9]+)_([0-9]+)_.*Slice LUTs[*|\s]+([0-9]+)[|\s]+[0-9]+[|\s]+[0-9]+[|\s]+[0-9.]+.*",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilizationRecord {
    pub row: u32,
    pub col: u32,
    pub luts: u32,
}

impl fmt::Display for UtilizationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{row},{col},{luts}",
            row = self.row,
            col = self.col,
            luts = self.luts
        )
    }
}

pub fn parse_line(line: &str) -> Option<UtilizationRecord> {
    let cap = UTIL_RE.captures(line)?;
    Some(UtilizationRecord {
        row: cap[1].parse().ok()?,
        col: cap[2].parse().ok()?,
        luts: cap[3].parse().ok()?,
    })
}

pub fn extract(input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Some(rec) => writeln!(out, "{rec}")?,
            None => writeln!(out, "Failed to match: {line}")?,
        }
    }
    Ok(())
}
