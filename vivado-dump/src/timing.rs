use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

// epim_1_0_timing.txt:  Data Path Delay:        9.506ns  (logic 6.362ns (66.926%)  route 3.144ns (33.074%))
static TIMING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r".*epim_([0-9]+)_([0-9]+)_.*Data Path Delay:[ ]*([0-9.]+)ns.*logic ([0-9.]+)ns.*route ([0-9.]+)ns.*",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    pub row: u32,
    pub col: u32,
    pub data_path: Decimal,
    pub logic: Decimal,
    pub route: Decimal,
}

impl fmt::Display for TimingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{row},{col},{dp},{logic},{route}",
            row = self.row,
            col = self.col,
            dp = self.data_path,
            logic = self.logic,
            route = self.route
        )
    }
}

pub fn parse_line(line: &str) -> Option<TimingRecord> {
    let cap = TIMING_RE.captures(line)?;
    Some(TimingRecord {
        row: cap[1].parse().ok()?,
        col: cap[2].parse().ok()?,
        data_path: cap[3].parse().ok()?,
        logic: cap[4].parse().ok()?,
        route: cap[5].parse().ok()?,
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

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const TIMING_LINE: &str = "epim_3_7_foo Data Path Delay:        9.506ns  (logic 6.362ns (66.926%)  route 3.144ns (33.074%))";

    #[test]
    fn parses_timing_line() {
        let rec = parse_line(TIMING_LINE).unwrap();
        assert_eq!(rec.row, 3);
        assert_eq!(rec.col, 7);
        assert_eq!(rec.to_string(), "3,7,9.506,6.362,3.144");
    }

    #[test]
    fn rejects_line_without_timing_data() {
        assert_matches!(parse_line("this line has no timing data"), None);
    }

    #[test]
    fn multi_digit_indices_keep_their_grouping() {
        let rec = parse_line(
            "epim_12_0_bar Data Path Delay: 1.0ns  (logic 0.5ns (50.000%)  route 0.5ns (50.000%))",
        )
        .unwrap();
        assert_eq!((rec.row, rec.col), (12, 0));
        let rec = parse_line(
            "epim_0_12_bar Data Path Delay: 1.0ns  (logic 0.5ns (50.000%)  route 0.5ns (50.000%))",
        )
        .unwrap();
        assert_eq!((rec.row, rec.col), (0, 12));
    }

    #[test]
    fn overflowing_index_is_not_a_record() {
        assert_matches!(
            parse_line(
                "epim_99999999999999999999_0_bar Data Path Delay: 1.0ns  (logic 0.5ns (50.000%)  route 0.5ns (50.000%))",
            ),
            None
        );
    }

    #[test]
    fn extract_preserves_input_order() {
        let input = format!("{TIMING_LINE}\nthis line has no timing data\n{TIMING_LINE}\n");
        let mut out = Vec::new();
        extract(input.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "3,7,9.506,6.362,3.144\n\
             Failed to match: this line has no timing data\n\
             3,7,9.506,6.362,3.144\n"
        );
    }

    #[test]
    fn empty_input_produces_no_output() {
        let mut out = Vec::new();
        extract(&b""[..], &mut out).unwrap();
        assert!(out.is_empty());
    }
}
