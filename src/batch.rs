//! Newline-delimited JSON request stream.
//!
//! Each input line holds one [`RasterRequest`]; each produces exactly one
//! output line, either a [`RasterResponse`] or `{"error": "..."}`. A bad line
//! (unknown tag, malformed JSON, invalid UTF-8) never stops the stream. Lines
//! are read as raw bytes, so undecodable input reaches the JSON parser and is
//! reported like any other malformed request.

use std::io::{BufRead, Write};

use log::{debug, warn};

use crate::bench::{Harness, RasterResponse};
use crate::dispatch::RasterRequest;
use crate::error::Result;

/// Line counts of a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Requests answered with a response.
    pub answered: usize,
    /// Requests answered with an error line.
    pub failed: usize,
}

/// Parse and measure one request line.
pub fn handle_request(harness: &Harness, line: &[u8]) -> Result<RasterResponse> {
    let request: RasterRequest = serde_json::from_slice(line)?;
    harness.execute(&request)
}

/// The JSON reply for one request line, and whether it succeeded.
pub fn reply_line(harness: &Harness, line: &[u8]) -> Result<(String, bool)> {
    match handle_request(harness, line) {
        Ok(response) => Ok((serde_json::to_string(&response)?, true)),
        Err(e) => {
            let reply = serde_json::json!({ "error": e.to_string() });
            Ok((reply.to_string(), false))
        }
    }
}

/// Answer every request in `input`, one reply line per non-blank line.
///
/// # Errors
///
/// Only I/O failures on `input` or `output` end the batch early.
pub fn run<R: BufRead, W: Write>(
    harness: &Harness,
    input: R,
    mut output: W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in input.split(b'\n').enumerate() {
        let line = line?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let (reply, ok) = reply_line(harness, &line)?;
        if ok {
            summary.answered += 1;
        } else {
            warn!("request on line {}: {reply}", index + 1);
            summary.failed += 1;
        }
        writeln!(output, "{reply}")?;
    }

    output.flush()?;
    debug!("batch done: {} answered, {} failed", summary.answered, summary.failed);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::IterationPlan;
    use crate::raster::bresenham_line;

    fn harness() -> Harness {
        Harness::new(&IterationPlan::uniform(2)).unwrap()
    }

    fn replies(output: &[u8]) -> Vec<serde_json::Value> {
        output
            .split(|&b| b == b'\n')
            .filter(|line| !line.is_empty())
            .map(|line| serde_json::from_slice(line).unwrap())
            .collect()
    }

    #[test]
    fn test_bad_lines_do_not_stop_the_stream() {
        let mut input = Vec::new();
        input.extend_from_slice(b"{\"algorithm\":\"dda\",\"x1\":0,\"y1\":0,\"x2\":3,\"y2\":1}\n");
        input.extend_from_slice(b"{\"algorithm\":\"liang_barsky\",\"x1\":0,\"y1\":0}\n");
        input.extend_from_slice(b"{not json\n");
        input.extend_from_slice(b"\xff\xfe\n");
        input.extend_from_slice(br#"{"algorithm":"bresenham_line","x1":0,"y1":0,"x2":5,"y2":2}"#);
        input.push(b'\n');

        let mut output = Vec::new();
        let summary = run(&harness(), input.as_slice(), &mut output).unwrap();

        assert_eq!(summary, BatchSummary { answered: 2, failed: 3 });
        let replies = replies(&output);
        assert_eq!(replies.len(), 5);

        assert_eq!(replies[0]["points"].as_array().unwrap().len(), 4);
        assert!(replies[1]["error"].as_str().unwrap().contains("liang_barsky"));
        assert!(replies[2]["error"].as_str().unwrap().starts_with("JSON error"));
        assert!(replies[3]["error"].as_str().unwrap().starts_with("JSON error"));

        let last: RasterResponse = serde_json::from_value(replies[4].clone()).unwrap();
        assert_eq!(last.points, bresenham_line(0, 0, 5, 2));
    }

    #[test]
    fn test_blank_lines_skipped_and_last_line_unterminated() {
        let input = b"\n   \r\n{\"algorithm\":\"bresenham_circle\",\"x1\":0,\"y1\":0,\"radius\":2}";
        let mut output = Vec::new();
        let summary = run(&harness(), &input[..], &mut output).unwrap();

        assert_eq!(summary, BatchSummary { answered: 1, failed: 0 });
        assert_eq!(replies(&output).len(), 1);
    }

    #[test]
    fn test_crlf_line_is_accepted() {
        let (reply, ok) =
            reply_line(&harness(), b"{\"algorithm\":\"wu\",\"x1\":0,\"y1\":0,\"x2\":2,\"y2\":1}\r")
                .unwrap();
        assert!(ok, "{reply}");
    }

    #[test]
    fn test_handle_request_unknown_tag() {
        let line = br#"{"algorithm":"xiaolin","x1":0,"y1":0}"#;
        let err = handle_request(&harness(), line).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownAlgorithm(_)));
    }
}
