//! Demo entry composition
//!
//! Computes each of the library's results once and writes them, one line
//! each, to the given sink. The merge capability is passed in by the caller
//! so tests can substitute their own.

use std::io::Write;

use anyhow::Result;
use serde_json::{json, Value};
use tracing::debug;

use crate::math::{format_price, sum};
use crate::message::MSG;

/// Print the sum, the formatted price, the greeting and the merged object,
/// in that order.
pub fn run_demo<W, M>(out: &mut W, merge: M) -> Result<()>
where
    W: Write,
    M: Fn(&Value, &Value) -> Value,
{
    let total = sum(1.0, 2.0);
    debug!(total, "computed sum");
    writeln!(out, "{}", total)?;

    writeln!(out, "{}", format_price(19.9996))?;
    writeln!(out, "{}", MSG)?;

    let merged = merge(&json!({"name": "hahaha"}), &json!({"age": 18}));
    writeln!(out, "{}", merged)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::deep_merge;

    #[test]
    fn test_run_demo_prints_four_lines_in_order() {
        let mut out = Vec::new();
        run_demo(&mut out, deep_merge).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "3");
        assert_eq!(lines[1], "20.00");
        assert_eq!(lines[2], MSG);

        // Compare the merged object structurally, not by key order
        let merged: Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(merged, json!({"name": "hahaha", "age": 18}));
    }

    #[test]
    fn test_run_demo_uses_the_injected_merge() {
        let mut out = Vec::new();
        run_demo(&mut out, |_, _| json!({"stub": true})).unwrap();

        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert_eq!(last, r#"{"stub":true}"#);
    }
}
