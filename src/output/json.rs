//! JSON output formatting

use crate::error::Result;
use crate::walk::WalkResult;

/// Serialize a walk result as pretty-printed JSON.
pub fn to_json(result: &WalkResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Print a walk result as pretty-printed JSON to stdout.
pub fn print_json(result: &WalkResult) -> Result<()> {
    println!("{}", to_json(result)?);
    Ok(())
}
