//! MCP tool handlers for the sprint sheet server
//!
//! Each handler is in a separate file; the `#[tool]` methods in `lib.rs`
//! only forward to them.

pub mod milestones;
pub mod reload;
pub mod tasks;

use crate::sanitize::canonical_key;
use mcp_attr::Result as McpResult;
use std::str::FromStr;

/// Parse an optional filter parameter into a canonical enum
///
/// # Arguments
/// * `name` - Parameter name used in the error message
/// * `value` - Raw parameter value; `None` or blank means "no filter".
///   Case and inner spacing are ignored ("In Progress" == "in-progress").
///
/// # Returns
/// Result containing the parsed value, or an INVALID_PARAMS error
pub(crate) fn parse_filter<T>(name: &str, value: Option<&str>) -> McpResult<Option<T>>
where
    T: FromStr<Err = String>,
{
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(raw) => canonical_key(raw).parse::<T>().map(Some).map_err(|err| {
            mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS)
                .with_message(format!("Invalid {} filter: {}", name, err), true)
        }),
    }
}
