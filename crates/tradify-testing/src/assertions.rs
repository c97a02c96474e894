//! Custom assertions for `--format json` output.
//!
//! Every JSON document has the shape `{"content": {...}}`.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the listing contains exactly these product names, in order
pub fn assert_product_names(json: &Value, expected: &[&str]) -> Result<()> {
    let products = json["content"]["products"]
        .as_array()
        .context("Expected 'content.products' array in JSON")?;

    let names: Vec<&str> = products
        .iter()
        .enumerate()
        .map(|(i, p)| {
            p["name"]
                .as_str()
                .with_context(|| format!("Product {} missing name", i))
        })
        .collect::<Result<_>>()?;

    if names != expected {
        anyhow::bail!("Expected products {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert the search result carries the given panel message key
pub fn assert_panel_message(json: &Value, expected: &str) -> Result<()> {
    let message = json["content"]["message"]
        .as_str()
        .context("Expected 'content.message' string in JSON")?;

    if message != expected {
        anyhow::bail!("Expected panel message {:?}, got {:?}", expected, message);
    }

    Ok(())
}
