//! Extraction of the `<template>` block from single-file component source.
//!
//! This is a single lazy regex match, not a markup parser. The first
//! `</template>` after the opening tag ends the block, so nested templates
//! are cut at the inner close tag.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::ExtractError;

static TEMPLATE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<template[^>]*>(.*?)</template>").expect("template pattern must compile")
});

/// Strips the whitespace a browser's `String.prototype.trim` strips: the BOM
/// counts, NEL does not.
fn trim_markup(text: &str) -> &str {
    text.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}')
}

/// Returns the trimmed content of the first `<template>` block, or the reason
/// there is none.
pub fn try_extract_template(source: &str) -> Result<&str, ExtractError> {
    let trimmed = trim_markup(source);
    if trimmed.is_empty() {
        return Err(ExtractError::InvalidInput);
    }

    let captures = TEMPLATE_BLOCK
        .captures(trimmed)
        .ok_or(ExtractError::NoBlockFound)?;
    let block = captures.get(1).map_or(0..0, |m| m.range());
    log::debug!("template block matched at bytes {}..{}", block.start, block.end);
    let content = trim_markup(&trimmed[block]);
    if content.is_empty() {
        return Err(ExtractError::EmptyBlock);
    }
    Ok(content)
}

/// Extracts the content of the first `<template>` block of `source`.
///
/// Every rejection is logged as a warning and collapses to an empty string.
pub fn extract_template_content(source: &str) -> String {
    match try_extract_template(source) {
        Ok(content) => content.to_string(),
        Err(err) => {
            log::warn!("{err}");
            String::new()
        }
    }
}

/// Like [`extract_template_content`], for values that may not be text at all.
pub fn extract_template_value(value: &Value) -> String {
    match value.as_str() {
        Some(source) => extract_template_content(source),
        None => {
            log::warn!("{}", ExtractError::InvalidInput);
            String::new()
        }
    }
}
