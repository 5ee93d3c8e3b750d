//! jirafmt - line-safe formatting helpers for JIRA issue data.
//!
//! The library turns already-fetched issues into values that are safe to
//! print on a single output line:
//! - [`normalize`] strips newlines and extracts names from optional fields
//! - [`redact`] replaces restricted comments with placeholders
//! - [`custom_fields`] decodes custom fields such as "Release Blocker"
//! - [`report`] renders issues as delimited rows

pub mod api;
pub mod config;
pub mod custom_fields;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod redact;
pub mod report;
