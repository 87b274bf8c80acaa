// sniffer-config/src/capture.rs
//! Live capture configuration.
//!
//! Covers which interface to open and how: snapshot length, promiscuous
//! mode, read timeout, whether buffers carry a link-layer header, and an
//! optional frame limit after which the session stops on its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::validation;

/// How to decide whether captured buffers start with an Ethernet header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkLayerMode {
    /// Derive it from the datalink type the capture handle reports.
    #[default]
    Auto,
    Present,
    Absent,
}

impl FromStr for LinkLayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(LinkLayerMode::Auto),
            "present" => Ok(LinkLayerMode::Present),
            "absent" => Ok(LinkLayerMode::Absent),
            other => Err(format!(
                "unknown link layer mode '{other}' (expected auto, present or absent)"
            )),
        }
    }
}

impl fmt::Display for LinkLayerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkLayerMode::Auto => "auto",
            LinkLayerMode::Present => "present",
            LinkLayerMode::Absent => "absent",
        };
        f.write_str(s)
    }
}

/// Packet capture configuration.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct CaptureConfig {
    /// Network interface for live capture.
    #[validate(custom(function = validation::validate_interface))]
    #[serde(default = "default_interface")]
    pub interface: String,

    /// Run in promiscuous mode?
    #[serde(default = "default_promiscuous")]
    pub promiscuous: bool,

    /// Snapshot length: the most bytes captured per frame.
    #[validate(range(min = 64, max = 262144))]
    #[serde(default = "default_snaplen", deserialize_with = "deserialize_size")]
    pub snaplen: usize,

    /// Read timeout (milliseconds).
    #[validate(range(min = 1, max = 60000))]
    #[serde(default = "default_timeout")]
    pub timeout_ms: u32,

    #[serde(default)]
    pub link_layer: LinkLayerMode,

    /// Stop after this many frames; unbounded when absent.
    #[validate(range(min = 1))]
    #[serde(default)]
    pub frame_limit: Option<u64>,
}

fn default_interface() -> String {
    "eth0".into()
}

fn default_promiscuous() -> bool {
    true
}

fn default_snaplen() -> usize {
    65535
}

fn default_timeout() -> u32 {
    1000
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SizeValue {
    Num(usize),
    Str(String),
}

/// Custom deserializer to allow human‑friendly sizes (e.g. "64KiB") or direct numbers.
fn deserialize_size<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    match SizeValue::deserialize(deserializer)? {
        SizeValue::Num(n) => Ok(n),
        SizeValue::Str(s) => parse_size(&s).map_err(serde::de::Error::custom),
    }
}

fn parse_size(s: &str) -> Result<usize, String> {
    let s = s.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (num_part, unit_part) = s.split_at(split);
    let number: f64 = num_part
        .parse()
        .map_err(|e| format!("invalid size '{s}': {e}"))?;
    let multiplier = match unit_part.trim().to_lowercase().as_str() {
        "" | "b" => 1.0,
        "kb" | "kib" => 1024.0,
        "mb" | "mib" => 1024.0 * 1024.0,
        _ => return Err(format!("unknown size unit in '{s}'")),
    };
    Ok((number * multiplier) as usize)
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            interface: default_interface(),
            promiscuous: default_promiscuous(),
            snaplen: default_snaplen(),
            timeout_ms: default_timeout(),
            link_layer: LinkLayerMode::default(),
            frame_limit: None,
        }
    }
}
