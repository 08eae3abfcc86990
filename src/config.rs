//! Configuration records exchanged with the device and with the editing panels.
//!
//! Extension modules persist their settings on the gateway in a *device
//! format* document, while the panels edit a slimmer *UI format* record. Both
//! shapes are plain values: they are cloned in and out of the module
//! converters and never shared.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::{
    fs,
    io::{self, Read},
    path::Path,
};

/// Configuration shape persisted to and read from the device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Free text description. Discarded when loading into the UI.
    #[serde(default)]
    pub description: String,
    /// Article (order) number of the module variant.
    pub mlfb: String,
}

/// Configuration shape used by the editing panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    pub mlfb: String,
}

impl DeviceConfig {
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).context("Failed to parse device configuration")
    }

    pub fn to_json(&self, compact: bool) -> Result<String> {
        render_json(self, compact)
    }
}

impl UiConfig {
    pub fn from_json(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str).context("Failed to parse UI configuration")
    }

    pub fn to_json(&self, compact: bool) -> Result<String> {
        render_json(self, compact)
    }
}

fn render_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let out = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(out)
}

/// Read a JSON document from `path`, or from stdin when `path` is `-`.
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read configuration from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?
    };

    serde_json::from_str(&content)
        .with_context(|| format!("Invalid configuration document {}", path.display()))
}
