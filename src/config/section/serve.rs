//! `[serve]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! interface = "127.0.0.1"
//! port = 5288
//! watch = true               # poll facehash.toml and the names file
//! names_enabled = true
//! names_file = "names.toml"  # username -> display name map
//! ```

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Network interface to bind.
    pub interface: IpAddr,

    /// Port to listen on; the next few ports are tried when taken.
    pub port: u16,

    /// Poll config and names file for changes while serving.
    pub watch: bool,

    /// Allow display-name hash sources; off forces username seeds.
    pub names_enabled: bool,

    /// Optional TOML map of `username = "Display Name"` entries.
    pub names_file: Option<PathBuf>,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            interface: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 5288,
            watch: true,
            names_enabled: true,
            names_file: None,
        }
    }
}
