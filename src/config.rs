//! Layered configuration for the diagnostic/print behaviour this crate
//! exposes. The feature surface here is small — there is no storage or
//! network layer to configure — but the layering mechanism itself follows
//! the rest of the engine regardless.
//!
//! Layering mirrors the engine crate's own `Config::load`: a base
//! `normaliser.toml`, an optional git-ignored `normaliser.local.toml`, then
//! environment variables, merged with [`figment`].
//!
//! ```toml
//! # normaliser.toml
//! [print]
//! elide_srcloc = true
//!
//! [normalise]
//! trace_unhandled = true
//! ```
//!
//! ```bash
//! DATALOG_CORE_PRINT__ELIDE_SRCLOC=false
//! ```

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

/// Top-level configuration for the core crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub print: PrintConfig,
    #[serde(default)]
    pub normalise: NormaliserConfig,
}

/// Controls how [`crate::node`]'s `print` surfaces diagnostic detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintConfig {
    /// Whether `print` output elides `SrcLoc`-derived debug annotations.
    /// `SrcLoc` never participates in structural equality, and by default
    /// it is likewise absent from the surface-syntax `print` form — set to
    /// `false` to append `@file:line:col` spans for debugging a pass's
    /// rewrites.
    #[serde(default = "default_elide_srcloc")]
    pub elide_srcloc: bool,
}

fn default_elide_srcloc() -> bool {
    true
}

impl Default for PrintConfig {
    fn default() -> Self {
        PrintConfig {
            elide_srcloc: default_elide_srcloc(),
        }
    }
}

/// Controls the clause normaliser's diagnostic behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormaliserConfig {
    /// Emit a `tracing::trace!` event every time `fully_normalised` flips to
    /// `false`, naming the clause and the offending literal/argument kind.
    /// Off by default since a large program with many unhandled constructs
    /// would otherwise be noisy.
    #[serde(default)]
    pub trace_unhandled: bool,
}

impl Default for NormaliserConfig {
    fn default() -> Self {
        NormaliserConfig {
            trace_unhandled: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            print: PrintConfig::default(),
            normalise: NormaliserConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration by layering `normaliser.toml`, then
    /// `normaliser.local.toml`, then `DATALOG_CORE_`-prefixed environment
    /// variables, on top of [`Config::default`]. Missing files are not an
    /// error — `figment`'s `Toml::file` provider is a no-op when the file is
    /// absent.
    pub fn load() -> CoreResult<Self> {
        Ok(Figment::from(figment::providers::Serialized::defaults(
            Config::default(),
        ))
        .merge(Toml::file("normaliser.toml"))
        .merge(Toml::file("normaliser.local.toml"))
        .merge(Env::prefixed("DATALOG_CORE_").split("__"))
        .extract()?)
    }

    /// Load configuration from one specific TOML file, still allowing
    /// environment overrides on top.
    pub fn from_file(path: &str) -> CoreResult<Self> {
        Ok(Figment::from(figment::providers::Serialized::defaults(
            Config::default(),
        ))
        .merge(Toml::file(path))
        .merge(Env::prefixed("DATALOG_CORE_").split("__"))
        .extract()?)
    }
}
