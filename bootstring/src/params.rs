//! Tuning constants and the validated parameter set of the algorithm.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// User-facing tuning knobs (RFC 3492 section 5).
///
/// `initial_n` defaults to the size of the basic alphabet, the first
/// non-basic index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    pub tmin: u32,
    pub tmax: u32,
    pub skew: u32,
    pub damp: u32,
    pub initial_bias: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_n: Option<u32>,
}

impl Tuning {
    /// The Punycode constants.
    pub const PUNYCODE: Tuning = Tuning {
        tmin: 1,
        tmax: 26,
        skew: 38,
        damp: 700,
        initial_bias: 72,
        initial_n: None,
    };

    /// Parse tuning from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| Error::config(format!("invalid tuning JSON: {}", e)))
    }

    /// Read tuning from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Reading tuning from {}...", path.display());
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::PUNYCODE
    }
}

/// The full parameter set the encoder and decoder run on.
///
/// Everything is expressed as integers: `delimiter` is a basic-alphabet
/// index and `basic_len` is the basic alphabet size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Params {
    pub base: u32,
    pub tmin: u32,
    pub tmax: u32,
    pub skew: u32,
    pub damp: u32,
    pub initial_bias: u32,
    pub initial_n: u32,
    pub delimiter: u32,
    pub basic_len: u32,
}

impl Params {
    /// Combine tuning with the derived alphabet quantities.
    pub fn new(tuning: &Tuning, base: u32, delimiter: u32, basic_len: u32) -> Result<Self> {
        let params = Params {
            base,
            tmin: tuning.tmin,
            tmax: tuning.tmax,
            skew: tuning.skew,
            damp: tuning.damp,
            initial_bias: tuning.initial_bias,
            initial_n: tuning.initial_n.unwrap_or(basic_len),
            delimiter,
            basic_len,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if self.delimiter >= self.basic_len {
            return Err(Error::config(
                "delimiter must be an index inside the basic alphabet",
            ));
        }
        // One basic character is the delimiter and cannot be a digit.
        if self.base <= 1 || self.base > self.basic_len - 1 {
            return Err(Error::config(format!(
                "base must be greater than 1 and at most {} (basic alphabet without the delimiter), got {}",
                self.basic_len - 1,
                self.base
            )));
        }
        if self.tmin > self.tmax {
            return Err(Error::config(format!(
                "tmin ({}) cannot be greater than tmax ({})",
                self.tmin, self.tmax
            )));
        }
        if self.tmax > self.base - 1 {
            return Err(Error::config(format!(
                "tmax must be at most base - 1 ({}), got {}",
                self.base - 1,
                self.tmax
            )));
        }
        // With base - tmin == 1 bias adaptation cannot shrink delta.
        if self.base - self.tmin < 2 {
            return Err(Error::config(format!(
                "tmin must be at most base - 2 ({}), got {}",
                self.base - 2,
                self.tmin
            )));
        }
        if self.skew < 1 {
            return Err(Error::config("skew must be at least 1"));
        }
        if self.damp < 2 {
            return Err(Error::config("damp must be at least 2"));
        }
        if self.initial_bias % self.base > self.base - self.tmin {
            return Err(Error::config(format!(
                "initial_bias must satisfy initial_bias % base <= base - tmin ({} % {} > {})",
                self.initial_bias,
                self.base,
                self.base - self.tmin
            )));
        }
        if self.initial_n < self.basic_len {
            return Err(Error::config(format!(
                "initial_n ({}) must not point into the basic alphabet (size {})",
                self.initial_n, self.basic_len
            )));
        }
        Ok(())
    }

    /// Digit threshold `t(k)` for position weight `k` under `bias`.
    pub fn threshold(&self, k: u64, bias: u64) -> u32 {
        if k <= bias + u64::from(self.tmin) {
            self.tmin
        } else if k >= bias + u64::from(self.tmax) {
            self.tmax
        } else {
            (k - bias) as u32
        }
    }
}
