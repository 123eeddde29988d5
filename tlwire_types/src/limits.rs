use anyhow::{anyhow, Result};
use std::env;
use std::str::FromStr;

pub const ENV_VAR_MAX_BYTES_LEN: &str = "TLWIRE_MAX_BYTES_LEN";
pub const ENV_VAR_MAX_VECTOR_LEN: &str = "TLWIRE_MAX_VECTOR_LEN";
pub const ENV_VAR_MAX_DEPTH: &str = "TLWIRE_MAX_DEPTH";

/// Well below the wire's own `2^24 - 1` bytes per field.
pub const DEFAULT_MAX_BYTES_LEN: usize = 1 << 20;
pub const DEFAULT_MAX_VECTOR_LEN: usize = 1 << 16;
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Upper bounds applied to lengths and counts declared by untrusted input.
/// A declared value above a bound is rejected before anything is allocated.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct DecodeLimits {
    pub max_bytes_len: usize,
    pub max_vector_len: usize,
    /// Counts nested objects, not vectors.
    pub max_depth: usize,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_bytes_len: DEFAULT_MAX_BYTES_LEN,
            max_vector_len: DEFAULT_MAX_VECTOR_LEN,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl DecodeLimits {
    /// Defaults, each overridable by its `TLWIRE_*` env var.
    pub fn from_env() -> Result<Self> {
        let dflt = Self::default();
        Ok(Self {
            max_bytes_len: env_or(ENV_VAR_MAX_BYTES_LEN, dflt.max_bytes_len)?,
            max_vector_len: env_or(ENV_VAR_MAX_VECTOR_LEN, dflt.max_vector_len)?,
            max_depth: env_or(ENV_VAR_MAX_DEPTH, dflt.max_depth)?,
        })
    }
}

fn env_or<T>(var: &str, dflt: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Err(env::VarError::NotPresent) => Ok(dflt),
        Err(e) => Err(anyhow!("{var}: {e}")),
        Ok(s) => s
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{var}={s:?} is not a valid limit: {e}")),
    }
}
