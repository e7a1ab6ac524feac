use anyhow::{Result, bail};

/// A seed as given on the command line plus its resolved numeric value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedInfo {
    pub token: String,
    pub seed: u64,
}

impl SeedInfo {
    #[must_use]
    pub fn from_numeric(seed: u64) -> Self {
        Self {
            token: seed.to_string(),
            seed,
        }
    }
}

/// Resolve seed tokens: decimal, `0x`-hex, or a name folded to a number so
/// test runs can be labeled ("--seeds friday-smoke").
///
/// # Errors
///
/// Returns an error for empty tokens.
pub fn resolve_seed_inputs(tokens: &[String]) -> Result<Vec<SeedInfo>> {
    let mut seeds = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            bail!("empty seed token");
        }
        let seed = if let Some(hex) = token.strip_prefix("0x") {
            u64::from_str_radix(hex, 16)?
        } else if let Ok(dec) = token.parse::<u64>() {
            dec
        } else {
            fold_name(token)
        };
        seeds.push(SeedInfo {
            token: token.to_string(),
            seed,
        });
    }
    Ok(seeds)
}

// FNV-1a, good enough to spread names over the seed space deterministically.
fn fold_name(name: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in name.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
