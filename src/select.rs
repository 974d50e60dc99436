//! Winner selection
//!
//! Pure: the only state touched is the injected RNG. A valid override
//! fully determines the result; without one the index is drawn uniformly.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SpinError;
use crate::options::OptionList;

/// A forced winner, as typed by an admin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Override {
    /// 1-based slice number
    Index(usize),
    /// Exact, case-sensitive label
    Label(String),
}

impl Override {
    /// Parse admin input. Whole numbers become 1-based indices, anything
    /// else is taken as a label. Blank input means no override.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(n) => Some(Override::Index(n)),
            Err(_) => Some(Override::Label(input.to_string())),
        }
    }
}

/// The result of one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub option: String,
    pub index: usize,
}

/// Resolve an override against the current list to a 0-based index.
///
/// A number that is not a valid slice number is retried as a label, so
/// numeric labels like "20" can still be forced.
pub fn resolve_override(options: &OptionList, forced: &Override) -> Result<usize, SpinError> {
    match forced {
        Override::Index(n) => {
            if *n >= 1 && *n <= options.len() {
                Ok(n - 1)
            } else {
                options
                    .position(&n.to_string())
                    .ok_or_else(|| SpinError::InvalidOverride {
                        reason: format!("index {} outside 1..={}", n, options.len()),
                    })
            }
        }
        Override::Label(label) => options.position(label).ok_or_else(|| SpinError::InvalidOverride {
            reason: format!("no option labelled {:?}", label),
        }),
    }
}

/// Draw a uniform index in [0, len)
pub fn random_index<R: Rng>(options: &OptionList, rng: &mut R) -> Result<usize, SpinError> {
    if options.is_empty() {
        return Err(SpinError::EmptyOptionSet);
    }
    Ok(rng.random_range(0..options.len()))
}

/// Pick a winner.
///
/// An override that does not resolve is logged and ignored: the spin
/// degrades to a normal random pick instead of failing.
pub fn select<R: Rng>(
    options: &OptionList,
    forced: Option<&Override>,
    rng: &mut R,
) -> Result<Selection, SpinError> {
    if options.is_empty() {
        return Err(SpinError::EmptyOptionSet);
    }

    let index = match forced.map(|f| resolve_override(options, f)) {
        Some(Ok(index)) => index,
        Some(Err(err)) => {
            log::warn!("{}; falling back to random selection", err);
            random_index(options, rng)?
        }
        None => random_index(options, rng)?,
    };

    let option = options.get(index).ok_or(SpinError::EmptyOptionSet)?.to_string();
    Ok(Selection { option, index })
}
