//! Validated, caller-ordered sets of box sizes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::io::error::{Result, invalid_input};

/// Ordered sequence of box edge lengths, all at least 1
///
/// Order is preserved and duplicates are kept; each entry yields one sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct BoxSizeSet {
    sizes: Vec<usize>,
}

impl BoxSizeSet {
    /// Validate and wrap a list of box sizes
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the list is empty or contains a zero
    pub fn new(sizes: Vec<usize>) -> Result<Self> {
        if sizes.is_empty() {
            return Err(invalid_input(&"box size set must not be empty"));
        }
        if let Some(index) = sizes.iter().position(|&size| size == 0) {
            return Err(invalid_input(&format!(
                "box size at position {index} is 0, sizes must be at least 1"
            )));
        }
        Ok(Self { sizes })
    }

    /// Successive powers of two `2^min_exponent ..= 2^max_exponent`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the range is empty or a power overflows `usize`
    pub fn powers_of_two(min_exponent: u32, max_exponent: u32) -> Result<Self> {
        if min_exponent > max_exponent {
            return Err(invalid_input(&format!(
                "exponent range {min_exponent}..={max_exponent} is empty"
            )));
        }
        let sizes = (min_exponent..=max_exponent)
            .map(|exponent| {
                1usize.checked_shl(exponent).ok_or_else(|| {
                    invalid_input(&format!("2^{exponent} does not fit in usize"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(sizes)
    }

    /// Box sizes in caller order
    pub fn as_slice(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of box sizes
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether the set is empty, never true once validated
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Iterate sizes in caller order
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.sizes.iter()
    }
}

impl TryFrom<Vec<usize>> for BoxSizeSet {
    type Error = crate::io::error::FractalError;

    fn try_from(sizes: Vec<usize>) -> Result<Self> {
        Self::new(sizes)
    }
}

impl From<BoxSizeSet> for Vec<usize> {
    fn from(set: BoxSizeSet) -> Self {
        set.sizes
    }
}

impl<'a> IntoIterator for &'a BoxSizeSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.sizes.iter()
    }
}

impl fmt::Display for BoxSizeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .sizes
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "[{joined}]")
    }
}
