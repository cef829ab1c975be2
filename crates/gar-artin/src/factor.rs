use std::fmt::{self, Display};

use gar_core::{ErrorInfo, Factor, GarError};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::permutation::{self, Table};
use crate::MAX_NUMBER_OF_STRANDS;

/// Validates a strand count against `2..=MAX_NUMBER_OF_STRANDS`.
pub fn check_strands(strands: usize) -> Result<(), GarError> {
    if (2..=MAX_NUMBER_OF_STRANDS).contains(&strands) {
        Ok(())
    } else {
        Err(GarError::Parameter(
            ErrorInfo::new("strand-count", "unsupported number of strands")
                .with_context("strands", strands.to_string())
                .with_context("max", MAX_NUMBER_OF_STRANDS.to_string()),
        ))
    }
}

/// A positive permutation braid: a braid in which every pair of strands
/// crosses at most once, positively. These are exactly the simple elements
/// of the classical Garside structure, `Δ` being the half twist.
///
/// The factor is stored as its permutation: entry `i` is the final position
/// of the strand starting at position `i`. Serialized as that table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ArtinFactor {
    table: Table,
}

impl ArtinFactor {
    /// The generator `σi`, crossing the strands at positions `i` and `i + 1`
    /// (counting from 1).
    pub fn atom(strands: usize, i: usize) -> Result<Self, GarError> {
        check_strands(strands)?;
        if i == 0 || i >= strands {
            return Err(GarError::Word(
                ErrorInfo::new("atom-out-of-range", "generator index out of range")
                    .with_context("index", i.to_string())
                    .with_context("strands", strands.to_string()),
            ));
        }
        let mut table = permutation::identity(strands);
        table.swap(i - 1, i);
        Ok(Self { table })
    }

    /// Builds a factor from a permutation of `0..n`.
    pub fn from_table(table: &[usize]) -> Result<Self, GarError> {
        check_strands(table.len())?;
        if !permutation::is_permutation(table) {
            return Err(GarError::Word(
                ErrorInfo::new("not-a-permutation", "table is not a permutation")
                    .with_context("table", format!("{table:?}"))
                    .with_hint("entry i is the final position of the strand starting at i"),
            ));
        }
        Ok(Self {
            table: table.iter().map(|&v| v as u8).collect(),
        })
    }

    /// Number of strands.
    pub fn strands(&self) -> usize {
        self.table.len()
    }

    /// Final position of every strand.
    pub fn table(&self) -> Vec<usize> {
        self.table.iter().map(|&v| v as usize).collect()
    }

    /// A word in the generators (indices from 1) spelling the factor.
    pub fn atom_word(&self) -> Vec<usize> {
        permutation::atom_word(&self.table)
    }

    /// Number of crossings, which is the length of any word for the factor.
    pub fn crossings(&self) -> usize {
        let n = self.table.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.table[i] > self.table[j])
            .count()
    }
}

impl TryFrom<Vec<usize>> for ArtinFactor {
    type Error = GarError;

    fn try_from(table: Vec<usize>) -> Result<Self, Self::Error> {
        Self::from_table(&table)
    }
}

impl From<ArtinFactor> for Vec<usize> {
    fn from(factor: ArtinFactor) -> Self {
        factor.table()
    }
}

impl Factor for ArtinFactor {
    type Parameter = usize;

    fn parameter(&self) -> usize {
        self.table.len()
    }

    fn identity(strands: usize) -> Self {
        Self {
            table: permutation::identity(strands),
        }
    }

    fn delta(strands: usize) -> Self {
        Self {
            table: permutation::half_twist(strands),
        }
    }

    fn atoms(strands: usize) -> Vec<Self> {
        (1..strands)
            .map(|i| {
                let mut table = permutation::identity(strands);
                table.swap(i - 1, i);
                Self { table }
            })
            .collect()
    }

    fn left_meet(&self, other: &Self) -> Self {
        Self {
            table: permutation::meet(&self.table, &other.table),
        }
    }

    fn right_meet(&self, other: &Self) -> Self {
        let meet = permutation::meet(
            &permutation::inverse(&self.table),
            &permutation::inverse(&other.table),
        );
        Self {
            table: permutation::inverse(&meet),
        }
    }

    fn left_complement(&self, other: &Self) -> Self {
        let inv = permutation::inverse(&self.table);
        Self {
            table: inv.iter().map(|&i| other.table[i as usize]).collect(),
        }
    }

    fn right_complement(&self, other: &Self) -> Self {
        let inv = permutation::inverse(&self.table);
        Self {
            table: other.table.iter().map(|&v| inv[v as usize]).collect(),
        }
    }

    fn product(&self, other: &Self) -> Self {
        Self {
            table: permutation::compose(&self.table, &other.table),
        }
    }

    fn delta_conjugate(&self, k: i32) -> Self {
        if k % 2 == 0 {
            return self.clone();
        }
        let n = self.table.len();
        Self {
            table: (0..n)
                .map(|i| (n - 1) as u8 - self.table[n - 1 - i])
                .collect(),
        }
    }

    fn random<R: Rng + ?Sized>(strands: usize, rng: &mut R) -> Self {
        let mut table = permutation::identity(strands);
        table.shuffle(rng);
        Self { table }
    }
}

impl Display for ArtinFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (idx, generator) in self.atom_word().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{generator}")?;
        }
        write!(f, ")")
    }
}
