use std::{iter::Sum, ops::Add};

use serde::{Deserialize, Serialize};

/// Declares a non-negative tally newtype with the arithmetic the extractor needs.
macro_rules! count_value_object {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn zero() -> Self {
                Self(0)
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }

            /// Promotes the tally for floating-point division.
            #[inline]
            #[allow(clippy::cast_precision_loss)]
            pub const fn as_f64(self) -> f64 {
                self.0 as f64
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::zero()
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Add<usize> for $name {
            type Output = Self;

            fn add(self, rhs: usize) -> Self::Output {
                Self(self.0 + rhs)
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(Self::zero(), |acc, count| acc + count)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

count_value_object!(
    /// Number of word tokens (numeric literals included).
    WordCount
);
count_value_object!(
    /// Number of sentence terminators, plus one for an unterminated tail.
    SentenceCount
);
count_value_object!(
    /// Number of non-whitespace characters.
    CharCount
);
count_value_object!(
    /// Heuristic syllable units summed over all words.
    SyllableCount
);
count_value_object!(
    /// Words with more than two syllable units.
    PolysyllableCount
);
