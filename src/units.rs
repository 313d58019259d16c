//! This module defines the quantity types used throughout the pipeline.

macro_rules! unit_struct {
    ($name:ident) => {
        /// Represents a type of quantity.
        #[derive(
            Debug, Clone, Copy, PartialEq, PartialOrd, derive_more::Add, derive_more::Sub,
        )]
        pub struct $name(pub f64);

        impl $name {
            /// Creates a new instance of the unit type from a f64 value.
            pub fn from(val: f64) -> Self {
                Self(val)
            }

            /// Returns the value of the unit type as a f64.
            pub fn value(self) -> f64 {
                self.0
            }

            /// Total ordering over the underlying f64 (for sorting).
            pub fn total_cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::iter::Sum for $name {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                Self(iter.map(|v| v.0).sum())
            }
        }
    };
}

// Capacity on the x-axis of the merit-order curve
unit_struct!(Megawatts);

// Capacity cost in base currency units (NTD); the source workbook stores
// some ranges in ten-thousand-unit denomination and they are rescaled on load
unit_struct!(Money);

impl Money {
    /// The cost in the ten-thousand-unit display denomination (萬元).
    pub fn display_value(self) -> f64 {
        self.0 / crate::layout::COST_DENOMINATION
    }
}
