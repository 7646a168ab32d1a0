use std::fmt;

use serde::{Serialize, Serializer};

/// A derived value that may have no samples to be computed from.
///
/// Serializes as a plain number, or as the string `"NA"` when unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Metric {
    Value(f64),
    #[default]
    NotAvailable,
}

impl Metric {
    pub fn value(self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::NotAvailable => None,
        }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Metric::Value(_))
    }

    /// Larger of two metrics, ignoring unavailable sides.
    pub fn max(self, other: Metric) -> Metric {
        match (self, other) {
            (Metric::Value(a), Metric::Value(b)) => Metric::Value(a.max(b)),
            (Metric::Value(a), Metric::NotAvailable) | (Metric::NotAvailable, Metric::Value(a)) => {
                Metric::Value(a)
            }
            (Metric::NotAvailable, Metric::NotAvailable) => Metric::NotAvailable,
        }
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Metric::NotAvailable, Metric::Value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => match f.precision() {
                Some(p) => write!(f, "{:.*}", p, v),
                None => write!(f, "{}", v),
            },
            Metric::NotAvailable => f.write_str("NA"),
        }
    }
}

impl Serialize for Metric {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Metric::Value(v) => serializer.serialize_f64(*v),
            Metric::NotAvailable => serializer.serialize_str("NA"),
        }
    }
}
