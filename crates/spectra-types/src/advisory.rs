// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — Advisories
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Non-fatal validation findings.
//!
//! Some code checks are soft: the computation proceeds with the supplied
//! value and the finding travels next to the result. Callers that want a
//! hard failure use [`Checked::into_strict`].

use std::fmt;

use serde::Serialize;

use crate::error::{SpectraError, SpectraResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Advisory {
    /// Importance factor is not one of the tabulated building classes.
    ImportanceFactorOutOfSet { value: f64, allowed: [f64; 4] },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::ImportanceFactorOutOfSet { value, allowed } => write!(
                f,
                "importance factor {value} is not one of {allowed:?}; using it as-is"
            ),
        }
    }
}

/// A successful value plus any advisories raised while producing it.
#[derive(Debug, Clone, Serialize)]
pub struct Checked<T> {
    pub value: T,
    pub advisories: Vec<Advisory>,
}

impl<T> Checked<T> {
    pub fn clean(value: T) -> Self {
        Checked {
            value,
            advisories: Vec::new(),
        }
    }

    pub fn with_advisories(value: T, advisories: Vec<Advisory>) -> Self {
        Checked { value, advisories }
    }

    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    /// Drop the advisories and keep the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Promote the first advisory, if any, to an error.
    pub fn into_strict(self) -> SpectraResult<T> {
        match self.advisories.into_iter().next() {
            Some(advisory) => Err(SpectraError::OutOfRangeAdvisory(advisory)),
            None => Ok(self.value),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            advisories: self.advisories,
        }
    }
}
