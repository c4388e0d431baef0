// ─────────────────────────────────────────────────────────────────────
// SCPN Seismic Spectra — Local Soil Classes
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! TBDY-2018 local soil classes and the Vs30 mapping (Table 16.1).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use spectra_types::error::{SpectraError, SpectraResult};

/// Lower Vs30 bound of class ZA [m/s].
const VS30_ZA_MIN: f64 = 1500.0;
/// Lower Vs30 bound of class ZB [m/s].
const VS30_ZB_MIN: f64 = 760.0;
/// Lower Vs30 bound of class ZC [m/s].
const VS30_ZC_MIN: f64 = 360.0;
/// Lower Vs30 bound of class ZD [m/s].
const VS30_ZD_MIN: f64 = 180.0;

/// Local soil class, hardest (ZA) to softest (ZE).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SoilClass {
    ZA,
    ZB,
    ZC,
    ZD,
    ZE,
}

impl SoilClass {
    pub const ALL: [SoilClass; 5] = [
        SoilClass::ZA,
        SoilClass::ZB,
        SoilClass::ZC,
        SoilClass::ZD,
        SoilClass::ZE,
    ];

    /// Map an average shear-wave velocity of the top 30 m [m/s] to a class.
    ///
    /// Bands are checked top-down and the first match wins. The ZE band is
    /// written as `<= 180` but 180 itself already falls in ZD.
    pub fn from_vs30(vs30: f64) -> SpectraResult<Self> {
        if vs30.is_nan() {
            return Err(SpectraError::InvalidCategoricalInput {
                kind: "Vs30 value",
                value: vs30.to_string(),
                expected: "a real velocity in m/s",
            });
        }
        let class = if vs30 >= VS30_ZA_MIN {
            SoilClass::ZA
        } else if vs30 >= VS30_ZB_MIN {
            SoilClass::ZB
        } else if vs30 >= VS30_ZC_MIN {
            SoilClass::ZC
        } else if vs30 >= VS30_ZD_MIN {
            SoilClass::ZD
        } else {
            SoilClass::ZE
        };
        Ok(class)
    }

    /// Row index into the coefficient tables.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            SoilClass::ZA => "ZA",
            SoilClass::ZB => "ZB",
            SoilClass::ZC => "ZC",
            SoilClass::ZD => "ZD",
            SoilClass::ZE => "ZE",
        }
    }
}

impl fmt::Display for SoilClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SoilClass {
    type Err = SpectraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SoilClass::ALL
            .into_iter()
            .find(|class| class.name() == s.trim())
            .ok_or_else(|| SpectraError::InvalidCategoricalInput {
                kind: "soil class",
                value: s.to_string(),
                expected: "ZA, ZB, ZC, ZD, ZE",
            })
    }
}
