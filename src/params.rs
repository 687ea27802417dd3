//! The fixed-width acoustic parameter vector consumed by the formant synthesizer.
//!
//! The synthesizer contract addresses every sound as 33 positional slots. Only
//! a handful are meaningful to the prosody rules; they get named accessors here
//! and the remaining slots pass through untouched.

use serde::{Deserialize, Serialize};

use crate::error::ProsodyError;

/// Number of slots in one parameter-set.
pub const PARAMETER_COUNT: usize = 33;

/// Fundamental frequency (pitch-bearing) slot.
pub const PITCH: usize = 0;
/// Primary formant amplitude slot.
pub const F1_AMPLITUDE: usize = 5;
/// Bypass (noise / breathiness) gain slot.
pub const BYPASS_GAIN: usize = 27;
/// Duration slot. Always the last one.
pub const DURATION: usize = 32;

/// One rendered unit of acoustic synthesis.
///
/// The width is fixed by construction: the only ways in are [`TryFrom`] on a
/// slice or `Vec`, which reject anything that is not exactly
/// [`PARAMETER_COUNT`] finite values with a positive duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ParameterVector {
    values: [f64; PARAMETER_COUNT],
}

impl ParameterVector {
    pub fn pitch(&self) -> f64 {
        self.values[PITCH]
    }

    pub fn set_pitch(&mut self, value: f64) {
        self.values[PITCH] = value;
    }

    pub fn f1_amplitude(&self) -> f64 {
        self.values[F1_AMPLITUDE]
    }

    pub fn set_f1_amplitude(&mut self, value: f64) {
        self.values[F1_AMPLITUDE] = value;
    }

    pub fn bypass_gain(&self) -> f64 {
        self.values[BYPASS_GAIN]
    }

    pub fn set_bypass_gain(&mut self, value: f64) {
        self.values[BYPASS_GAIN] = value;
    }

    pub fn duration(&self) -> f64 {
        self.values[DURATION]
    }

    pub fn set_duration(&mut self, value: f64) {
        self.values[DURATION] = value;
    }

    /// Apply a composed pitch factor.
    ///
    /// Factors scale the glottal period, so a factor above 1.0 lowers F0.
    pub fn apply_pitch_factor(&mut self, factor: f64) {
        self.values[PITCH] /= factor;
    }

    /// Blend two parameter-sets slot by slot, weighting `self` by `own_weight`
    /// and `other` by `other_weight`. Duration is left for the caller to set.
    pub fn blend(&self, other: &ParameterVector, own_weight: f64, other_weight: f64) -> Self {
        let total = own_weight + other_weight;
        let mut values = self.values;
        for (slot, (own, theirs)) in values[..DURATION]
            .iter_mut()
            .zip(self.values.iter().zip(other.values.iter()))
        {
            *slot = (own * own_weight + theirs * other_weight) / total;
        }
        Self { values }
    }

    /// Raw positional view for the synthesizer boundary.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.values.to_vec()
    }
}

impl TryFrom<&[f64]> for ParameterVector {
    type Error = ProsodyError;

    fn try_from(slots: &[f64]) -> Result<Self, Self::Error> {
        let values: [f64; PARAMETER_COUNT] = slots
            .try_into()
            .map_err(|_| ProsodyError::InvalidWidth(slots.len()))?;

        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ProsodyError::NonFinite { index, value });
        }
        if values[DURATION] <= 0.0 {
            return Err(ProsodyError::Table(format!(
                "duration must be positive, got {}",
                values[DURATION]
            )));
        }

        Ok(Self { values })
    }
}

impl TryFrom<Vec<f64>> for ParameterVector {
    type Error = ProsodyError;

    fn try_from(slots: Vec<f64>) -> Result<Self, Self::Error> {
        Self::try_from(slots.as_slice())
    }
}

impl From<ParameterVector> for Vec<f64> {
    fn from(vector: ParameterVector) -> Self {
        vector.values.to_vec()
    }
}
