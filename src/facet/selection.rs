use serde::{Deserialize, Serialize};

use super::domain::{
    domain_of, ClassDuration, ClassFormat, ClassMode, ClassSize, Facet, FacetError, FacetValue,
    PaymentModel, RESOLUTION_ORDER,
};

/// The user's current facet choices.
///
/// Always consistent: every field lies in its facet's domain. Fields are
/// private; the only ways to obtain a selection are [`Default`],
/// [`FacetSelection::try_new`] (validated), deserialization (validated), and
/// [`crate::facet::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFacetSelection")]
pub struct FacetSelection {
    mode: ClassMode,
    format: ClassFormat,
    size: ClassSize,
    duration: ClassDuration,
    payment_model: PaymentModel,
}

impl Default for FacetSelection {
    fn default() -> Self {
        Self {
            mode: ClassMode::Online,
            format: ClassFormat::Live,
            size: ClassSize::Group,
            duration: ClassDuration::Finite,
            payment_model: PaymentModel::OneTime,
        }
    }
}

impl FacetSelection {
    /// Build a selection from explicit values, rejecting combinations that
    /// break a facet dependency.
    pub fn try_new(
        mode: ClassMode,
        format: ClassFormat,
        size: ClassSize,
        duration: ClassDuration,
        payment_model: PaymentModel,
    ) -> Result<Self, FacetError> {
        let selection = Self {
            mode,
            format,
            size,
            duration,
            payment_model,
        };

        match selection.first_violation() {
            Some(value) => Err(FacetError::Inconsistent {
                facet: value.facet(),
                value: value.as_str().to_string(),
            }),
            None => Ok(selection),
        }
    }

    pub fn mode(&self) -> ClassMode {
        self.mode
    }

    pub fn format(&self) -> ClassFormat {
        self.format
    }

    pub fn size(&self) -> ClassSize {
        self.size
    }

    pub fn duration(&self) -> ClassDuration {
        self.duration
    }

    pub fn payment_model(&self) -> PaymentModel {
        self.payment_model
    }

    pub fn get(&self, facet: Facet) -> FacetValue {
        match facet {
            Facet::Mode => self.mode.into(),
            Facet::Format => self.format.into(),
            Facet::Size => self.size.into(),
            Facet::Duration => self.duration.into(),
            Facet::PaymentModel => self.payment_model.into(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.first_violation().is_none()
    }

    /// First value, in resolution order, that lies outside its domain.
    fn first_violation(&self) -> Option<FacetValue> {
        RESOLUTION_ORDER.iter().find_map(|facet| {
            let value = self.get(*facet);
            (!domain_of(*facet, self).contains(&value)).then_some(value)
        })
    }

    /// Raw assignment. May leave the selection inconsistent until the
    /// resolver reconciles it.
    pub(crate) fn assign(&mut self, value: FacetValue) {
        match value {
            FacetValue::Mode(v) => self.mode = v,
            FacetValue::Format(v) => self.format = v,
            FacetValue::Size(v) => self.size = v,
            FacetValue::Duration(v) => self.duration = v,
            FacetValue::PaymentModel(v) => self.payment_model = v,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFacetSelection {
    mode: ClassMode,
    format: ClassFormat,
    size: ClassSize,
    duration: ClassDuration,
    payment_model: PaymentModel,
}

impl TryFrom<RawFacetSelection> for FacetSelection {
    type Error = FacetError;

    fn try_from(raw: RawFacetSelection) -> Result<Self, Self::Error> {
        FacetSelection::try_new(
            raw.mode,
            raw.format,
            raw.size,
            raw.duration,
            raw.payment_model,
        )
    }
}
