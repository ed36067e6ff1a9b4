use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::selection::FacetSelection;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacetError {
    #[error("Unknown facet: {0}")]
    UnknownFacet(String),

    #[error("Invalid value for facet {facet}: {value}")]
    InvalidFacetValue { facet: Facet, value: String },

    #[error("Facet {facet} cannot be {value} in this selection")]
    Inconsistent { facet: Facet, value: String },
}

/// Declares a closed facet value enum.
///
/// Variants are listed in declaration order, which is also the order used to
/// pick canonical defaults. Parsing is case-insensitive and accepts the listed
/// aliases.
macro_rules! facet_values {
    (
        $(#[$meta:meta])*
        $name:ident => $facet:ident {
            $( $variant:ident = $label:literal $( | $alias:literal )* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label $(, alias = $alias)*)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = FacetError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($label) $(|| s.eq_ignore_ascii_case($alias))* {
                        return Ok($name::$variant);
                    }
                )+
                Err(FacetError::InvalidFacetValue {
                    facet: Facet::$facet,
                    value: s.to_string(),
                })
            }
        }

        impl From<$name> for FacetValue {
            fn from(value: $name) -> Self {
                FacetValue::$facet(value)
            }
        }
    };
}

facet_values! {
    /// Where a class takes place.
    ClassMode => Mode {
        Online = "Online",
        Offline = "Offline",
    }
}

facet_values! {
    /// How a class is delivered. Live and Recorded are online formats,
    /// Inbound and Outbound are offline formats.
    ClassFormat => Format {
        Live = "Live",
        Recorded = "Recorded",
        Inbound = "Inbound",
        Outbound = "Outbound",
    }
}

facet_values! {
    ClassSize => Size {
        Group = "Group",
        OneOnOne = "OneOnOne" | "1-on-1" | "one_on_one",
    }
}

facet_values! {
    ClassDuration => Duration {
        Finite = "Finite",
        Infinite = "Infinite",
    }
}

facet_values! {
    PaymentModel => PaymentModel {
        OneTime = "OneTime" | "Fixed" | "one_time",
        Subscription = "Subscription",
    }
}

/// One filter dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Mode,
    Format,
    Size,
    Duration,
    PaymentModel,
}

impl Facet {
    pub const ALL: [Facet; 5] = [
        Facet::Mode,
        Facet::Format,
        Facet::Size,
        Facet::Duration,
        Facet::PaymentModel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Facet::Mode => "mode",
            Facet::Format => "format",
            Facet::Size => "size",
            Facet::Duration => "duration",
            Facet::PaymentModel => "paymentModel",
        }
    }

    /// The facet whose value constrains this facet's domain.
    pub fn upstream(self) -> Option<Facet> {
        match self {
            Facet::Format => Some(Facet::Mode),
            Facet::Size => Some(Facet::Format),
            Facet::PaymentModel => Some(Facet::Duration),
            Facet::Mode | Facet::Duration => None,
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facet {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "mode" | "type" => Ok(Facet::Mode),
            "format" => Ok(Facet::Format),
            "size" => Ok(Facet::Size),
            "duration" => Ok(Facet::Duration),
            "paymentmodel" | "payment" => Ok(Facet::PaymentModel),
            _ => Err(FacetError::UnknownFacet(s.to_string())),
        }
    }
}

/// A value of exactly one facet.
///
/// The facet is implied by the variant, so a value can never be assigned to
/// the wrong facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "facet", content = "value", rename_all = "camelCase")]
pub enum FacetValue {
    Mode(ClassMode),
    Format(ClassFormat),
    Size(ClassSize),
    Duration(ClassDuration),
    PaymentModel(PaymentModel),
}

impl FacetValue {
    pub fn facet(&self) -> Facet {
        match self {
            FacetValue::Mode(_) => Facet::Mode,
            FacetValue::Format(_) => Facet::Format,
            FacetValue::Size(_) => Facet::Size,
            FacetValue::Duration(_) => Facet::Duration,
            FacetValue::PaymentModel(_) => Facet::PaymentModel,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FacetValue::Mode(v) => v.as_str(),
            FacetValue::Format(v) => v.as_str(),
            FacetValue::Size(v) => v.as_str(),
            FacetValue::Duration(v) => v.as_str(),
            FacetValue::PaymentModel(v) => v.as_str(),
        }
    }

    /// Build a typed value from UI strings, e.g. `("format", "Outbound")`.
    pub fn parse(facet: &str, value: &str) -> Result<Self, FacetError> {
        let facet: Facet = facet.parse()?;
        let value = match facet {
            Facet::Mode => FacetValue::Mode(value.parse()?),
            Facet::Format => FacetValue::Format(value.parse()?),
            Facet::Size => FacetValue::Size(value.parse()?),
            Facet::Duration => FacetValue::Duration(value.parse()?),
            Facet::PaymentModel => FacetValue::PaymentModel(value.parse()?),
        };
        Ok(value)
    }

    /// Every declared value of `facet`, in declaration order.
    pub fn all_of(facet: Facet) -> Vec<FacetValue> {
        match facet {
            Facet::Mode => ClassMode::ALL.iter().copied().map(Into::into).collect(),
            Facet::Format => ClassFormat::ALL.iter().copied().map(Into::into).collect(),
            Facet::Size => ClassSize::ALL.iter().copied().map(Into::into).collect(),
            Facet::Duration => ClassDuration::ALL.iter().copied().map(Into::into).collect(),
            Facet::PaymentModel => PaymentModel::ALL.iter().copied().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for FacetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.facet(), self.as_str())
    }
}

/// The values currently valid for one facet, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetDomain {
    pub facet: Facet,
    pub values: Vec<FacetValue>,
}

impl FacetDomain {
    pub fn contains(&self, value: &FacetValue) -> bool {
        self.values.contains(value)
    }

    /// First value of the domain. Assigned when a facet's value goes stale.
    pub fn canonical_default(&self) -> Option<FacetValue> {
        self.values.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacetValue> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Valid values of `facet` given the rest of `selection`.
///
/// A facet's domain only depends on its upstream facet, never on its own
/// current value.
pub fn domain_of(facet: Facet, selection: &FacetSelection) -> FacetDomain {
    let values: Vec<FacetValue> = match facet {
        Facet::Format => {
            let allowed: &[ClassFormat] = match selection.mode() {
                ClassMode::Online => &[ClassFormat::Live, ClassFormat::Recorded],
                ClassMode::Offline => &[ClassFormat::Inbound, ClassFormat::Outbound],
            };
            allowed.iter().copied().map(Into::into).collect()
        }
        Facet::Size => match selection.format() {
            ClassFormat::Outbound => vec![ClassSize::OneOnOne.into()],
            _ => FacetValue::all_of(Facet::Size),
        },
        Facet::PaymentModel => match selection.duration() {
            ClassDuration::Infinite => vec![PaymentModel::Subscription.into()],
            ClassDuration::Finite => FacetValue::all_of(Facet::PaymentModel),
        },
        Facet::Mode | Facet::Duration => FacetValue::all_of(facet),
    };

    debug_assert!(!values.is_empty(), "domain of {facet} must not be empty");
    FacetDomain { facet, values }
}

/// Order in which stale facets are reconciled. Every facet appears after its
/// upstream facet.
pub const RESOLUTION_ORDER: [Facet; 5] = Facet::ALL;

/// True if every facet in `order` appears after its upstream facet and the
/// upstream chains contain no cycle.
pub fn is_topological(order: &[Facet]) -> bool {
    for (pos, facet) in order.iter().enumerate() {
        // Chains longer than the facet count must loop.
        let mut hops = 0;
        let mut cursor = facet.upstream();
        while let Some(up) = cursor {
            hops += 1;
            if up == *facet || hops > Facet::ALL.len() {
                return false;
            }
            cursor = up.upstream();
        }

        if let Some(up) = facet.upstream() {
            match order.iter().position(|f| *f == up) {
                Some(up_pos) if up_pos < pos => {}
                _ => return false,
            }
        }
    }
    true
}
