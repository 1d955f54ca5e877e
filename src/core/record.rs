use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Declares a closed label enum with an `Other` fallback.
///
/// Imported data may carry labels outside the fixed lists; those survive as
/// `Other(raw)` so they can be diagnosed and exported again unchanged.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            /// Known variants in their fixed display order.
            pub fn known() -> impl Iterator<Item = Self> {
                [$(Self::$variant),+].into_iter()
            }

            #[must_use]
            pub fn parse(label: &str) -> Self {
                match label {
                    $($label => Self::$variant,)+
                    other => Self::Other(other.to_owned()),
                }
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $label,)+
                    Self::Other(raw) => raw.as_str(),
                }
            }

            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }

            /// Position in the fixed order; `None` for `Other`.
            #[must_use]
            pub fn ordinal(&self) -> Option<usize> {
                Self::known().position(|known| &known == self)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($label => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                match value {
                    $name::Other(raw) => raw,
                    known => known.as_str().to_owned(),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labeled_enum! {
    /// Business value driver plotted on the Y axis, top to bottom.
    ValueDriver {
        OpportunityMapping => "Opportunity Mapping",
        InsightGeneration => "Insight Generation",
        BrandAndGrowthStrategy => "Brand and Growth Strategy",
        IntegratedPlanning => "Integrated Planning",
        PlanImplementation => "Plan Implementation",
        InMarketOptimization => "In-Market Optimization",
        PerformanceIntelligence => "Performance Intelligence",
    }
}

labeled_enum! {
    /// Delivery stage, early to late.
    Lifecycle {
        Discovery => "Discovery",
        Pilot => "Pilot",
        Build => "Build",
        Launch => "Launch",
        Operate => "Operate",
    }
}

labeled_enum! {
    /// Delivery risk; drives bubble fill.
    Risk {
        OnTrack => "On Track",
        SomeRisk => "Some Risk",
        HighRisk => "High Risk",
        RiskUnknown => "Risk Unknown",
    }
}

labeled_enum! {
    /// Level of effort; drives the overlaid glyph.
    Effort {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

/// One initiative plotted as a bubble.
///
/// Field names follow the JSON exchange shape (`valueDriver`, optional `cost`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub name: String,
    pub capability: String,
    pub value_driver: ValueDriver,
    #[serde(deserialize_with = "deserialize_lenient_number")]
    pub benefits: f64,
    #[serde(
        default,
        deserialize_with = "deserialize_lenient_optional_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cost: Option<f64>,
    pub lifecycle: Lifecycle,
    pub risk: Risk,
    pub effort: Effort,
}

impl Record {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        capability: impl Into<String>,
        value_driver: ValueDriver,
        benefits: f64,
        lifecycle: Lifecycle,
        risk: Risk,
        effort: Effort,
    ) -> Self {
        Self {
            name: name.into(),
            capability: capability.into(),
            value_driver,
            benefits,
            cost: None,
            lifecycle,
            risk,
            effort,
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }
}

/// Coerces editor text into a number the way a form field would.
///
/// Blank input is `0`; anything unparsable (or non-finite) is `NaN`, which
/// record validation reports rather than rejects.
#[must_use]
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => f64::NAN,
    }
}

/// Numbers pass through, strings go through [`coerce_number`], anything
/// else (including `null`) is `NaN`.
fn lenient_number_from_value(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::String(text) => coerce_number(text),
        other => other.as_f64().unwrap_or(f64::NAN),
    }
}

fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(lenient_number_from_value(&value))
}

/// Only called when the key is present; an absent `cost` stays `None` via
/// `#[serde(default)]`. A present `null` is what a `NaN` cost exports as, so
/// it reads back as `Some(NaN)`.
fn deserialize_lenient_optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Some(lenient_number_from_value(&value)))
}
