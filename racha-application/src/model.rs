use racha_domain::model::default_weight;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the roster as entered or stored.
///
/// Rows may be incomplete (blank name, zero amount); only named rows take part
/// in a split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub paid: Decimal,
    // Rosters saved before weights existed carry no weight (or null).
    #[serde(default = "default_weight", deserialize_with = "weight_or_default")]
    pub weight: Decimal,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Payment key shown to whoever has to pay this person.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pix: String,
}

fn weight_or_default<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Decimal>::deserialize(deserializer)?.unwrap_or_else(default_weight))
}

impl RosterEntry {
    pub fn new(name: impl Into<String>, paid: Decimal) -> Self {
        Self {
            name: name.into(),
            paid,
            weight: default_weight(),
            description: String::new(),
            pix: String::new(),
        }
    }

    pub fn with_weight(mut self, weight: Decimal) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_pix(mut self, pix: impl Into<String>) -> Self {
        self.pix = pix.into();
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl Default for RosterEntry {
    fn default() -> Self {
        Self::new(String::new(), Decimal::ZERO)
    }
}

/// An expense produced by an extraction collaborator.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportRecord {
    pub name: String,
    pub paid: Decimal,
    #[serde(default)]
    pub description: String,
}

impl ImportRecord {
    pub fn new(name: impl Into<String>, paid: Decimal, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paid,
            description: description.into(),
        }
    }
}
