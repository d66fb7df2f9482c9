//! Quota data models.
#![allow(
    clippy::cast_possible_truncation,
    clippy::as_conversions,
    reason = "percentage label: f64 * 100.0 -> i64"
)]

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Parsed `models` map of a quota response, keyed by model identifier.
///
/// A `BTreeMap` keeps iteration lexicographic, which is the order the
/// "Other Models" list is built in.
pub type QuotaPayload = BTreeMap<String, RawModelQuota>;

/// Body of a `fetchAvailableModels` response.
///
/// Decoding is lenient per record: a malformed model entry degrades on its
/// own and never fails the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct QuotaResponse {
    #[serde(default, deserialize_with = "lenient_models")]
    pub models: BTreeMap<String, ModelInfo>,
}

/// One model record on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    #[serde(rename = "quotaInfo", default, deserialize_with = "lenient_quota_info")]
    pub quota_info: Option<RawModelQuota>,
}

impl QuotaResponse {
    /// Flatten the wire format into a [`QuotaPayload`].
    ///
    /// A record without `quotaInfo` is kept with both fields absent so it
    /// still takes part in grouping.
    pub fn into_payload(self) -> QuotaPayload {
        self.models
            .into_iter()
            .map(|(id, info)| (id, info.quota_info.unwrap_or_default()))
            .collect()
    }
}

/// Raw per-model quota as reported by the API. Untrusted: any field may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawModelQuota {
    /// Non-numeric values decode as absent
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_fraction")]
    pub remaining_fraction: Option<f64>,
    /// Non-string values are kept as their JSON text: present, but unparseable
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_reset_time")]
    pub reset_time: Option<String>,
}

fn lenient_models<'de, D>(deserializer: D) -> Result<BTreeMap<String, ModelInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => return Ok(BTreeMap::new()),
    };
    Ok(raw
        .into_iter()
        .map(|(id, value)| (id, serde_json::from_value(value).unwrap_or_default()))
        .collect())
}

fn lenient_quota_info<'de, D>(deserializer: D) -> Result<Option<RawModelQuota>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn lenient_fraction<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    })
}

fn lenient_reset_time<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

impl RawModelQuota {
    pub fn new(remaining_fraction: Option<f64>, reset_time: Option<&str>) -> Self {
        Self { remaining_fraction, reset_time: reset_time.map(str::to_string) }
    }
}

/// Remaining quota for one model or group.
///
/// Legacy consumers encode this as a single number (`-1`, `-2`, or a
/// fraction); use [`Remaining::as_sentinel`] / [`Remaining::from_sentinel`]
/// at that boundary only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", content = "fraction", rename_all = "snake_case")]
pub enum Remaining {
    /// No quota constraint reported (no fraction, no reset time).
    Unlimited,
    /// Reset time reported without a fraction: the window is used up.
    Exceeded,
    /// Fraction of the window left. Passed through unclamped.
    Fraction(f64),
}

impl Remaining {
    pub const UNLIMITED_SENTINEL: f64 = -1.0;
    pub const EXCEEDED_SENTINEL: f64 = -2.0;

    pub fn as_sentinel(self) -> f64 {
        match self {
            Self::Unlimited => Self::UNLIMITED_SENTINEL,
            Self::Exceeded => Self::EXCEEDED_SENTINEL,
            Self::Fraction(f) => f,
        }
    }

    #[allow(clippy::float_cmp, reason = "sentinels are exact integral values")]
    pub fn from_sentinel(value: f64) -> Self {
        if value == Self::UNLIMITED_SENTINEL {
            Self::Unlimited
        } else if value == Self::EXCEEDED_SENTINEL {
            Self::Exceeded
        } else {
            Self::Fraction(value)
        }
    }

    /// Anything other than `Unlimited` takes part in worst-case reduction.
    pub fn is_defined(self) -> bool {
        !matches!(self, Self::Unlimited)
    }

    pub fn fraction(self) -> Option<f64> {
        match self {
            Self::Fraction(f) => Some(f),
            _ => None,
        }
    }

    /// Exactly full quota.
    #[allow(clippy::float_cmp, reason = "the API reports a literal 1 for a fresh window")]
    pub fn is_full(self) -> bool {
        self.fraction().is_some_and(|f| f == 1.0)
    }

    /// Strict "less quota left than `other`" over defined values.
    ///
    /// `Exceeded` ranks below every fraction; two `Exceeded` values are equal.
    /// `Unlimited` is never worse than anything.
    pub fn is_worse_than(self, other: Self) -> bool {
        match (self, other) {
            (Self::Fraction(a), Self::Fraction(b)) => a < b,
            (Self::Exceeded, Self::Fraction(_)) => true,
            (Self::Exceeded | Self::Fraction(_), Self::Unlimited) => true,
            _ => false,
        }
    }

    /// Short gauge text: `∞`, `LIMIT`, or a truncated percentage.
    pub fn gauge_label(self) -> String {
        match self {
            Self::Unlimited => "∞".to_string(),
            Self::Exceeded => "LIMIT".to_string(),
            Self::Fraction(f) => format!("{}%", (f * 100.0).trunc() as i64),
        }
    }
}

/// A model record after sentinel normalization and countdown formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedQuota {
    pub remaining: Remaining,
    /// `"<h>h <m>m"`, `"<m>m"`, or empty when there is no future reset.
    pub reset_countdown: String,
}

/// Semantic status of a displayed entry. Colors are the renderer's concern.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Active,
    Exceeded,
    Low,
    Healthy,
}

impl StatusCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Exceeded => "Exceeded",
            Self::Low => "Low",
            Self::Healthy => "Healthy",
        }
    }
}

impl std::fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
