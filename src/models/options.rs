use super::error::ResizeError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Which axis must change significantly for a resize to be accepted.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ResizeType {
    /// Either axis
    #[default]
    Both,
    Width,
    Height,
}

impl ResizeType {
    /// Lenient parse: anything that is not `width` or `height` is `Both`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "width" => Self::Width,
            "height" => Self::Height,
            _ => Self::Both,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Width => "width",
            Self::Height => "height",
        }
    }
}

impl std::fmt::Display for ResizeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ResizeType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self::parse(&s),
            _ => Self::Both,
        })
    }
}

/// Options controlling when a resize notification reaches the callback.
///
/// Every threshold is optional: `None` is the "not configured" state. When
/// deserialized from a loosely-typed record, falsy values (`0`, `false`,
/// `null`, `""`) map to `None` and unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ResizeOptions {
    /// Debounce window in milliseconds; `None` dispatches synchronously.
    #[serde(deserialize_with = "lenient_timeout")]
    pub timeout: Option<u32>,

    /// Minimum height delta (exclusive) for a change to count.
    #[serde(alias = "diffHeight", deserialize_with = "lenient_diff")]
    pub diff_height: Option<u32>,

    /// Minimum width delta (exclusive) for a change to count.
    #[serde(alias = "diffWidth", deserialize_with = "lenient_diff")]
    pub diff_width: Option<u32>,

    /// Height boundaries whose crossing makes a change count.
    #[serde(alias = "stepHeight", deserialize_with = "lenient_steps")]
    pub step_height: Option<Vec<i32>>,

    /// Width boundaries whose crossing makes a change count.
    #[serde(alias = "stepWidth", deserialize_with = "lenient_steps")]
    pub step_width: Option<Vec<i32>>,

    #[serde(rename = "type")]
    pub resize_type: ResizeType,

    /// Re-read dimensions on every notification, even with no thresholds.
    /// Set this when the host may fire resize notifications without an
    /// actual size change.
    #[serde(alias = "verifyDimensions", deserialize_with = "lenient_flag")]
    pub verify_dimensions: bool,
}

impl ResizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self, ResizeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Debounce dispatch by `millis`. `0` still defers to the next timer turn.
    pub fn with_timeout(mut self, millis: u32) -> Self {
        self.timeout = Some(millis);
        self
    }

    pub fn with_diff_height(mut self, diff: u32) -> Self {
        self.diff_height = Some(diff);
        self
    }

    pub fn with_diff_width(mut self, diff: u32) -> Self {
        self.diff_width = Some(diff);
        self
    }

    /// Empty step lists are treated as "no step rule".
    pub fn with_step_height(mut self, steps: impl Into<Vec<i32>>) -> Self {
        self.step_height = non_empty(steps.into());
        self
    }

    /// Empty step lists are treated as "no step rule".
    pub fn with_step_width(mut self, steps: impl Into<Vec<i32>>) -> Self {
        self.step_width = non_empty(steps.into());
        self
    }

    pub fn with_type(mut self, resize_type: ResizeType) -> Self {
        self.resize_type = resize_type;
        self
    }

    pub fn with_verify_dimensions(mut self, verify: bool) -> Self {
        self.verify_dimensions = verify;
        self
    }

    /// Whether a notification must be checked against the surface size
    /// rather than trusted as a real resize.
    pub fn requires_verification(&self) -> bool {
        self.verify_dimensions
            || self.diff_height.is_some()
            || self.diff_width.is_some()
            || self.step_height.is_some()
            || self.step_width.is_some()
            || self.resize_type != ResizeType::Both
    }
}

fn non_empty(steps: Vec<i32>) -> Option<Vec<i32>> {
    if steps.is_empty() { None } else { Some(steps) }
}

/// Numeric value of a loosely-typed field, the way a browser would coerce it.
fn numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

fn lenient_timeout<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    if value == Value::Bool(true) {
        return Ok(Some(0));
    }
    Ok(numeric(&value).and_then(|ms| {
        if ms == 0.0 {
            None
        } else {
            // Negative delays run on the next timer turn.
            Some(ms.max(0.0).trunc() as u32)
        }
    }))
}

fn lenient_diff<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(numeric(&value)
        .filter(|diff| *diff > 0.0)
        .map(|diff| diff.trunc() as u32))
}

fn lenient_steps<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<i32>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => non_empty(
            items
                .iter()
                .filter_map(numeric)
                .map(|step| step.trunc() as i32)
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        other => numeric(&other).is_some_and(|v| v != 0.0),
    })
}
