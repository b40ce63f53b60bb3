use crate::{FairdrawError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_ROWS: u32 = 10;
pub const DEFAULT_SEGMENTS: u32 = 8;
pub const DEFAULT_TOTAL_CELLS: u32 = 25;
pub const DEFAULT_NUM_MINES: u32 = 5;

/// Named per-round options shaping the outcome space.
///
/// Lookups are lenient: a missing, non-numeric, zero or negative value
/// yields the documented default instead of an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameParams {
    values: BTreeMap<String, Value>,
}

impl GameParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object such as `{"rows": 12}`.
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        match value {
            Value::Object(map) => Ok(Self {
                values: map.into_iter().collect(),
            }),
            other => Err(FairdrawError::invalid_params(format!(
                "expected a JSON object, got {}",
                other
            ))),
        }
    }

    /// Parse `key=value` pairs. Numeric values are stored as numbers.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut params = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                FairdrawError::invalid_params(format!("expected key=value, got '{}'", pair))
            })?;
            let value = match value.trim().parse::<i64>() {
                Ok(n) => Value::from(n),
                Err(_) => Value::from(value.trim()),
            };
            params.values.insert(key.trim().to_string(), value);
        }
        Ok(params)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Explicit entries of `self` win over `defaults`.
    pub fn merged_over(&self, defaults: &GameParams) -> GameParams {
        let mut values = defaults.values.clone();
        values.extend(self.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        GameParams { values }
    }

    pub fn rows(&self) -> u32 {
        self.positive_or(&["rows"], DEFAULT_ROWS)
    }

    pub fn segments(&self) -> u32 {
        self.positive_or(&["segments"], DEFAULT_SEGMENTS)
    }

    pub fn total_cells(&self) -> u32 {
        self.positive_or(&["totalCells", "total_cells"], DEFAULT_TOTAL_CELLS)
    }

    pub fn num_mines(&self) -> u32 {
        self.positive_or(&["numMines", "num_mines"], DEFAULT_NUM_MINES)
    }

    /// Safe cells uncovered before cashing out.
    pub fn revealed(&self) -> u32 {
        self.positive_or(&["revealed"], 0)
    }

    fn positive_or(&self, keys: &[&str], default: u32) -> u32 {
        let found = keys.iter().find_map(|key| self.values.get(*key));
        match found.and_then(positive_u32) {
            Some(n) => n,
            None => {
                if let Some(raw) = found {
                    tracing::debug!("Parameter {} = {} unusable, defaulting to {}", keys[0], raw, default);
                }
                default
            }
        }
    }
}

fn positive_u32(value: &Value) -> Option<u32> {
    let n = match value {
        Value::Number(n) => n.as_u64()?,
        Value::String(s) => s.trim().parse::<u64>().ok()?,
        _ => return None,
    };
    if n == 0 {
        return None;
    }
    u32::try_from(n).ok()
}
