use serde::{Deserialize, Serialize};

/// Scale or transform coefficient from configuration: either already numeric
/// or a symbol an external resolver maps to a number before display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coefficient {
    Number(f64),
    Symbol(String),
}

impl Coefficient {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Symbol(_) => None,
        }
    }

    /// Numeric value, with `fallback` standing in for unresolved symbols.
    pub fn resolve_or(&self, fallback: f64) -> f64 {
        self.as_number().unwrap_or(fallback)
    }
}

impl Default for Coefficient {
    fn default() -> Self {
        Self::Number(1.0)
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

fn identity_transform() -> Coefficient {
    Coefficient::Number(0.0)
}

/// One field chosen for plotting, as supplied by configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSelection {
    pub name: String,
    #[serde(default)]
    pub units: String,
    #[serde(default)]
    pub scale: Coefficient,
    #[serde(default = "identity_transform")]
    pub transform: Coefficient,
    #[serde(default)]
    pub format: String,
}

impl FieldSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            units: String::new(),
            scale: Coefficient::Number(1.0),
            transform: Coefficient::Number(0.0),
            format: String::new(),
        }
    }

    pub fn with_units(mut self, units: impl Into<String>) -> Self {
        self.units = units.into();
        self
    }

    pub fn with_scale(mut self, scale: impl Into<Coefficient>) -> Self {
        self.scale = scale.into();
        self
    }

    pub fn with_transform(mut self, transform: impl Into<Coefficient>) -> Self {
        self.transform = transform.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

/// Derived display range for one plotted field.
///
/// `min` and `max` are seeded at 0 and only widen toward observed extremes:
/// a field whose samples are all positive still reports `min = 0`. That is
/// long-standing display behavior, kept on purpose.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldRange {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub scale: f64,
    pub transform: f64,
    pub units: String,
    pub format: String,
}

impl FieldRange {
    /// Raw sample to display units.
    pub fn display_value(&self, raw: f64) -> f64 {
        raw * self.scale + self.transform
    }
}
