use serde::Deserialize;

/// The plant API transmits numeric columns either as JSON numbers or as
/// decimal strings (`"0.75"`, `"3"`).
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    pub(crate) fn into_f64(self) -> Result<f64, String> {
        match self {
            Self::Number(n) => Ok(n),
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("{s:?} is not a number: {e}")),
        }
    }
}
