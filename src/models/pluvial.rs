use serde::{Deserialize, Serialize};

/// Quarterly rainwater capture estimate. Field names follow the server spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluvialEconomy {
    #[serde(rename = "first_quarter_captaion")]
    pub first_quarter: f64,
    #[serde(rename = "second_quarter_captaion")]
    pub second_quarter: f64,
    #[serde(rename = "third_quarter_captaion")]
    pub third_quarter: f64,
    #[serde(rename = "fourth_quarter_captaion")]
    pub fourth_quarter: f64,
}

impl PluvialEconomy {
    pub fn quarters(&self) -> [(&'static str, f64); 4] {
        [
            ("Primeiro", self.first_quarter),
            ("Segundo", self.second_quarter),
            ("Terceiro", self.third_quarter),
            ("Quarto", self.fourth_quarter),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluvialEconomyResponse {
    pub pluvial_economy: PluvialEconomy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_envelope() {
        let json = r#"{"pluvialEconomy": {"first_quarter_captaion": 1200.5,
            "second_quarter_captaion": 800, "third_quarter_captaion": 300.25,
            "fourth_quarter_captaion": 950}}"#;
        let response: PluvialEconomyResponse = serde_json::from_str(json).unwrap();
        let quarters = response.pluvial_economy.quarters();
        assert_eq!(quarters[0], ("Primeiro", 1200.5));
        assert_eq!(quarters[2].1, 300.25);
    }
}
