use serde::{Deserialize, Serialize};

pub const CONSUMPTION_MONTHS: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connection {
    #[default]
    Monofasico,
    Bifasico,
    Trifasico,
}

impl Connection {
    pub fn all() -> [Connection; 3] {
        [Connection::Monofasico, Connection::Bifasico, Connection::Trifasico]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Connection::Monofasico => "monofasico",
            Connection::Bifasico => "bifasico",
            Connection::Trifasico => "trifasico",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Connection::Monofasico => "Monofásico",
            Connection::Bifasico => "Bifásico",
            Connection::Trifasico => "Trifásico",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "bifasico" => Connection::Bifasico,
            "trifasico" => Connection::Trifasico,
            _ => Connection::Monofasico,
        }
    }
}

/// `POST /fotovoltaico/calc-economy`. Money values travel as two-decimal strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomyRequest {
    pub last_bill_value: String,
    pub last_bill_consumption: i64,
    pub consumption_list: [i64; CONSUMPTION_MONTHS],
    pub kw_value: String,
    pub connection: Connection,
    pub user_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomyResult {
    pub average_consumption_kw: f64,
    pub average_bill_value: f64,
    pub public_lighting: f64,
    pub min_bill_value: f64,
    pub average_bill_economy: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EconomyResponse {
    pub payload: EconomyResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = EconomyRequest {
            last_bill_value: "280.00".into(),
            last_bill_consumption: 350,
            consumption_list: [300, 310, 320, 330, 340, 350],
            kw_value: "0.75".into(),
            connection: Connection::Trifasico,
            user_id: 4,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["lastBillValue"], "280.00");
        assert_eq!(json["consumptionList"][5], 350);
        assert_eq!(json["connection"], "trifasico");
        assert_eq!(json["userId"], 4);
    }

    #[test]
    fn test_response_payload() {
        let json = r#"{"payload": {"averageConsumptionKw": 325.5, "averageBillValue": 260.1,
            "publicLighting": 12.0, "minBillValue": 50.0, "averageBillEconomy": 210.1}}"#;
        let response: EconomyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.payload.average_bill_economy, 210.1);
    }
}
