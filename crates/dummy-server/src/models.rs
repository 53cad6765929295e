//! Wire types for the dummy data API

use serde::{Deserialize, Serialize};

/// A single row of dummy data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DummyData {
    pub id: i32,
    pub name: String,
}

/// One statement from `pg_stat_statements`, ranked by total planning time
#[derive(Debug, Clone, Serialize)]
pub struct SlowQuery {
    pub query: String,
    pub total_plan_time: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dummy_data_wire_format() {
        let row = DummyData {
            id: 7,
            name: "seven".to_string(),
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value, json!({"id": 7, "name": "seven"}));
    }

    #[test]
    fn test_dummy_data_parses_wire_json() {
        let row: DummyData = serde_json::from_str(r#"{"id":1,"name":"one"}"#).unwrap();
        assert_eq!(
            row,
            DummyData {
                id: 1,
                name: "one".to_string(),
            }
        );
    }

    #[test]
    fn test_slow_query_wire_format() {
        let q = SlowQuery {
            query: "SELECT 1".to_string(),
            total_plan_time: 12.5,
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value, json!({"query": "SELECT 1", "total_plan_time": 12.5}));
    }
}
