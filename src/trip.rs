use serde::{Deserialize, Deserializer, Serialize};

/// One taxi trip as it appears in the input file and in every published message.
///
/// Every field is kept as text. Amounts, counts and timestamps are never parsed.
/// Fields missing from an input object, or set to `null`, decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trip {
    #[serde(rename = "dolocationid", deserialize_with = "null_as_empty")]
    pub drop_off_location_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub extra: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub fare_amount: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub improvement_surcharge: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub mta_tax: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub passenger_count: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub payment_type: String,
    #[serde(rename = "pulocationid", deserialize_with = "null_as_empty")]
    pub pick_up_location_id: String,
    #[serde(rename = "ratecodeid", deserialize_with = "null_as_empty")]
    pub rate_code_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tip_amount: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub tolls_amount: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub total_amount: String,
    #[serde(rename = "tpep_dropoff_datetime", deserialize_with = "null_as_empty")]
    pub drop_off_time: String,
    #[serde(rename = "tpep_pickup_datetime", deserialize_with = "null_as_empty")]
    pub pick_up_time: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub trip_distance: String,
    #[serde(rename = "vendorid", deserialize_with = "null_as_empty")]
    pub vendor_id: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trip() -> Trip {
        Trip {
            drop_off_location_id: "236".to_string(),
            extra: "0.5".to_string(),
            fare_amount: "9".to_string(),
            improvement_surcharge: "0.3".to_string(),
            mta_tax: "0.5".to_string(),
            passenger_count: "1".to_string(),
            payment_type: "1".to_string(),
            pick_up_location_id: "161".to_string(),
            rate_code_id: "1".to_string(),
            tip_amount: "2.05".to_string(),
            tolls_amount: "0".to_string(),
            total_amount: "12.35".to_string(),
            drop_off_time: "2018-01-01T00:23:14.000".to_string(),
            pick_up_time: "2018-01-01T00:13:47.000".to_string(),
            trip_distance: "1.30".to_string(),
            vendor_id: "2".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let value = serde_json::to_value(sample_trip()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "dolocationid",
                "extra",
                "fare_amount",
                "improvement_surcharge",
                "mta_tax",
                "passenger_count",
                "payment_type",
                "pulocationid",
                "ratecodeid",
                "tip_amount",
                "tolls_amount",
                "total_amount",
                "tpep_dropoff_datetime",
                "tpep_pickup_datetime",
                "trip_distance",
                "vendorid",
            ]
        );
        assert_eq!(object["dolocationid"], "236");
        assert_eq!(object["tpep_pickup_datetime"], "2018-01-01T00:13:47.000");
        assert!(object.values().all(|v| v.is_string()));
    }

    #[test]
    fn test_payload_decodes_to_same_trip() {
        let trip = sample_trip();
        let payload = serde_json::to_string(&trip).unwrap();
        let decoded: Trip = serde_json::from_str(&payload).unwrap();
        assert_eq!(decoded, trip);
    }

    #[test]
    fn test_missing_fields_decode_as_empty() {
        let trip: Trip = serde_json::from_str(r#"{"vendorid": "1"}"#).unwrap();
        assert_eq!(trip.vendor_id, "1");
        assert_eq!(trip.fare_amount, "");
        assert_eq!(trip.pick_up_time, "");
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let trip: Trip =
            serde_json::from_str(r#"{"vendorid": "1", "tip_amount": null}"#).unwrap();
        assert_eq!(trip.vendor_id, "1");
        assert_eq!(trip.tip_amount, "");
    }

    #[test]
    fn test_numeric_value_is_rejected() {
        let result: Result<Trip, _> = serde_json::from_str(r#"{"fare_amount": 9.5}"#);
        assert!(result.is_err());
    }
}
