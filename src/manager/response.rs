//! Manager response document.
//!
//! Mirrors the JSON returned by the manager's cache-zone endpoint:
//!
//! ```json
//! {
//!   "errCode": 0,
//!   "md5": "abc",
//!   "data": {
//!     "sortClusterName": "c1",
//!     "sortTaskId": "task1",
//!     "cacheZones": {
//!       "task1": {
//!         "zoneName": "z1",
//!         "serviceUrl": "pulsar://z1:6650",
//!         "authentication": "token",
//!         "zoneType": "PULSAR",
//!         "topics": [{ "topic": "t1" }]
//!       }
//!     }
//!   }
//! }
//! ```

use std::collections::HashMap;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// Top-level manager response.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManagerResponse {
    /// Status code driving classification.
    #[serde(rename = "errCode", alias = "code")]
    pub err_code: i32,

    /// Fingerprint of the configuration revision carried in `data`.
    #[serde(default)]
    pub md5: String,

    /// Topology payload; absent on error responses.
    #[serde(default)]
    pub data: Option<CacheZoneData>,
}

/// Payload of an updated response.
///
/// The manager wraps the zone mapping in a `cacheZones` object; the bare
/// mapping is accepted as well.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CacheZoneData {
    Wrapped(CacheZoneConfig),
    Bare(HashMap<String, CacheZone>),
}

impl<'de> Deserialize<'de> for CacheZoneData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Pick the envelope up front so a bad zone reports its own field error.
        let value = serde_json::Value::deserialize(deserializer)?;
        let result = if value.get("cacheZones").is_some() {
            CacheZoneConfig::deserialize(value).map(CacheZoneData::Wrapped)
        } else {
            HashMap::<String, CacheZone>::deserialize(value).map(CacheZoneData::Bare)
        };
        result.map_err(de::Error::custom)
    }
}

impl CacheZoneData {
    pub fn into_cache_zones(self) -> HashMap<String, CacheZone> {
        match self {
            CacheZoneData::Wrapped(config) => config.cache_zones,
            CacheZoneData::Bare(zones) => zones,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheZoneConfig {
    #[serde(default)]
    pub sort_cluster_name: Option<String>,
    #[serde(default)]
    pub sort_task_id: Option<String>,
    pub cache_zones: HashMap<String, CacheZone>,
}

/// One upstream zone and the topics a sort task reads from it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheZone {
    pub zone_name: String,
    pub service_url: String,
    #[serde(alias = "auth")]
    pub authentication: String,
    pub zone_type: String,
    pub topics: Vec<RawTopic>,
}

/// Raw topic descriptor inside a zone.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTopic {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_cnt: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_properties: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapped_payload() {
        let body = r#"{
            "errCode": 0,
            "md5": "abc",
            "result": true,
            "data": {
                "sortClusterName": "c1",
                "sortTaskId": "task1",
                "cacheZones": {
                    "task1": {
                        "zoneName": "z1",
                        "serviceUrl": "u1",
                        "authentication": "a1",
                        "zoneType": "PULSAR",
                        "topics": [{"topic": "t1", "partitionCnt": 4}]
                    }
                }
            }
        }"#;

        let response: ManagerResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.err_code, 0);
        assert_eq!(response.md5, "abc");

        let zones = response.data.unwrap().into_cache_zones();
        let zone = &zones["task1"];
        assert_eq!(zone.zone_name, "z1");
        assert_eq!(zone.topics[0].partition_cnt, Some(4));
    }

    #[test]
    fn test_parse_bare_payload_with_aliases() {
        let body = r#"{
            "code": 0,
            "md5": "abc",
            "data": {
                "task1": {
                    "zoneName": "z1",
                    "serviceUrl": "u1",
                    "auth": "a1",
                    "zoneType": "PULSAR",
                    "topics": [{"topic": "t1"}, {"topic": "t2"}]
                }
            }
        }"#;

        let response: ManagerResponse = serde_json::from_str(body).unwrap();
        let data = response.data.unwrap();
        assert!(matches!(data, CacheZoneData::Bare(_)));
        let zones = data.into_cache_zones();
        let zone = &zones["task1"];
        assert_eq!(zone.authentication, "a1");
        assert_eq!(zone.topics.len(), 2);
    }

    #[test]
    fn test_error_response_without_data() {
        let response: ManagerResponse =
            serde_json::from_str(r#"{"errCode": -101, "errMsg": "bad sortTaskId"}"#).unwrap();
        assert_eq!(response.err_code, -101);
        assert_eq!(response.md5, "");
        assert!(response.data.is_none());
    }

    #[test]
    fn test_missing_zone_field_names_the_field() {
        let body = r#"{"errCode": 0, "md5": "x", "data": {"cacheZones": {
            "task1": {"zoneName": "z1", "zoneType": "PULSAR", "authentication": "", "topics": []}
        }}}"#;
        let err = serde_json::from_str::<ManagerResponse>(body).unwrap_err();
        assert!(err.to_string().contains("missing field `serviceUrl`"), "{}", err);

        let bare = r#"{"errCode": 0, "data": {"task1": {"zoneName": "z1", "serviceUrl": "u1",
            "auth": "", "topics": [{"topic": "t1"}]}}}"#;
        let err = serde_json::from_str::<ManagerResponse>(bare).unwrap_err();
        assert!(err.to_string().contains("missing field `zoneType`"), "{}", err);
    }
}
