pub const DATE_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// Timestamps are written in DATE_FMT so the same string reads back from json and from ddb.
pub mod serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(time.format(DATE_FMT).to_string().as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&str_time, DATE_FMT).map_err(D::Error::custom)
    }
}

pub mod opt_serializer {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_FMT;

    pub fn serialize<S: Serializer>(time: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => serializer.serialize_str(t.format(DATE_FMT).to_string().as_str()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let str_time: Option<String> = Deserialize::deserialize(deserializer)?;
        str_time.map(|s| NaiveDateTime::parse_from_str(&s, DATE_FMT).map_err(D::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::utils::date::serializer")]
        at: NaiveDateTime,
        #[serde(with = "crate::utils::date::opt_serializer")]
        maybe: Option<NaiveDateTime>,
    }

    #[tokio::test]
    async fn test_should_write_timestamps_in_date_fmt() {
        let at = NaiveDate::from_ymd_opt(2022, 9, 24).and_then(|d| d.and_hms_micro_opt(4, 40, 35, 726029))
            .expect("valid date");
        let json = serde_json::to_string(&Stamped { at, maybe: None }).expect("serialize");
        assert_eq!(r#"{"at":"2022-09-24T04:40:35.726029","maybe":null}"#, json.as_str());
        let back: Stamped = serde_json::from_str(json.as_str()).expect("deserialize");
        assert_eq!(at, back.at);
        assert_eq!(None, back.maybe);
    }
}
