use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// `YYYY-MM-DD` length; anything past this is a time-of-day suffix.
const DATE_LEN: usize = 10;

/// On-disk shape of the `date` field. Older records wrapped the date in a
/// one-element list.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub(crate) enum PostDate {
    Plain(String),
    Legacy(Vec<String>),
}

/// One entry of the post database. Fields this tool does not know about
/// are carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub(crate) struct Post {
    pub date: PostDate,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,

    // deprecated, dropped by the sanitizer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Post {
    /// Resolves either date shape to a plain day-precision string.
    pub fn normalized_date(&self) -> Result<String> {
        let raw = match &self.date {
            PostDate::Plain(date) => date.as_str(),
            PostDate::Legacy(dates) => {
                dates
                    .first()
                    .map(String::as_str)
                    .ok_or_else(|| Error::MalformedDate {
                        title: self.title.clone(),
                    })?
            }
        };
        Ok(raw.chars().take(DATE_LEN).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(date: PostDate) -> Post {
        Post {
            date,
            title: "a post".to_string(),
            body: "/p/a".to_string(),
            tags: vec![],
            colors: None,
            extra: Map::new(),
        }
    }

    #[test]
    fn legacy_date_takes_first_element_truncated() {
        let p = post(PostDate::Legacy(vec![
            "2023-05-01T10:00:00Z".to_string(),
            "ignored".to_string(),
        ]));
        assert_eq!(p.normalized_date().unwrap(), "2023-05-01");
    }

    #[test]
    fn plain_date_is_truncated_to_day_precision() {
        let p = post(PostDate::Plain("2024-06-15T08:30:00+09:00".to_string()));
        assert_eq!(p.normalized_date().unwrap(), "2024-06-15");
    }

    #[test]
    fn short_plain_date_is_kept_as_is() {
        let p = post(PostDate::Plain("2024-06-15".to_string()));
        assert_eq!(p.normalized_date().unwrap(), "2024-06-15");
    }

    #[test]
    fn empty_legacy_date_is_rejected() {
        let p = post(PostDate::Legacy(vec![]));
        assert!(matches!(
            p.normalized_date(),
            Err(Error::MalformedDate { title }) if title == "a post"
        ));
    }

    #[test]
    fn both_date_shapes_deserialize() {
        let p: Post = serde_json::from_str(
            r#"{"date": ["2020-01-01"], "title": "a", "body": "/a", "tags": []}"#,
        )
        .unwrap();
        assert_eq!(p.date, PostDate::Legacy(vec!["2020-01-01".to_string()]));

        let p: Post = serde_json::from_str(
            r#"{"date": "2020-01-01", "title": "a", "body": "/a", "tags": []}"#,
        )
        .unwrap();
        assert_eq!(p.date, PostDate::Plain("2020-01-01".to_string()));
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let source = r#"{"date": "2020-01-01", "title": "a", "body": "/a", "tags": [], "draft": true}"#;
        let p: Post = serde_json::from_str(source).unwrap();
        let value: Value = serde_json::to_value(&p).unwrap();
        assert_eq!(value["draft"], Value::Bool(true));
    }
}
