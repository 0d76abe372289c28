use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::errors::{SessionError, SessionResult};

/// Catalog identifiers and display title for one movie.
///
/// Field order here is the canonical serialization order; absent fields are
/// omitted, so identical content always serializes to identical JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieIdentity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmdb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kinopoisk: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl MovieIdentity {
    /// Parse a host-supplied identity object, stripping every field outside
    /// the recognized set. Anything that is not a JSON object is rejected;
    /// an object with no usable fields is a valid (empty) identity.
    pub fn parse(data: &Value) -> SessionResult<Self> {
        let fields = data.as_object().ok_or_else(|| {
            SessionError::InvalidInput(format!("expected an object, got {}", type_name(data)))
        })?;

        Ok(Self {
            imdb: string_field(fields, "imdb"),
            tmdb: string_field(fields, "tmdb"),
            kinopoisk: string_field(fields, "kinopoisk"),
            title: string_field(fields, "title"),
        })
    }

    /// Canonical compact JSON form, the input to
    /// [`compute_key`](super::compute_key) and the value cached for reloads.
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Key/value pairs for the provider query, in canonical field order.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::new();
        if let Some(imdb) = &self.imdb {
            pairs.push(("imdb", imdb.as_str()));
        }
        if let Some(tmdb) = &self.tmdb {
            pairs.push(("tmdb", tmdb.as_str()));
        }
        if let Some(kinopoisk) = &self.kinopoisk {
            pairs.push(("kinopoisk", kinopoisk.as_str()));
        }
        if let Some(title) = &self.title {
            pairs.push(("title", title.as_str()));
        }
        pairs
    }

    /// First identifier field present, probed in fixed order; used as the
    /// analytics `id-type` prop.
    pub fn id_type(&self) -> Option<&'static str> {
        if self.imdb.is_some() {
            Some("imdb")
        } else if self.kinopoisk.is_some() {
            Some("kinopoisk")
        } else if self.tmdb.is_some() {
            Some("tmdb")
        } else {
            None
        }
    }
}

// Identifier values arrive free-form from the host; numbers are accepted
// and carried as their decimal string.
fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(value) => Some(value.clone()),
        Value::Number(value) => Some(value.to_string()),
        _ => None,
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strips_unrecognized_fields() {
        let identity = MovieIdentity::parse(&json!({
            "imdb": "tt0111161",
            "title": "The Shawshank Redemption",
            "season": 2,
            "__proto__": "junk"
        }))
        .unwrap();

        assert_eq!(identity.imdb.as_deref(), Some("tt0111161"));
        assert_eq!(identity.title.as_deref(), Some("The Shawshank Redemption"));
        assert_eq!(
            identity.canonical_json(),
            r#"{"imdb":"tt0111161","title":"The Shawshank Redemption"}"#
        );
    }

    #[test]
    fn rejects_non_object_input() {
        for input in [json!(null), json!("tt0111161"), json!([1, 2]), json!(7)] {
            let err = MovieIdentity::parse(&input).unwrap_err();
            assert!(matches!(err, SessionError::InvalidInput(_)));
        }
    }

    #[test]
    fn accepts_empty_identity() {
        let identity = MovieIdentity::parse(&json!({})).unwrap();
        assert_eq!(identity, MovieIdentity::default());
        assert!(identity.query_pairs().is_empty());
        assert_eq!(identity.canonical_json(), "{}");
    }

    #[test]
    fn coerces_numeric_identifiers() {
        let identity = MovieIdentity::parse(&json!({ "kinopoisk": 326 })).unwrap();
        assert_eq!(identity.kinopoisk.as_deref(), Some("326"));
    }

    #[test]
    fn canonical_order_is_fixed() {
        let identity = MovieIdentity::parse(&json!({
            "title": "T",
            "kinopoisk": "1",
            "tmdb": "2",
            "imdb": "3"
        }))
        .unwrap();
        assert_eq!(
            identity.canonical_json(),
            r#"{"imdb":"3","tmdb":"2","kinopoisk":"1","title":"T"}"#
        );
    }

    #[test]
    fn id_type_probes_in_fixed_order() {
        let identity = MovieIdentity {
            kinopoisk: Some("1".into()),
            tmdb: Some("2".into()),
            ..Default::default()
        };
        assert_eq!(identity.id_type(), Some("kinopoisk"));
        assert_eq!(MovieIdentity::default().id_type(), None);
    }
}
