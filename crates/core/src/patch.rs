//! Tri-state fields for partial updates of nullable columns.

use serde::{Deserialize, Deserializer};

/// A nullable column in a partial update.
///
/// - `None`: key absent, column untouched
/// - `Some(None)`: explicit `null`, column cleared
/// - `Some(Some(v))`: column set to `v`
pub type Patch<T> = Option<Option<T>>;

/// Deserialize a [`Patch`] field so that an explicit `null` is kept as
/// `Some(None)`. Pair with `#[serde(default)]` for the absent case.
pub fn deserialize_patch<'de, D, T>(deserializer: D) -> Result<Patch<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_patch")]
        notes: Patch<String>,
    }

    fn parse(json: &str) -> Patch<String> {
        serde_json::from_str::<Body>(json).unwrap().notes
    }

    #[test]
    fn absent_key_is_untouched() {
        assert_eq!(parse("{}"), None);
    }

    #[test]
    fn explicit_null_clears() {
        assert_eq!(parse(r#"{"notes": null}"#), Some(None));
    }

    #[test]
    fn value_sets() {
        assert_eq!(parse(r#"{"notes": "n"}"#), Some(Some("n".to_string())));
    }
}
