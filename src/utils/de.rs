use serde::{de, Deserialize, Deserializer};

/// Deserializes a query flag. A bare or empty parameter means "not set";
/// otherwise `1`/`true` and `0`/`false` are accepted.
pub fn deserialize_flag<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    match value.trim() {
        "" => Ok(None),
        "1" | "true" => Ok(Some(true)),
        "0" | "false" => Ok(Some(false)),
        other => Err(de::Error::invalid_value(
            de::Unexpected::Str(other),
            &"one of `1`, `0`, `true`, `false` or nothing",
        )),
    }
}
