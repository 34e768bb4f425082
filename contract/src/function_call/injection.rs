use crate::*;

/// Split a dotted field path into its segments. Empty paths or paths with empty segments
/// (`a..b`, `.a`, `a.`) are rejected.
pub fn split_field_path(path: &str) -> Result<Vec<&str>, ClaimError> {
    if path.is_empty() {
        return Err(invalid_config!("field path cannot be empty"));
    }

    let segments: Vec<&str> = path.split(FIELD_PATH_SEPARATOR).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(invalid_config!("field path {} has an empty segment", path));
    }
    Ok(segments)
}

/// Write `value` at the dotted `path` inside `args`, overwriting whatever was there.
///
/// Intermediate objects that don't exist (or are `null`) are created. If an intermediate value
/// exists and is anything other than an object, the write fails instead of being skipped.
pub fn insert_at_path(args: &mut Value, path: &str, value: Value) -> Result<(), ClaimError> {
    let segments = split_field_path(path).map_err(|_| malformed_args!("invalid field path {}", path))?;
    let (leaf, parents) = segments
        .split_last()
        .ok_or_else(|| malformed_args!("invalid field path {}", path))?;

    let mut cursor = args;
    for (depth, segment) in parents.iter().enumerate() {
        cursor = match cursor {
            Value::Object(map) => {
                let entry = map.entry(segment.to_string()).or_insert(Value::Null);
                if entry.is_null() {
                    *entry = Value::Object(Map::new());
                }
                entry
            }
            other => {
                return Err(malformed_args!(
                    "cannot write {}: {} is a {} and not an object",
                    path,
                    if depth == 0 { "the args".to_string() } else { parents[..depth].join(".") },
                    json_type_name(other)
                ))
            }
        };
    }

    match cursor {
        Value::Object(map) => {
            map.insert(leaf.to_string(), value);
            Ok(())
        }
        other => Err(malformed_args!(
            "cannot write {}: {} is a {} and not an object",
            path,
            if parents.is_empty() { "the args".to_string() } else { parents.join(".") },
            json_type_name(other)
        )),
    }
}

fn json_type_name(value: &Value) -> &'static str {
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

    #[test]
    fn overwrites_existing_leaf() {
        let mut args = json!({"proposal": {"kind": {"member_id": "maliciousactor", "role": "council"}}});
        insert_at_path(&mut args, "proposal.kind.member_id", json!("member1")).unwrap();
        assert_eq!(
            args,
            json!({"proposal": {"kind": {"member_id": "member1", "role": "council"}}})
        );
    }

    #[test]
    fn creates_missing_and_null_parents() {
        let mut args = json!({"a": null});
        insert_at_path(&mut args, "a.b.c", json!("x")).unwrap();
        insert_at_path(&mut args, "d", json!("y")).unwrap();
        assert_eq!(args, json!({"a": {"b": {"c": "x"}}, "d": "y"}));
    }

    #[test]
    fn leaf_objects_are_replaced_entirely() {
        // A spoofed object sitting where the identity goes is discarded
        let mut args = json!({"member_id": {"account": "maliciousactor"}});
        insert_at_path(&mut args, "member_id", json!("member1")).unwrap();
        assert_eq!(args, json!({"member_id": "member1"}));
    }

    #[test]
    fn non_object_parent_fails_closed() {
        let mut args = json!({"proposal": "maliciousactor"});
        let before = args.clone();
        let err = insert_at_path(&mut args, "proposal.kind.member_id", json!("member1")).unwrap_err();
        assert!(matches!(err, ClaimError::MalformedArgs(_)));
        assert_eq!(args, before);

        let mut args = json!({"proposal": {"kind": [1, 2]}});
        let err = insert_at_path(&mut args, "proposal.kind.member_id", json!("member1")).unwrap_err();
        assert!(matches!(err, ClaimError::MalformedArgs(_)));
    }

    #[test]
    fn root_must_be_an_object() {
        let mut args = json!(["member_id"]);
        let err = insert_at_path(&mut args, "member_id", json!("member1")).unwrap_err();
        assert!(matches!(err, ClaimError::MalformedArgs(_)));
    }

    #[test]
    fn bad_paths_are_rejected() {
        assert!(split_field_path("").is_err());
        assert!(split_field_path("a..b").is_err());
        assert!(split_field_path(".a").is_err());
        assert_eq!(split_field_path("a.b").unwrap(), vec!["a", "b"]);
    }
}
