use serde_json::Value;

/// Walk `path` one key at a time and return the value at the end.
/// Returns `None` as soon as a key is missing or an intermediate value is not an object.
/// An empty path yields `v` itself.
pub fn get_dict_val<'a>(v: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(v, |cur, key| cur.as_object()?.get(*key))
}

/// Owned variant of [`get_dict_val`], handy when building records.
pub fn get_dict_val_owned(v: &Value, path: &[&str]) -> Option<Value> {
    get_dict_val(v, path).cloned()
}

/// Render a JSON value as a single CSV cell.
/// Null/absent -> empty, strings raw, everything else as compact JSON text.
pub fn value_to_cell(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Best-effort tweet/user id for diagnostics; accepts string or numeric ids.
pub fn id_string(v: Option<&Value>) -> String {
    match v {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "<unknown>".to_string(),
    }
}
