//! Response wrapping for frontend compatibility.
//!
//! The drive components expect `{success: bool, ...data}` envelopes for list
//! and mutation calls, while `find` hands back the bare directory record.

use serde_json::{json, Value};

/// Wrap raw dispatcher results in the shape the front end expects.
pub fn wrap_response(method: &str, result: Value) -> Value {
    match method {
        "get_objects" => {
            json!({
                "success": true,
                "objects": if result.is_null() { json!([]) } else { result }
            })
        }

        "add_file" | "create_folder" => {
            json!({
                "success": true,
                "entry": result
            })
        }

        "remove" | "remove_file" | "remove_folder" => json!({"success": true}),

        "get_length" => {
            json!({
                "success": true,
                "length": result
            })
        }

        // find and anything else pass through
        _ => result,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_objects() {
        let wrapped = wrap_response("get_objects", Value::Null);
        assert_eq!(wrapped["success"], true);
        assert_eq!(wrapped["objects"], json!([]));
    }

    #[test]
    fn test_wrap_mutations() {
        assert_eq!(
            wrap_response("remove", Value::Null),
            json!({"success": true})
        );
        let wrapped = wrap_response("create_folder", json!({"id": "13"}));
        assert_eq!(wrapped["entry"]["id"], "13");
    }

    #[test]
    fn test_find_passes_through() {
        let record = json!({"id": "0", "folders": [], "files": []});
        assert_eq!(wrap_response("find", record.clone()), record);
    }
}
