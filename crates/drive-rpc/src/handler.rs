//! JSON-RPC request handlers.

use crate::server::AppState;
use crate::wrapper::wrap_response;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use drive_core::{DriveError, EntryKind, NewEntry};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// JSON-RPC 2.0 request structure.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 error structure.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: Some(result),
            error: None,
            id,
        }
    }

    pub fn error(id: Option<Value>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// Main JSON-RPC handler.
pub async fn handle_rpc(
    State(state): State<Arc<AppState>>,
    Json(request): Json<JsonRpcRequest>,
) -> impl IntoResponse {
    let method = &request.method;
    let params = request.params.unwrap_or(Value::Object(Default::default()));
    let id = request.id.clone();

    debug!("RPC call: {}({:?})", method, params);

    if method == "health_check" {
        return (
            StatusCode::OK,
            Json(JsonRpcResponse::success(id, json!({"status": "ok"}))),
        );
    }

    match dispatch_method(&state, method, &params).await {
        Ok(value) => {
            let wrapped = wrap_response(method, value);
            (StatusCode::OK, Json(JsonRpcResponse::success(id, wrapped)))
        }
        Err(e) => {
            error!("RPC error for {}: {}", method, e);
            let code = e.to_rpc_error_code();
            (
                StatusCode::OK,
                Json(JsonRpcResponse::error(id, code, e.to_string())),
            )
        }
    }
}

// ============================================================================
// Parameter extraction helpers
// ============================================================================

/// Look up a parameter under its snake_case or camelCase name.
fn get_param<'a>(params: &'a Value, snake: &str, camel: &str) -> Option<&'a Value> {
    params.get(snake).or_else(|| params.get(camel))
}

fn missing(name: &str) -> DriveError {
    DriveError::InvalidParams {
        message: format!("Missing required parameter: {}", name),
    }
}

/// Extract a required string parameter or return an error.
fn require_str_param(params: &Value, snake: &str, camel: &str) -> drive_core::Result<String> {
    get_param(params, snake, camel)
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| missing(snake))
}

/// Extract a required non-negative index parameter.
fn require_index_param(params: &Value, snake: &str, camel: &str) -> drive_core::Result<usize> {
    let value = get_param(params, snake, camel).ok_or_else(|| missing(snake))?;
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| DriveError::InvalidParams {
            message: format!("{} must be a non-negative integer, got {}", snake, value),
        })
}

fn require_kind_param(params: &Value) -> drive_core::Result<EntryKind> {
    let kind = get_param(params, "kind", "type")
        .and_then(|v| v.as_str())
        .ok_or_else(|| missing("kind"))?;
    EntryKind::parse(kind).ok_or_else(|| DriveError::InvalidParams {
        message: format!("kind must be \"file\" or \"folder\", got {:?}", kind),
    })
}

fn require_entry_param(params: &Value) -> drive_core::Result<NewEntry> {
    let entry = params.get("entry").ok_or_else(|| missing("entry"))?;
    serde_json::from_value(entry.clone()).map_err(|e| DriveError::InvalidParams {
        message: format!("Invalid entry: {}", e),
    })
}

// ============================================================================
// Method dispatcher
// ============================================================================

/// Dispatch a method call to the registry.
pub(crate) async fn dispatch_method(
    state: &AppState,
    method: &str,
    params: &Value,
) -> drive_core::Result<Value> {
    match method {
        // ====================================================================
        // Lookups
        // ====================================================================
        "find" => {
            let id = require_str_param(params, "id", "id")?;
            let registry = state.registry.read().await;
            Ok(serde_json::to_value(registry.find(&id))?)
        }

        "get_objects" => {
            let directory_id = require_str_param(params, "directory_id", "directoryId")?;
            let registry = state.registry.read().await;
            Ok(serde_json::to_value(registry.objects(&directory_id)?)?)
        }

        "get_length" => {
            let registry = state.registry.read().await;
            Ok(json!(registry.len()))
        }

        // ====================================================================
        // Mutations
        // ====================================================================
        "add_file" => {
            let directory_id = require_str_param(params, "directory_id", "directoryId")?;
            let entry = require_entry_param(params)?;
            let mut registry = state.registry.write().await;
            Ok(serde_json::to_value(registry.add_file(&directory_id, entry)?)?)
        }

        "remove_file" => {
            let index = require_index_param(params, "directory_index", "directoryIndex")?;
            let entry_id = require_str_param(params, "entry_id", "entryId")?;
            let mut registry = state.registry.write().await;
            registry.remove_file_at(index, &entry_id)?;
            Ok(Value::Null)
        }

        "remove_folder" => {
            let index = require_index_param(params, "directory_index", "directoryIndex")?;
            let entry_id = require_str_param(params, "entry_id", "entryId")?;
            let mut registry = state.registry.write().await;
            registry.remove_folder_at(index, &entry_id)?;
            Ok(Value::Null)
        }

        "remove" => {
            let kind = require_kind_param(params)?;
            let entry_id = require_str_param(params, "entry_id", "entryId")?;
            let mut registry = state.registry.write().await;
            registry.remove(kind, &entry_id)?;
            Ok(Value::Null)
        }

        "create_folder" => {
            let index = require_index_param(params, "directory_index", "directoryIndex")?;
            let name = require_str_param(params, "name", "name")?;
            let mut registry = state.registry.write().await;
            Ok(serde_json::to_value(registry.create_folder_at(index, &name)?)?)
        }

        // ====================================================================
        // Unknown
        // ====================================================================
        _ => {
            warn!("Method not found: {}", method);
            Err(DriveError::MethodNotFound {
                method: method.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drive_core::DirectoryRegistry;

    fn state() -> AppState {
        AppState::new(DirectoryRegistry::seeded())
    }

    #[test]
    fn test_json_rpc_response_success() {
        let response = JsonRpcResponse::success(Some(json!(1)), json!({"data": "test"}));
        assert!(response.error.is_none());
        assert!(response.result.is_some());
    }

    #[test]
    fn test_json_rpc_response_error() {
        let response = JsonRpcResponse::error(Some(json!(1)), -32600, "Test error".into());
        assert!(response.error.is_some());
        assert!(response.result.is_none());
        assert_eq!(response.error.unwrap().code, -32600);
    }

    #[test]
    fn test_params_accept_camel_case() {
        let params = json!({"directoryIndex": 2, "entryId": "9"});
        assert_eq!(
            require_index_param(&params, "directory_index", "directoryIndex").unwrap(),
            2
        );
        assert_eq!(
            require_str_param(&params, "entry_id", "entryId").unwrap(),
            "9"
        );
    }

    #[test]
    fn test_negative_index_is_invalid() {
        let params = json!({"directory_index": -1});
        let err = require_index_param(&params, "directory_index", "directoryIndex").unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32602);
    }

    #[tokio::test]
    async fn test_find_falls_back_to_root() {
        let state = state();
        let value = dispatch_method(&state, "find", &json!({"id": "nope"}))
            .await
            .unwrap();
        assert_eq!(value["id"], "0");
        assert!(value.get("parentId").is_none());
    }

    #[tokio::test]
    async fn test_create_folder_then_length() {
        let state = state();
        let entry = dispatch_method(
            &state,
            "create_folder",
            &json!({"directoryIndex": 0, "name": "X"}),
        )
        .await
        .unwrap();
        assert_eq!(entry["size"], "0 KB");
        assert_eq!(entry["id"], "13");

        let length = dispatch_method(&state, "get_length", &json!({}))
            .await
            .unwrap();
        assert_eq!(length, json!(7));
    }

    #[tokio::test]
    async fn test_add_file_and_remove() {
        let state = state();
        let entry = dispatch_method(
            &state,
            "add_file",
            &json!({
                "directoryId": "1",
                "entry": {
                    "name": "a.txt",
                    "size": "1 KB",
                    "lastModified": "19/10/2026",
                    "type": "file"
                }
            }),
        )
        .await
        .unwrap();
        let id = entry["id"].as_str().unwrap().to_string();

        dispatch_method(&state, "remove", &json!({"kind": "file", "entryId": id}))
            .await
            .unwrap();

        let registry = state.registry.read().await;
        assert!(!registry.find("1").contains(EntryKind::File, &id));
    }

    #[tokio::test]
    async fn test_remove_kind_is_case_sensitive() {
        let state = state();
        let err = dispatch_method(&state, "remove", &json!({"kind": "FILE", "entry_id": "6"}))
            .await
            .unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32602);

        let registry = state.registry.read().await;
        assert!(registry.find("0").contains(EntryKind::File, "6"));
    }

    #[tokio::test]
    async fn test_remove_unknown_entry_is_not_found() {
        let state = state();
        let err = dispatch_method(&state, "remove", &json!({"kind": "folder", "entry_id": "6"}))
            .await
            .unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32002);
    }

    #[tokio::test]
    async fn test_remove_file_invalid_index() {
        let state = state();
        let err = dispatch_method(
            &state,
            "remove_file",
            &json!({"directory_index": 40, "entry_id": "6"}),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, DriveError::InvalidIndex { index: 40, .. }));
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let state = state();
        let err = dispatch_method(&state, "rename", &json!({}))
            .await
            .unwrap_err();
        assert_eq!(err.to_rpc_error_code(), -32601);
    }
}
