//! Model Context Protocol server over stdio.
//!
//! Each line on stdin is one JSON-RPC 2.0 message and each response is
//! written to stdout as one line. Requests are handled on their own tasks,
//! so responses may come back out of order; clients match them by `id`.
//! Logging never goes to stdout in this mode.

pub mod tools;

use std::sync::Arc;

use serde_json::{Map, Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::constants::mcp::{INVALID_PARAMS, METHOD_NOT_FOUND, PROTOCOL_VERSION, SERVER_NAME};
use crate::data_fetcher::NhlClient;
use crate::error::AppError;

#[derive(Debug)]
struct RpcError {
    code: i64,
    message: String,
}

impl RpcError {
    fn invalid_params(message: impl Into<String>) -> Self {
        Self {
            code: INVALID_PARAMS,
            message: message.into(),
        }
    }
}

/// Dispatches MCP messages to tools backed by one shared [`NhlClient`].
pub struct McpServer {
    client: NhlClient,
}

impl McpServer {
    pub fn new(client: NhlClient) -> Self {
        Self { client }
    }

    /// Handles one decoded message. Notifications and messages without an
    /// `id` produce no response.
    pub async fn handle_message(&self, message: Value) -> Option<Value> {
        let id = message.get("id").cloned();
        let method = message
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or_default();
        debug!("MCP request: {}", method);

        match method {
            "initialize" => respond(id.as_ref(), initialize_response()),
            "notifications/initialized" => None,
            "ping" => respond(id.as_ref(), json!({})),
            "tools/list" => respond(
                id.as_ref(),
                json!({ "tools": tools::tool_definitions(), "nextCursor": null }),
            ),
            "tools/call" => match self.call_tool(message.get("params")).await {
                Ok(result) => respond(id.as_ref(), result),
                Err(err) => respond_error(id.as_ref(), err.code, err.message),
            },
            _ => respond_error(
                id.as_ref(),
                METHOD_NOT_FOUND,
                format!("Method not found: {method}"),
            ),
        }
    }

    async fn call_tool(&self, params: Option<&Value>) -> Result<Value, RpcError> {
        let params = params
            .and_then(Value::as_object)
            .ok_or_else(|| RpcError::invalid_params("tools/call params must be an object"))?;
        let name = params
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| RpcError::invalid_params("tools/call requires a tool name"))?;

        let empty = Map::new();
        let arguments = match params.get("arguments") {
            None | Some(Value::Null) => &empty,
            Some(Value::Object(arguments)) => arguments,
            Some(_) => return Err(RpcError::invalid_params("tool arguments must be an object")),
        };

        match tools::call_tool(&self.client, name, arguments).await {
            Some(result) => Ok(tool_result_to_mcp(result)),
            None => Err(RpcError::invalid_params(format!("Unknown tool: {name}"))),
        }
    }
}

fn tool_result_to_mcp(result: Result<String, AppError>) -> Value {
    let (text, is_error) = match result {
        Ok(text) => (text, false),
        Err(e) => {
            warn!("Tool call failed: {}", e);
            (e.to_string(), true)
        }
    };
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}

fn initialize_response() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": {},
        }
    })
}

fn respond(id: Option<&Value>, result: Value) -> Option<Value> {
    id.map(|id| json!({ "jsonrpc": "2.0", "id": id, "result": result }))
}

fn respond_error(id: Option<&Value>, code: i64, message: String) -> Option<Value> {
    id.map(|id| {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": { "code": code, "message": message }
        })
    })
}

/// Serves MCP on stdin/stdout until stdin closes.
///
/// Lines that are not valid JSON are logged and skipped. Requests still in
/// flight when stdin closes are allowed to finish.
pub async fn run_mcp_server(client: NhlClient) -> Result<(), AppError> {
    info!("Starting MCP server");
    let server = Arc::new(McpServer::new(client));
    let (tx, mut rx) = mpsc::unbounded_channel::<Value>();

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(response) = rx.recv().await {
            let mut payload = serde_json::to_string(&response)?;
            payload.push('\n');
            stdout.write_all(payload.as_bytes()).await?;
            stdout.flush().await?;
        }
        Ok::<(), AppError>(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let message: Value = match serde_json::from_str(trimmed) {
            Ok(message) => message,
            Err(e) => {
                warn!("Ignoring malformed MCP message: {}", e);
                continue;
            }
        };

        let server = Arc::clone(&server);
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(response) = server.handle_message(message).await {
                let _ = tx.send(response);
            }
        });
    }

    drop(tx);
    writer
        .await
        .map_err(|e| AppError::Io(std::io::Error::other(e)))??;
    info!("MCP server stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn offline_server() -> McpServer {
        McpServer::new(
            NhlClient::with_base_urls("http://127.0.0.1:9", "http://127.0.0.1:9").unwrap(),
        )
    }

    #[tokio::test]
    async fn test_initialize_reports_server_info() {
        let server = offline_server();
        let response = server
            .handle_message(json!({"jsonrpc": "2.0", "id": 1, "method": "initialize"}))
            .await
            .unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["result"]["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(response["result"]["serverInfo"]["name"], "NHL");
        assert_eq!(
            response["result"]["serverInfo"]["version"],
            env!("CARGO_PKG_VERSION")
        );
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let server = offline_server();
        let response = server
            .handle_message(json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
            .await;
        assert!(response.is_none());

        // A request without an id is a notification too.
        let response = server
            .handle_message(json!({"jsonrpc": "2.0", "method": "ping"}))
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_unknown_method() {
        let server = offline_server();
        let response = server
            .handle_message(json!({"jsonrpc": "2.0", "id": "a", "method": "resources/list"}))
            .await
            .unwrap();
        assert_eq!(response["id"], "a");
        assert_eq!(response["error"]["code"], METHOD_NOT_FOUND);
        assert_eq!(
            response["error"]["message"],
            "Method not found: resources/list"
        );
    }

    #[tokio::test]
    async fn test_tools_list() {
        let server = offline_server();
        let response = server
            .handle_message(json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}))
            .await
            .unwrap();
        let tools = response["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 6);
        assert!(tools.iter().any(|tool| tool["name"] == "nhl-standings"));
        assert!(response["result"]["nextCursor"].is_null());
    }

    #[tokio::test]
    async fn test_malformed_tool_calls_are_invalid_params() {
        let server = offline_server();
        for params in [json!(null), json!({"arguments": {}}), json!({"name": "nhl-nope"})] {
            let response = server
                .handle_message(json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call", "params": params}))
                .await
                .unwrap();
            assert_eq!(response["error"]["code"], INVALID_PARAMS);
        }
    }

    #[tokio::test]
    async fn test_tool_failure_is_reported_in_result() {
        let server = offline_server();
        let response = server
            .handle_message(json!({
                "jsonrpc": "2.0", "id": 4, "method": "tools/call",
                "params": {"name": "nhl-roster", "arguments": {}}
            }))
            .await
            .unwrap();
        assert!(response.get("error").is_none());
        assert_eq!(response["result"]["isError"], true);
        assert!(
            response["result"]["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("team")
        );
    }

    #[tokio::test]
    async fn test_standings_tool_call() {
        let mock = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/standings/now"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "standings": [{"teamName": {"default": "Dallas Stars"},
                               "teamAbbrev": {"default": "DAL"}, "points": 60}]
            })))
            .mount(&mock)
            .await;
        let server = McpServer::new(NhlClient::with_base_urls(&mock.uri(), &mock.uri()).unwrap());

        let response = server
            .handle_message(json!({
                "jsonrpc": "2.0", "id": 5, "method": "tools/call",
                "params": {"name": "nhl-standings"}
            }))
            .await
            .unwrap();
        assert_eq!(response["result"]["isError"], false);
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        let standings: Value = serde_json::from_str(text).unwrap();
        assert_eq!(standings["standings"][0]["points"], 60);
    }
}
