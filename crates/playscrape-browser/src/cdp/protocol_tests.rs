use super::*;

#[test]
fn test_cdp_request_serialize() {
    let req = CdpRequest {
        id: 1,
        method: "Page.navigate".to_string(),
        params: Some(serde_json::json!({"url": "https://example.com"})),
        session_id: Some("S1".to_string()),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["method"], "Page.navigate");
    assert_eq!(json["params"]["url"], "https://example.com");
    assert_eq!(json["sessionId"], "S1");
}

#[test]
fn test_cdp_request_omits_empty_fields() {
    let req = CdpRequest {
        id: 7,
        method: "Target.getTargets".to_string(),
        params: None,
        session_id: None,
    };
    let json = serde_json::to_string(&req).unwrap();
    assert_eq!(json, r#"{"id":7,"method":"Target.getTargets"}"#);
}

#[test]
fn test_cdp_response_deserialize() {
    let json = r#"{"id": 1, "result": {"frameId": "abc"}}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, Some(1));
    assert!(resp.result.is_some());
}

#[test]
fn test_cdp_event_deserialize() {
    let json = r#"{"method": "Page.loadEventFired", "params": {"timestamp": 1.5}, "sessionId": "S1"}"#;
    let resp: CdpResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.id, None);
    assert_eq!(resp.method.as_deref(), Some("Page.loadEventFired"));
    assert_eq!(resp.session_id.as_deref(), Some("S1"));
}

#[test]
fn test_page_info_deserialize() {
    let json = r#"{
        "id": "page123",
        "type": "page",
        "title": "Test",
        "url": "about:blank",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/page/page123"
    }"#;
    let info: PageInfo = serde_json::from_str(json).unwrap();
    assert_eq!(info.id, "page123");
    assert_eq!(info.page_type, "page");
}

#[test]
fn test_browser_version_deserialize() {
    let json = r#"{
        "Browser": "HeadlessChrome/126.0.0.0",
        "Protocol-Version": "1.3",
        "User-Agent": "Mozilla/5.0",
        "webSocketDebuggerUrl": "ws://localhost:9222/devtools/browser/abc"
    }"#;
    let version: BrowserVersion = serde_json::from_str(json).unwrap();
    assert_eq!(version.protocol_version, "1.3");
    assert!(version.web_socket_debugger_url.ends_with("/browser/abc"));
}

#[test]
fn test_exception_message_prefers_description() {
    let json = r#"{
        "exceptionId": 1,
        "text": "Uncaught",
        "lineNumber": 0,
        "columnNumber": 5,
        "exception": {"type": "object", "subtype": "error", "description": "TypeError: x is null"}
    }"#;
    let details: ExceptionDetails = serde_json::from_str(json).unwrap();
    assert_eq!(details.message(), "TypeError: x is null");

    let bare: ExceptionDetails = serde_json::from_str(r#"{"text": "SyntaxError"}"#).unwrap();
    assert_eq!(bare.message(), "SyntaxError");
}

#[test]
fn test_device_metrics_serialize() {
    let json = serde_json::to_value(DeviceMetrics::desktop(1280, 720)).unwrap();
    assert_eq!(json["width"], 1280);
    assert_eq!(json["deviceScaleFactor"], 1.0);
    assert_eq!(json["mobile"], false);
}
