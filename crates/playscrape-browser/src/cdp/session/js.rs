//! JavaScript execution operations for CDP page session.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::cdp::error::CdpError;
use crate::cdp::protocol::ExceptionDetails;

use super::core::PageSession;

impl PageSession {
    /// Evaluate JavaScript expression and return its value.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        if let Some(exception) = result.get("exceptionDetails") {
            let details: ExceptionDetails = serde_json::from_value(exception.clone())?;
            return Err(CdpError::Script(details.message()));
        }

        Ok(result["result"]["value"].clone())
    }

    /// Evaluate JavaScript and deserialize the returned value.
    pub async fn evaluate_as<T: DeserializeOwned>(&self, expression: &str) -> Result<T, CdpError> {
        let value = self.evaluate(expression).await?;
        serde_json::from_value(value).map_err(|e| CdpError::InvalidResponse(e.to_string()))
    }
}

/// Quote `s` as a JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    // JSON string syntax is a subset of JavaScript string syntax.
    Value::String(s.to_string()).to_string()
}
