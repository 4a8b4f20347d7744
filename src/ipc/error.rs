use serde::Serialize;
use serde_json::json;

use crate::model::ModelError;

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
}

/// One response line. Exactly one of `result` / `error` is set.
#[derive(Debug, Serialize)]
struct Reply<'a> {
    id: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody<'a>>,
}

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!(Reply {
        id,
        ok: true,
        result: Some(result),
        error: None,
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    json!(Reply {
        id,
        ok: false,
        result: None,
        error: Some(ErrorBody {
            code,
            message: message.into(),
            details,
        }),
    })
}

/// Reply for a line that could not be parsed into a request, so has no id.
pub fn bad_json(message: impl Into<String>) -> serde_json::Value {
    json!({
        "ok": false,
        "error": {
            "code": "bad_json",
            "message": message.into(),
        },
    })
}

#[derive(Debug)]
pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn bad_params(message: impl Into<String>) -> Self {
        Self {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

impl From<ModelError> for HandlerErr {
    fn from(e: ModelError) -> Self {
        let details = match &e {
            ModelError::UnknownStatus(_) => {
                Some(json!({ "allowed": ["Hadir", "Sakit", "Izin", "Alpha"] }))
            }
            ModelError::UnknownPage(_) => {
                Some(json!({ "allowed": ["Data Siswa", "Mata Pelajaran", "Absensi"] }))
            }
            _ => None,
        };
        Self {
            code: "bad_params",
            message: e.to_string(),
            details,
        }
    }
}

/// Absent or null reads as an empty value, which the form gate then refuses.
pub fn get_opt_str(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    match params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(String::new()),
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(HandlerErr::bad_params(format!("{} must be a string", key))),
    }
}

/// Absent or null is `None`; any other non-string is refused.
pub fn get_present_str(
    params: &serde_json::Value,
    key: &str,
) -> Result<Option<String>, HandlerErr> {
    match params.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(_) => get_opt_str(params, key).map(Some),
    }
}

pub fn get_required_str(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))
}

pub fn respond(id: &str, result: Result<serde_json::Value, HandlerErr>) -> serde_json::Value {
    match result {
        Ok(v) => ok(id, v),
        Err(e) => e.response(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_carry_either_result_or_error() {
        assert_eq!(
            ok("7", json!({ "accepted": true })),
            json!({ "id": "7", "ok": true, "result": { "accepted": true } })
        );
        assert_eq!(
            err("8", "bad_params", "missing page", None),
            json!({
                "id": "8",
                "ok": false,
                "error": { "code": "bad_params", "message": "missing page" }
            })
        );
        let with_details = err("9", "bad_params", "x", Some(json!({ "allowed": [] })));
        assert_eq!(with_details["error"]["details"], json!({ "allowed": [] }));
        assert!(with_details.get("result").is_none());
    }

    #[test]
    fn present_str_distinguishes_absent_from_mistyped() {
        let params = json!({ "studentId": "S001", "subjectId": 3, "date": null });
        assert_eq!(
            get_present_str(&params, "studentId").unwrap(),
            Some("S001".to_string())
        );
        assert_eq!(get_present_str(&params, "date").unwrap(), None);
        assert_eq!(get_present_str(&params, "status").unwrap(), None);
        let e = get_present_str(&params, "subjectId").unwrap_err();
        assert_eq!(e.message, "subjectId must be a string");
    }
}
