use crate::form::{self, AttendanceDraft, Draft, Submitted};
use crate::ipc::error::{get_opt_str, get_present_str, ok, respond, HandlerErr};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_attendance_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "attendance": state.store.attendance() }))
}

fn handle_attendance_rows(state: &mut AppState, req: &Request) -> serde_json::Value {
    let rows = state.view.attendance_rows(&state.store);
    ok(&req.id, json!({ "rows": rows }))
}

fn attendance_create(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let mut draft = Draft::Attendance(AttendanceDraft {
        student_id: String::new(),
        subject_id: String::new(),
        date: String::new(),
        status: String::new(),
    });
    for field in ["studentId", "subjectId", "date", "status"] {
        draft.set_field(field, &get_opt_str(params, field)?)?;
    }
    let result = match form::submit(&mut state.store, &draft) {
        Some(Submitted::Attendance(att)) => json!({ "accepted": true, "attendance": att }),
        _ => json!({ "accepted": false }),
    };
    Ok(result)
}

fn handle_attendance_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, attendance_create(state, &req.params))
}

/// Resolves whichever of `studentId` / `subjectId` is present.
fn lookup_names(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let student_id = get_present_str(params, "studentId")?;
    let subject_id = get_present_str(params, "subjectId")?;
    if student_id.is_none() && subject_id.is_none() {
        return Err(HandlerErr::bad_params("missing studentId or subjectId"));
    }
    let (students, subjects) = state.view.lookup().indexes(&state.store);
    let mut result = json!({});
    if let Some(id) = student_id {
        result["studentName"] = json!(students.name_or_fallback(&id));
    }
    if let Some(id) = subject_id {
        result["subjectName"] = json!(subjects.name_or_fallback(&id));
    }
    Ok(result)
}

fn handle_lookup_names(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, lookup_names(state, &req.params))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "attendance.list" => Some(handle_attendance_list(state, req)),
        "attendance.create" => Some(handle_attendance_create(state, req)),
        "attendance.rows" => Some(handle_attendance_rows(state, req)),
        "lookup.names" => Some(handle_lookup_names(state, req)),
        _ => None,
    }
}
