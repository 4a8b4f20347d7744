use crate::form::{self, Draft, StudentDraft, Submitted};
use crate::ipc::error::{get_opt_str, ok, respond, HandlerErr};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "students": state.store.students() }))
}

fn students_create(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let draft = Draft::Student(StudentDraft {
        name: get_opt_str(params, "name")?,
        class: get_opt_str(params, "class")?,
    });
    let result = match form::submit(&mut state.store, &draft) {
        Some(Submitted::Student(student)) => json!({ "accepted": true, "student": student }),
        _ => json!({ "accepted": false }),
    };
    Ok(result)
}

fn handle_students_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, students_create(state, &req.params))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.create" => Some(handle_students_create(state, req)),
        _ => None,
    }
}
