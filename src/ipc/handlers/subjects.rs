use crate::form::{self, Draft, SubjectDraft, Submitted};
use crate::ipc::error::{get_opt_str, ok, respond, HandlerErr};
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_subjects_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, json!({ "subjects": state.store.subjects() }))
}

fn subjects_create(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let draft = Draft::Subject(SubjectDraft {
        name: get_opt_str(params, "name")?,
        teacher: get_opt_str(params, "teacher")?,
    });
    let result = match form::submit(&mut state.store, &draft) {
        Some(Submitted::Subject(subject)) => json!({ "accepted": true, "subject": subject }),
        _ => json!({ "accepted": false }),
    };
    Ok(result)
}

fn handle_subjects_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, subjects_create(state, &req.params))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "subjects.list" => Some(handle_subjects_list(state, req)),
        "subjects.create" => Some(handle_subjects_create(state, req)),
        _ => None,
    }
}
