use crate::ipc::error::{get_opt_str, get_required_str, ok, respond, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::view::Page;
use serde_json::json;

fn snapshot(state: &AppState) -> serde_json::Value {
    json!(state.view.snapshot(&state.store))
}

fn modal(state: &AppState) -> serde_json::Value {
    json!(state.view.modal(&state.store))
}

fn handle_view_state(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(&req.id, snapshot(state))
}

fn nav_select(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let page: Page = get_required_str(params, "page")?.parse()?;
    state.view.select_page(page);
    Ok(snapshot(state))
}

fn handle_nav_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, nav_select(state, &req.params))
}

fn handle_sidebar_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.view.toggle_sidebar();
    ok(&req.id, snapshot(state))
}

fn handle_sidebar_close(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.view.close_sidebar();
    ok(&req.id, snapshot(state))
}

/// Table model for `params.page`, or the current page when omitted. Does not
/// navigate.
fn page_open(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let page = match params.get("page") {
        None | Some(serde_json::Value::Null) => state.view.page(),
        Some(_) => get_opt_str(params, "page")?.parse::<Page>()?,
    };
    let table = state.view.table(&state.store, page);
    Ok(json!(table))
}

fn handle_page_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, page_open(state, &req.params))
}

fn handle_modal_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.view.open_modal(&state.store);
    ok(&req.id, modal(state))
}

fn form_set_field(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let field = get_required_str(params, "field")?;
    let value = get_opt_str(params, "value")?;
    state.view.set_field(&field, &value)?;
    Ok(modal(state))
}

fn handle_form_set_field(state: &mut AppState, req: &Request) -> serde_json::Value {
    respond(&req.id, form_set_field(state, &req.params))
}

fn handle_form_submit(state: &mut AppState, req: &Request) -> serde_json::Value {
    let created = state.view.submit(&mut state.store);
    let mut result = json!({
        "accepted": created.is_some(),
        "modal": modal(state),
    });
    if let Some(record) = created {
        result["record"] = json!(record);
    }
    ok(&req.id, result)
}

fn handle_form_cancel(state: &mut AppState, req: &Request) -> serde_json::Value {
    state.view.cancel(&state.store);
    ok(&req.id, modal(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "view.state" => Some(handle_view_state(state, req)),
        "nav.select" => Some(handle_nav_select(state, req)),
        "sidebar.toggle" => Some(handle_sidebar_toggle(state, req)),
        "sidebar.close" => Some(handle_sidebar_close(state, req)),
        "page.open" => Some(handle_page_open(state, req)),
        "modal.open" => Some(handle_modal_open(state, req)),
        "form.setField" => Some(handle_form_set_field(state, req)),
        "form.submit" => Some(handle_form_submit(state, req)),
        "form.cancel" => Some(handle_form_cancel(state, req)),
        _ => None,
    }
}
