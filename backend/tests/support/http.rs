//! Shared HTTP helpers for gateway endpoint tests.

use awc::Client;
use serde_json::Value;

use crate::harness::{SharedWorld, with_world_async};

struct CapturedResponse {
    status: u16,
    trace_id: Option<String>,
    body: Value,
}

fn record_response(world: &SharedWorld, captured: CapturedResponse) {
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(captured.status);
    ctx.last_trace_id = captured.trace_id;
    ctx.last_body = Some(captured.body);
}

/// Issue a GET and record the status, `Trace-Id` header and JSON body.
pub(crate) fn perform_get(world: &SharedWorld, path: &str) {
    let captured = with_world_async(world, |base_url| async move {
        let mut response = Client::default()
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("request");

        let status = response.status().as_u16();
        let trace_id = response
            .headers()
            .get("trace-id")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_owned());
        let body = response.body().await.expect("body");
        let json: Value = serde_json::from_slice(&body).expect("json body");
        CapturedResponse {
            status,
            trace_id,
            body: json,
        }
    });

    record_response(world, captured);
}
