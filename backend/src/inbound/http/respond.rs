//! HTTP adapter mapping for response envelopes.
//!
//! Purpose: keep the envelope types HTTP-agnostic while allowing Actix
//! handlers to return them directly, mirroring `envelope.code` into the
//! response status.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::Serialize;

use crate::domain::{Envelope, PagedEnvelope};

fn status_for(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl<T: Serialize> Responder for Envelope<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(status_for(self.code)).json(self)
    }
}

impl<T: Serialize> Responder for PagedEnvelope<T> {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        HttpResponse::build(status_for(self.code)).json(self)
    }
}
