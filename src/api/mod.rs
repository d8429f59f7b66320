//! JSON API over a [`Dataset`].
//!
//! Routing is a pure function from `(method, target)` to an [`ApiResponse`]; the
//! [`server`] module only moves bytes. Every route is served both bare and under an
//! `/api` prefix.
//!
//! | Route | Parameters | Body |
//! |-------|------------|------|
//! | `GET /batters` | none | sorted batter names |
//! | `GET /search` | `batter` | that batter's events |
//! | `GET /pitchers` | `batter` | sorted pitchers faced |
//! | `GET /videos` | `batter`, `pitcher` | video cards |

pub mod server;

#[cfg(test)]
mod tests;

use reqwest::Url;
use serde::Serialize;
use serde_json::{json, Value};

use crate::{
    dataset::Dataset,
    error::{ChartError, QueryParam, Result},
};

/// Status code and JSON body of one response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn ok<T: Serialize>(payload: &T) -> Self {
        match serde_json::to_value(payload) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::error(500, &format!("Serialization failed: {}", e)),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: json!({ "error": message }),
        }
    }

    pub fn from_error(err: &ChartError) -> Self {
        let status = if err.is_client_error() { 400 } else { 500 };
        Self::error(status, &err.to_string())
    }

    pub fn reason(&self) -> &'static str {
        match self.status {
            200 => "OK",
            400 => "Bad Request",
            404 => "Not Found",
            405 => "Method Not Allowed",
            408 => "Request Timeout",
            _ => "Internal Server Error",
        }
    }
}

/// Routes this API answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Batters,
    Search,
    Pitchers,
    Videos,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.strip_prefix("/api").unwrap_or(path);
        match path.trim_end_matches('/') {
            "/batters" => Some(Route::Batters),
            "/search" => Some(Route::Search),
            "/pitchers" => Some(Route::Pitchers),
            "/videos" => Some(Route::Videos),
            _ => None,
        }
    }
}

/// A parsed request target.
#[derive(Debug, Clone)]
pub struct Request {
    url: Url,
}

impl Request {
    /// Parse an origin-form request target such as `/search?batter=Ronald%20Acuna`.
    pub fn parse(target: &str) -> Result<Self> {
        if !target.starts_with('/') {
            return Err(ChartError::BadRequest {
                message: format!("invalid request target '{}'", target),
            });
        }
        let url = Url::parse(&format!("http://localhost{}", target)).map_err(|e| {
            ChartError::BadRequest {
                message: format!("invalid request target '{}': {}", target, e),
            }
        })?;
        Ok(Self { url })
    }

    pub fn path(&self) -> &str {
        self.url.path()
    }

    /// First value of a query parameter, percent-decoded.
    pub fn param(&self, param: QueryParam) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(k, _)| k == param.key())
            .map(|(_, v)| v.into_owned())
    }
}

fn dispatch(dataset: &Dataset, route: Route, request: &Request) -> Result<ApiResponse> {
    let batter = request.param(QueryParam::Batter);
    let batter = batter.as_deref();

    let response = match route {
        Route::Batters => ApiResponse::ok(&dataset.list_batters()),
        Route::Search => ApiResponse::ok(&dataset.search(batter)?),
        Route::Pitchers => ApiResponse::ok(&dataset.pitchers(batter)?),
        Route::Videos => {
            let pitcher = request.param(QueryParam::Pitcher);
            ApiResponse::ok(&dataset.videos(batter, pitcher.as_deref())?)
        }
    };
    Ok(response)
}

/// Answer one request.
pub fn route(dataset: &Dataset, method: &str, target: &str) -> ApiResponse {
    let request = match Request::parse(target) {
        Ok(request) => request,
        Err(e) => return ApiResponse::from_error(&e),
    };

    let Some(route) = Route::from_path(request.path()) else {
        return ApiResponse::error(404, "Not found");
    };

    if !method.eq_ignore_ascii_case("GET") {
        return ApiResponse::error(405, "Method not allowed");
    }

    dispatch(dataset, route, &request).unwrap_or_else(|e| ApiResponse::from_error(&e))
}
