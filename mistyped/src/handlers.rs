use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE, HeaderValue,
};
use hyper::{Method, Request, Response, StatusCode};
use mistyped_core::{CoreError, Keymap, generate_candidates, validate};
use mistyped_scanner::{CheckResponse, Prober, Transport};
use std::fmt::Display;
use std::sync::Arc;
use tracing::{info, warn};
use url::form_urlencoded;

pub type HttpResponse = Response<Full<Bytes>>;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Shared, read-only state for every request
pub struct AppState<T> {
    pub keymap: Arc<Keymap>,
    pub prober: Prober<T>,
}

impl<T: Transport> AppState<T> {
    pub fn new(keymap: Keymap, prober: Prober<T>) -> Self {
        Self {
            keymap: Arc::new(keymap),
            prober,
        }
    }

    /// Generate the typo candidates for an already validated host and
    /// probe all of them
    pub async fn check_host(&self, host: &str) -> CheckResponse {
        let candidates = generate_candidates(host, &self.keymap);
        info!("Checking {} candidates for {}", candidates.len(), host);
        self.prober.probe_all(candidates).await
    }
}

/// Dispatch a request. Every response carries the CORS headers.
pub async fn route<B, T>(req: Request<B>, state: &AppState<T>) -> HttpResponse
where
    B: Body,
    B::Error: Display,
    T: Transport,
{
    let path = req.uri().path().to_string();

    let response = if req.method() == Method::OPTIONS {
        empty(StatusCode::NO_CONTENT)
    } else {
        match path.as_str() {
            "/" => home(),
            "/checkurl/" | "/checkurl" => check_url(req, state).await,
            _ => empty(StatusCode::NOT_FOUND),
        }
    };

    with_cors(response)
}

fn home() -> HttpResponse {
    info!("Endpoint hit: homepage");
    empty(StatusCode::OK)
}

async fn check_url<B, T>(req: Request<B>, state: &AppState<T>) -> HttpResponse
where
    B: Body,
    B::Error: Display,
    T: Transport,
{
    let form = match read_form(req).await {
        Ok(form) => form,
        Err(e) => {
            warn!("Rejected request: {}", e);
            return empty(StatusCode::BAD_REQUEST);
        }
    };

    let Some(raw_url) = form_value(&form, "url") else {
        warn!("Rejected request: missing url parameter");
        return empty(StatusCode::BAD_REQUEST);
    };

    let host = match validate(raw_url) {
        Ok(host) => host,
        Err(e) => {
            warn!("Rejected request: {}", e);
            return empty(StatusCode::BAD_REQUEST);
        }
    };

    let result = state.check_host(&host).await;
    json(&result)
}

/// Collect form values from a urlencoded POST/PUT body and the query
/// string. Body values come first, so they win on lookup.
pub async fn read_form<B>(req: Request<B>) -> Result<Vec<(String, String)>, CoreError>
where
    B: Body,
    B::Error: Display,
{
    let (parts, body) = req.into_parts();
    let mut pairs = Vec::new();

    let has_form_body = matches!(parts.method, Method::POST | Method::PUT)
        && parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with(FORM_CONTENT_TYPE));

    if has_form_body {
        let bytes = body
            .collect()
            .await
            .map_err(|e| CoreError::InvalidInput(format!("unreadable body: {}", e)))?
            .to_bytes();
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| CoreError::InvalidInput(format!("body is not valid form data: {}", e)))?;
        pairs.extend(form_urlencoded::parse(text.as_bytes()).into_owned());
    }

    if let Some(query) = parts.uri.query() {
        pairs.extend(form_urlencoded::parse(query.as_bytes()).into_owned());
    }

    Ok(pairs)
}

/// First value for `key`, if any
pub fn form_value<'a>(form: &'a [(String, String)], key: &str) -> Option<&'a str> {
    form.iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn empty(status: StatusCode) -> HttpResponse {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = status;
    response
}

fn json(body: &CheckResponse) -> HttpResponse {
    match serde_json::to_vec(body) {
        Ok(bytes) => {
            let mut response = Response::new(Full::new(Bytes::from(bytes)));
            response
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            response
        }
        Err(e) => {
            warn!("Failed to serialize response: {}", e);
            empty(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

fn with_cors(mut response: HttpResponse) -> HttpResponse {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET,POST, PUT"),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
