// File: ./src/client/middleware.rs
//! Tower middleware stamping fixed headers (User-Agent, Authorization, Accept) on every request.
use http::{HeaderMap, HeaderName, HeaderValue, Request};
use std::task::{Context, Poll};
use tower_layer::Layer;
use tower_service::Service;

#[derive(Clone, Debug, Default)]
pub struct DefaultHeadersLayer {
    headers: HeaderMap,
}

impl DefaultHeadersLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl<S> Layer<S> for DefaultHeadersLayer {
    type Service = DefaultHeadersService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        DefaultHeadersService {
            inner,
            headers: self.headers.clone(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DefaultHeadersService<S> {
    inner: S,
    headers: HeaderMap,
}

impl<S, ReqBody> Service<Request<ReqBody>> for DefaultHeadersService<S>
where
    S: Service<Request<ReqBody>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<ReqBody>) -> Self::Future {
        // Headers set on the request itself win
        for (name, value) in &self.headers {
            if !req.headers().contains_key(name) {
                req.headers_mut().insert(name.clone(), value.clone());
            }
        }
        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;
    use tower::{ServiceExt, service_fn};

    #[tokio::test]
    async fn test_headers_added_unless_present() {
        let layer = DefaultHeadersLayer::new()
            .with(http::header::USER_AGENT, HeaderValue::from_static("tickler"))
            .with(http::header::ACCEPT, HeaderValue::from_static("application/json"));

        let echo = service_fn(|req: Request<String>| async move {
            Ok::<_, Infallible>(req.headers().clone())
        });
        let svc = layer.layer(echo);

        let req = Request::builder()
            .header(http::header::ACCEPT, "text/plain")
            .body(String::new())
            .unwrap();
        let seen = svc.oneshot(req).await.unwrap();

        assert_eq!(seen[http::header::USER_AGENT], "tickler");
        assert_eq!(seen[http::header::ACCEPT], "text/plain");
    }
}
