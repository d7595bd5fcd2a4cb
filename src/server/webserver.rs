//! dispatch table mapping (method, path, handler) registrations onto actix-web

use std::future::Future;
use std::sync::Arc;
use actix_web::middleware::Logger;
use actix_web::web::{self, Bytes, ServiceConfig};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer};
use derive_more::Display;
use futures_util::future::{FutureExt, LocalBoxFuture};
use log::{debug, info};

/// Callback accepting the request context and its raw body.
pub(crate) type HandlerFn = Arc<
    dyn Fn(HttpRequest, Bytes) -> LocalBoxFuture<'static, Result<HttpResponse, actix_web::Error>>
        + Send
        + Sync,
>;

/// Box an async fn into a [`HandlerFn`].
pub(crate) fn handler<F, Fut>(f: F) -> HandlerFn
where
    F: Fn(HttpRequest, Bytes) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<HttpResponse, actix_web::Error>> + 'static,
{
    Arc::new(move |req, body| f(req, body).boxed_local())
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub(crate) enum Method {
    #[display("GET")]
    Get,
    #[display("POST")]
    Post,
    #[display("PUT")]
    Put,
    #[display("DELETE")]
    Delete,
    #[display("PATCH")]
    Patch,
    /// bound through the catch-all route, the verb is ignored
    #[display("{_0}")]
    Other(String),
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "PATCH" => Self::Patch,
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub(crate) struct WebHandler {
    pub method: Method,
    pub path: String,
    pub handler: HandlerFn,
}

/// Binding capability of the routing engine.
pub(crate) trait RouteBinder {
    fn get(&mut self, path: &str, handler: HandlerFn);
    fn post(&mut self, path: &str, handler: HandlerFn);
    fn put(&mut self, path: &str, handler: HandlerFn);
    fn delete(&mut self, path: &str, handler: HandlerFn);
    fn patch(&mut self, path: &str, handler: HandlerFn);
    /// any verb
    fn handle(&mut self, path: &str, handler: HandlerFn);
}

fn to_route(route: actix_web::Route, handler: HandlerFn) -> actix_web::Route {
    route.to(move |req: HttpRequest, body: Bytes| {
        let handler = handler.clone();
        async move { handler(req, body).await }
    })
}

impl RouteBinder for ServiceConfig {
    fn get(&mut self, path: &str, handler: HandlerFn) {
        self.route(path, to_route(web::get(), handler));
    }

    fn post(&mut self, path: &str, handler: HandlerFn) {
        self.route(path, to_route(web::post(), handler));
    }

    fn put(&mut self, path: &str, handler: HandlerFn) {
        self.route(path, to_route(web::put(), handler));
    }

    fn delete(&mut self, path: &str, handler: HandlerFn) {
        self.route(path, to_route(web::delete(), handler));
    }

    fn patch(&mut self, path: &str, handler: HandlerFn) {
        self.route(path, to_route(web::patch(), handler));
    }

    fn handle(&mut self, path: &str, handler: HandlerFn) {
        self.route(path, to_route(web::route(), handler));
    }
}

/// Bind every registration, in order.
pub(crate) fn bind_handlers<B: RouteBinder + ?Sized>(handlers: &[WebHandler], binder: &mut B) {
    for WebHandler { method, path, handler } in handlers {
        debug!("binding {} {}", method, path);
        let handler = handler.clone();
        match method {
            Method::Get => binder.get(path, handler),
            Method::Post => binder.post(path, handler),
            Method::Put => binder.put(path, handler),
            Method::Delete => binder.delete(path, handler),
            Method::Patch => binder.patch(path, handler),
            Method::Other(_) => binder.handle(path, handler),
        }
    }
}

pub(crate) struct WebServer {
    handlers: Vec<WebHandler>,
    web_server_addr: String,
}

impl WebServer {
    pub fn new(web_server_addr: impl Into<String>) -> Self {
        Self {
            handlers: vec![],
            web_server_addr: web_server_addr.into(),
        }
    }

    pub fn register(&mut self, method: impl Into<Method>, path: impl Into<String>, handler: HandlerFn) {
        self.handlers.push(WebHandler {
            method: method.into(),
            path: path.into(),
            handler,
        });
    }

    pub fn handlers(&self) -> &[WebHandler] {
        &self.handlers
    }

    pub fn configure(&self, cfg: &mut ServiceConfig) {
        bind_handlers(&self.handlers, cfg);
    }

    /// Bind all registrations behind the request logger and serve until stopped.
    /// Fails when the address cannot be bound.
    pub async fn start(self) -> std::io::Result<()> {
        let Self { handlers, web_server_addr } = self;
        let handlers = Arc::new(handlers);
        let server = HttpServer::new(move || {
            let handlers = handlers.clone();
            App::new()
                .wrap(Logger::default())
                .configure(move |cfg| bind_handlers(&handlers, cfg))
        })
        .bind(web_server_addr.as_str())?;
        info!("web server listening on {}", web_server_addr);
        server.run().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{Method as HttpMethod, StatusCode};
    use actix_web::test as actix_test;

    fn echo(tag: &'static str) -> HandlerFn {
        handler(move |req: HttpRequest, _| async move {
            Ok::<_, actix_web::Error>(HttpResponse::Ok().body(format!("{} {}", tag, req.method())))
        })
    }

    #[derive(Default)]
    struct RecordingBinder {
        calls: Vec<(&'static str, String)>,
    }

    impl RouteBinder for RecordingBinder {
        fn get(&mut self, path: &str, _: HandlerFn) {
            self.calls.push(("get", path.to_string()));
        }
        fn post(&mut self, path: &str, _: HandlerFn) {
            self.calls.push(("post", path.to_string()));
        }
        fn put(&mut self, path: &str, _: HandlerFn) {
            self.calls.push(("put", path.to_string()));
        }
        fn delete(&mut self, path: &str, _: HandlerFn) {
            self.calls.push(("delete", path.to_string()));
        }
        fn patch(&mut self, path: &str, _: HandlerFn) {
            self.calls.push(("patch", path.to_string()));
        }
        fn handle(&mut self, path: &str, _: HandlerFn) {
            self.calls.push(("handle", path.to_string()));
        }
    }

    #[test]
    fn method_from_str() {
        assert_eq!(Method::from("GET"), Method::Get);
        assert_eq!(Method::from("PATCH"), Method::Patch);
        assert_eq!(Method::from("get"), Method::Other("get".to_string()));
        assert_eq!(Method::from("OPTIONS").to_string(), "OPTIONS");
    }

    #[test]
    fn register_appends_in_order_without_dedup() {
        let mut server = WebServer::new("127.0.0.1:0");
        server.register("GET", "/a", echo("a"));
        server.register("GET", "/a", echo("a"));
        server.register(Method::Post, "/b", echo("b"));

        let registered = server
            .handlers()
            .iter()
            .map(|h| (h.method.clone(), h.path.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            registered,
            vec![(Method::Get, "/a"), (Method::Get, "/a"), (Method::Post, "/b")]
        );
    }

    #[test]
    fn each_verb_binds_through_its_own_route() {
        let mut server = WebServer::new("127.0.0.1:0");
        for verb in ["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"] {
            server.register(verb, format!("/{}", verb.to_lowercase()), echo("x"));
        }

        let mut binder = RecordingBinder::default();
        bind_handlers(server.handlers(), &mut binder);

        assert_eq!(
            binder.calls,
            vec![
                ("get", "/get".to_string()),
                ("post", "/post".to_string()),
                ("put", "/put".to_string()),
                ("delete", "/delete".to_string()),
                ("patch", "/patch".to_string()),
                ("handle", "/options".to_string()),
            ]
        );
    }

    #[actix_web::test]
    async fn serves_registered_routes() {
        let mut server = WebServer::new("127.0.0.1:0");
        server.register("GET", "/orders", echo("list"));
        server.register("POST", "/orders", echo("create"));
        server.register("DELETE", "/orders", echo("delete"));
        server.register("TRACE", "/any", echo("any"));

        let app = actix_test::init_service(
            App::new()
                .wrap(Logger::default())
                .configure(|cfg| server.configure(cfg)),
        )
        .await;

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/orders").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(actix_test::read_body(res).await, "list GET");

        let res = actix_test::call_service(&app, actix_test::TestRequest::post().uri("/orders").to_request()).await;
        assert_eq!(actix_test::read_body(res).await, "create POST");

        let res = actix_test::call_service(&app, actix_test::TestRequest::delete().uri("/orders").to_request()).await;
        assert_eq!(actix_test::read_body(res).await, "delete DELETE");

        // catch-all ignores the verb
        for verb in [HttpMethod::GET, HttpMethod::PUT, HttpMethod::OPTIONS] {
            let req = actix_test::TestRequest::default().method(verb.clone()).uri("/any").to_request();
            let res = actix_test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK);
            assert_eq!(actix_test::read_body(res).await, format!("any {}", verb));
        }

        let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/missing").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn start_fails_on_unusable_address() {
        let server = WebServer::new("not-an-address");
        assert!(server.start().await.is_err());
    }

    #[actix_web::test]
    async fn start_fails_when_port_is_taken() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = WebServer::new(addr.to_string());
        assert!(server.start().await.is_err());
    }
}
