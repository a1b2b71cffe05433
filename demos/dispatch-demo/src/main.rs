use bytes::Bytes;
use exception_dispatch::prelude::*;
use http_body_util::Full;
use hyper::service::service_fn;
use hyper::{Request, Response, body::Incoming};
use hyper_util::rt::TokioIo;
use serde_json::json;
use std::convert::Infallible;
use tokio::net::TcpListener;

/// Toy routing: every route either succeeds or fails in a different way,
/// and all failures funnel through the dispatcher.
fn route(req: &Req) -> Result<Response<Full<Bytes>>, Thrown> {
    match req.path() {
        "/" => Ok(Response::new(Full::new(Bytes::from("hello")))),
        "/teapot" => Err(Exception::new(418, "IM_A_TEAPOT", "short and stout")
            .with_raw_message("requested coffee")
            .into()),
        "/bug" => Err(Exception::new(200, "LOOKS_FINE", "this status lies")
            .non_operational()
            .into()),
        "/boom" => Err(Thrown::from("boom")),
        "/weird" => Err(Thrown::from(json!({"code": 7}))),
        _ => Err(Exception::not_found("no such route").into()),
    }
}

async fn serve(req: Request<Incoming>) -> Result<Response<Full<Bytes>>, Infallible> {
    let handle = Req::from_hyper(&req);

    match route(&handle) {
        Ok(response) => Ok(response),
        Err(error) => {
            let mut res = Res::new();
            Dispatcher.dispatch(error, &handle, &mut res);
            Ok(res.into_hyper())
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let listener = TcpListener::bind(("127.0.0.1", 3007)).await.unwrap();

    println!("Server starting on http://127.0.0.1:3007");
    println!("");
    println!("Try these requests:");
    println!("  curl http://127.0.0.1:3007/");
    println!("     -> plain success");
    println!("  curl -i http://127.0.0.1:3007/teapot");
    println!("     -> trusted exception, status and raw message forwarded");
    println!("  curl -i http://127.0.0.1:3007/bug");
    println!("     -> non-operational exception, masked as 500");
    println!("  curl -i http://127.0.0.1:3007/boom");
    println!("     -> thrown string, normalized to 500");
    println!("  curl -i http://127.0.0.1:3007/weird");
    println!("     -> thrown value, stringified into the message");
    println!("");

    loop {
        let (stream, _) = listener.accept().await.unwrap();
        let io = TokioIo::new(stream);

        tokio::spawn(async move {
            if let Err(err) = hyper::server::conn::http1::Builder::new()
                .serve_connection(io, service_fn(serve))
                .await
            {
                eprintln!("connection error: {}", err);
            }
        });
    }
}
