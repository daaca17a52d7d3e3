use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use futures_util::StreamExt;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use dictum_models_core::config::SourcesConfig;

#[derive(Clone)]
pub enum Reply {
    Body(Vec<u8>),
    Status(StatusCode),
    /// Sends the prefix, then drops the connection mid-body.
    Interrupted(Vec<u8>),
    /// Sends each chunk after waiting `interval` (no wait before the first).
    Paced {
        chunks: Vec<Vec<u8>>,
        interval: Duration,
    },
}

struct Routes {
    replies: HashMap<String, Reply>,
    hits: AtomicUsize,
}

pub struct MockHost {
    pub base_url: String,
    routes: Arc<Routes>,
}

impl MockHost {
    pub fn sources(&self) -> SourcesConfig {
        SourcesConfig {
            huggingface_base: self.base_url.clone(),
            silero_url: format!("{}/silero/silero_vad.onnx", self.base_url),
        }
    }

    pub fn hits(&self) -> usize {
        self.routes.hits.load(Ordering::SeqCst)
    }
}

/// Path of a repository file as the HuggingFace resolve endpoint serves it.
pub fn repo_path(repo: &str, rel: &str) -> String {
    format!("/{}/resolve/main/{}", repo, rel)
}

async fn serve(State(routes): State<Arc<Routes>>, uri: Uri) -> Response {
    routes.hits.fetch_add(1, Ordering::SeqCst);
    match routes.replies.get(uri.path()) {
        Some(Reply::Body(bytes)) => bytes.clone().into_response(),
        Some(Reply::Status(status)) => status.into_response(),
        Some(Reply::Interrupted(prefix)) => {
            let chunks: Vec<Result<Vec<u8>, std::io::Error>> = vec![
                Ok(prefix.clone()),
                Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionReset,
                    "connection dropped",
                )),
            ];
            Response::new(Body::from_stream(futures_util::stream::iter(chunks)))
        }
        Some(Reply::Paced { chunks, interval }) => {
            let interval = *interval;
            let paced = futures_util::stream::iter(chunks.clone().into_iter().enumerate()).then(
                move |(i, chunk)| async move {
                    if i > 0 {
                        tokio::time::sleep(interval).await;
                    }
                    Ok::<_, std::io::Error>(chunk)
                },
            );
            Response::new(Body::from_stream(paced))
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn spawn(replies: Vec<(String, Reply)>) -> MockHost {
    let routes = Arc::new(Routes {
        replies: replies.into_iter().collect(),
        hits: AtomicUsize::new(0),
    });
    let app = Router::new().fallback(serve).with_state(routes.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockHost {
        base_url: format!("http://{}", addr),
        routes,
    }
}
