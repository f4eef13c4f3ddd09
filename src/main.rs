use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::cors::CorsLayer;

use scriptorium::corpus::store::CorpusStore;
use scriptorium::query::handlers::{
    handle_get_annotation, handle_get_book, handle_get_chapter, handle_get_corpus, handle_home,
    handle_list_annotations, handle_list_corpora, handle_search,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "0.0.0.0:5000".parse()?;
    let mut corpora_dir = PathBuf::from("json_files");
    let mut annotations_dir: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--corpora-dir" => {
                corpora_dir = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--annotations-dir" => {
                annotations_dir = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--corpora-dir <dir>] [--annotations-dir <dir>]",
                    args[0]
                );
                eprintln!("Defaults: --bind 0.0.0.0:5000 --corpora-dir json_files");
                eprintln!("          --annotations-dir <corpora-dir>/annotations");
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    let annotations_dir = annotations_dir.unwrap_or_else(|| corpora_dir.join("annotations"));

    tracing::info!("Corpora directory: {}", corpora_dir.display());
    tracing::info!("Annotations directory: {}", annotations_dir.display());

    let store = Arc::new(CorpusStore::new(corpora_dir, annotations_dir));

    let app = Router::new()
        .route("/", get(handle_home))
        .route("/corpora", get(handle_list_corpora))
        .route("/corpus/:id", get(handle_get_corpus))
        .route("/corpus/:id/:book", get(handle_get_book))
        .route("/corpus/:id/:book/:chapter", get(handle_get_chapter))
        .route("/annotations", get(handle_list_annotations))
        .route("/annotation/:set/:book", get(handle_get_annotation))
        .route("/search", get(handle_search))
        .layer(CorsLayer::permissive())
        .layer(Extension(store));

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
