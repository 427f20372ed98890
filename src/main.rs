use axum::{Extension, Router, routing::get};
use std::net::SocketAddr;
use std::sync::Arc;
use word_search::index::WordIndex;
use word_search::search::handlers::handle_search;
use word_search::tree::OsTree;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut root = "./".to_string();
    let mut dir = String::new();
    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--root" if i + 1 < args.len() => {
                root = args[i + 1].clone();
                i += 2;
            }
            "--dir" if i + 1 < args.len() => {
                dir = args[i + 1].clone();
                i += 2;
            }
            "--bind" if i + 1 < args.len() => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                eprintln!(
                    "Usage: {} [--root <path>] [--dir <path>] [--bind <addr:port>]",
                    args[0]
                );
                eprintln!("Example: {} --root ./corpus --bind 127.0.0.1:8000", args[0]);
                std::process::exit(1);
            }
        }
    }

    tracing::info!("indexing files under {} (dir: {:?})", root, dir);

    let tree = Arc::new(OsTree::new(&root));
    let index = match WordIndex::build(tree, &dir).await {
        Ok(index) => index,
        Err(err) => {
            tracing::error!("error in constructing files dictionary: {err}");
            return Err(err.into());
        }
    };
    tracing::info!("indexed {} files", index.len());

    let app = Router::new()
        .route("/files/search", get(handle_search))
        .layer(Extension(index));

    tracing::info!("starting server on {}", bind_addr);
    tracing::info!("server is working on api /files/search?keyword={{keyword}}");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
