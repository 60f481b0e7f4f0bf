//! Minimal host application wiring the middleware into an axum router.
//!
//! Serves `./demos/scss/my-file.scss` at `/css/my-file.css` (and minified
//! at `/css/my-file.min.css`) alongside a plain HTML page.

use axum::{response::Html, routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axum_sass::{SassConfig, SassMiddleware, Syntax};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axum_sass=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = SassConfig {
        source: Some("demos/scss".into()),
        mode: Syntax::Scss,
        cache: Some(true),
        ..Default::default()
    };
    config
        .variables
        .insert("color-background".into(), "#444".into());
    config
        .variables
        .insert("color-primary".into(), "#00AAFF".into());
    config.variables.insert("header-size".into(), "3em".into());

    let sass = SassMiddleware::new(config);
    let app = sass
        .attach(Router::new().route("/", get(index)))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
    tracing::info!(address = %listener.local_addr()?, "Sass middleware demo listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(
        r#"<html>
  <head>
    <link rel="stylesheet" href="/css/my-file.css">
  </head>
  <body>
    <h1>Hello World!</h1>
  </body>
</html>"#,
    )
}
