use crate::utils::error::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Static file server for the built site. Binding and serving are split
/// so the bound address is observable before the blocking serve call.
pub struct Publisher {
    listener: TcpListener,
    root: PathBuf,
}

impl Publisher {
    pub async fn bind(root: impl Into<PathBuf>, host: &str, port: u16) -> Result<Self> {
        let listener = TcpListener::bind((host, port)).await?;
        Ok(Self {
            listener,
            root: root.into(),
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Serves the site directory until the process is killed. Requests
    /// for missing files get the file service's own 404; nothing here
    /// escalates to process failure.
    pub async fn serve(self) -> Result<()> {
        let files = ServeDir::new(&self.root).append_index_html_on_directories(true);
        let app = Router::new()
            .fallback_service(files)
            .layer(TraceLayer::new_for_http());

        tracing::info!(
            "Serving {} on http://{}",
            self.root.display(),
            self.listener.local_addr()?
        );

        axum::serve(self.listener, app).await?;
        Ok(())
    }
}
