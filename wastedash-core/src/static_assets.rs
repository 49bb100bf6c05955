//! Static asset serving from the dashboard's public directory.
//!
//! Requests that no route claims are resolved against a root directory.
//! Paths containing parent or absolute components are rejected before the
//! filesystem is touched.

use crate::{Error, HttpRequest, HttpResponse, HandlerFn, handler};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// File type classification used for the Content-Type header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    JavaScript,
    Stylesheet,
    Image,
    Font,
    Html,
    Json,
    Other,
}

impl FileType {
    /// Detect file type from path extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("js") | Some("mjs") => FileType::JavaScript,
            Some("css") => FileType::Stylesheet,
            Some("png") | Some("jpg") | Some("jpeg") | Some("gif") | Some("svg")
            | Some("webp") | Some("ico") => FileType::Image,
            Some("woff") | Some("woff2") | Some("ttf") | Some("otf") => FileType::Font,
            Some("html") | Some("htm") => FileType::Html,
            Some("json") => FileType::Json,
            _ => FileType::Other,
        }
    }

    /// Get MIME type for file type
    pub fn mime_type(&self, path: &Path) -> &'static str {
        let ext = path.extension().and_then(|ext| ext.to_str());
        match self {
            FileType::JavaScript => "application/javascript",
            FileType::Stylesheet => "text/css; charset=utf-8",
            FileType::Image => match ext {
                Some("png") => "image/png",
                Some("jpg") | Some("jpeg") => "image/jpeg",
                Some("gif") => "image/gif",
                Some("svg") => "image/svg+xml",
                Some("webp") => "image/webp",
                _ => "image/x-icon",
            },
            FileType::Font => match ext {
                Some("woff") => "font/woff",
                Some("woff2") => "font/woff2",
                Some("ttf") => "font/ttf",
                _ => "font/otf",
            },
            FileType::Html => "text/html; charset=utf-8",
            FileType::Json => "application/json",
            FileType::Other => "application/octet-stream",
        }
    }
}

/// Serves files below a root directory
#[derive(Debug, Clone)]
pub struct StaticAssets {
    root_dir: PathBuf,
}

impl StaticAssets {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Map a request path onto the root, refusing anything that could escape it
    pub fn resolve(&self, request_path: &str) -> Option<PathBuf> {
        let relative = Path::new(request_path.trim_start_matches('/'));
        if relative.as_os_str().is_empty() {
            return None;
        }

        let safe = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        if !safe {
            return None;
        }

        Some(self.root_dir.join(relative))
    }

    /// Read the file behind `request_path`
    pub async fn serve(&self, request_path: &str) -> Result<HttpResponse, Error> {
        let not_found = || Error::NotFound(request_path.to_string());
        let path = self.resolve(request_path).ok_or_else(not_found)?;

        let metadata = tokio::fs::metadata(&path).await.map_err(|_| not_found())?;
        if !metadata.is_file() {
            return Err(not_found());
        }

        let body = tokio::fs::read(&path).await?;
        let mime = FileType::from_path(&path).mime_type(&path);
        tracing::debug!(path = %path.display(), bytes = body.len(), "serving static asset");

        Ok(HttpResponse::ok().content_type(mime).with_body(body))
    }

    /// Router fallback serving this directory
    pub fn into_handler(self) -> HandlerFn {
        let assets = Arc::new(self);
        handler(move |req: HttpRequest| {
            let assets = Arc::clone(&assets);
            async move { assets.serve(&req.path).await }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn public_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("css")).unwrap();
        fs::write(dir.path().join("css/site.css"), "body { margin: 0; }").unwrap();
        dir
    }

    #[test]
    fn test_file_type_detection() {
        assert_eq!(FileType::from_path(Path::new("a/site.css")), FileType::Stylesheet);
        assert_eq!(FileType::from_path(Path::new("logo.svg")), FileType::Image);
        assert_eq!(FileType::from_path(Path::new("README")), FileType::Other);
        assert_eq!(
            FileType::Image.mime_type(Path::new("logo.svg")),
            "image/svg+xml"
        );
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let assets = StaticAssets::new("/srv/public");
        assert!(assets.resolve("/../etc/passwd").is_none());
        assert!(assets.resolve("/css/../../secret").is_none());
        assert!(assets.resolve("/").is_none());
        assert_eq!(
            assets.resolve("/css/site.css"),
            Some(PathBuf::from("/srv/public/css/site.css"))
        );
    }

    #[tokio::test]
    async fn test_serve_existing_file() {
        let dir = public_dir();
        let assets = StaticAssets::new(dir.path());

        let response = assets.serve("/css/site.css").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(
            response.headers.get("Content-Type"),
            Some(&"text/css; charset=utf-8".to_string())
        );
        assert_eq!(response.body, b"body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_serve_missing_file_and_directory() {
        let dir = public_dir();
        let assets = StaticAssets::new(dir.path());

        assert!(matches!(
            assets.serve("/css/missing.css").await,
            Err(Error::NotFound(_))
        ));
        assert!(matches!(assets.serve("/css").await, Err(Error::NotFound(_))));
    }
}
