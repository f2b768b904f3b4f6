//! Multipart upload over `reqwest`.

use imgdrop::{ImageHost, UploadError, UploadResult, UploadTarget, UploadedImage};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::{Path, PathBuf};

use crate::mime::guess_mime;

/// [`ImageHost`] that reads a local file and POSTs it with `reqwest`.
///
/// No timeout and no retries: the client's defaults apply.
#[derive(Clone, Debug)]
pub struct ReqwestHost {
    client: Client,
    target: UploadTarget,
}

impl ReqwestHost {
    pub fn new(target: UploadTarget) -> Self {
        Self::with_client(Client::new(), target)
    }

    pub fn with_client(client: Client, target: UploadTarget) -> Self {
        Self { client, target }
    }

    pub fn target(&self) -> &UploadTarget {
        &self.target
    }

    async fn form(&self, path: &Path) -> UploadResult<Form> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| UploadError::Read(format!("{}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        log::debug!("📤 Uploading {} ({} bytes)", file_name, bytes.len());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(guess_mime(path))
            .map_err(|e| UploadError::Transport(format!("Failed to build file part: {}", e)))?;

        Ok(Form::new()
            .part("file", part)
            .text("upload_preset", self.target.upload_preset.clone()))
    }
}

impl ImageHost for ReqwestHost {
    type File = PathBuf;

    async fn upload(&self, path: PathBuf) -> UploadResult<UploadedImage> {
        let form = self.form(&path).await?;

        let response = self
            .client
            .post(self.target.endpoint())
            .multipart(form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;
        UploadedImage::from_json(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Multipart, State},
        http::StatusCode,
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    const ROUTE: &str = "/v1_1/demo/image/upload";

    /// What the fake service saw in one request.
    #[derive(Clone, Debug, Default)]
    struct Received {
        file_name: Option<String>,
        content_type: Option<String>,
        file_len: usize,
        preset: Option<String>,
        other_fields: Vec<String>,
    }

    type Inbox = Arc<Mutex<Vec<Received>>>;

    async fn fake_upload(
        State(inbox): State<Inbox>,
        mut multipart: Multipart,
    ) -> Result<Json<Value>, (StatusCode, String)> {
        let bad_request = |e: axum::extract::multipart::MultipartError| {
            (StatusCode::BAD_REQUEST, e.to_string())
        };
        let mut received = Received::default();

        while let Some(field) = multipart.next_field().await.map_err(bad_request)? {
            let name = field.name().unwrap_or("").to_string();

            match name.as_str() {
                "file" => {
                    received.file_name = field.file_name().map(|s| s.to_string());
                    received.content_type = field.content_type().map(|s| s.to_string());
                    received.file_len = field.bytes().await.map_err(bad_request)?.len();
                }
                "upload_preset" => {
                    received.preset = Some(field.text().await.map_err(bad_request)?);
                }
                _ => received.other_fields.push(name),
            }
        }

        let preset = received.preset.clone().unwrap_or_default();
        let file_name = received.file_name.clone().unwrap_or_default();
        let file_len = received.file_len;
        inbox.lock().unwrap().push(received);

        Ok(Json(json!({
            "public_id": "sample",
            "format": "png",
            "bytes": file_len,
            "secure_url": format!("https://res.example.test/{}/{}", preset, file_name),
        })))
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn host(base: &str) -> ReqwestHost {
        ReqwestHost::new(
            UploadTarget::default()
                .with_api_base(base)
                .with_cloud_name("demo"),
        )
    }

    fn png_file(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[tokio::test]
    async fn test_upload_sends_file_and_preset() {
        let inbox = Inbox::default();
        let base = serve(
            Router::new()
                .route(ROUTE, post(fake_upload))
                .with_state(inbox.clone()),
        )
        .await;
        let file = png_file(b"\x89PNG\r\n\x1a\nfake");
        let file_name = file.path().file_name().unwrap().to_string_lossy().into_owned();

        let image = host(&base).upload(file.path().to_path_buf()).await.unwrap();

        assert_eq!(
            image.secure_url,
            format!("https://res.example.test/d-code_trail/{}", file_name)
        );
        assert_eq!(image.bytes, Some(12));

        let received = inbox.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].preset.as_deref(), Some("d-code_trail"));
        assert_eq!(received[0].file_name.as_deref(), Some(file_name.as_str()));
        assert_eq!(received[0].content_type.as_deref(), Some("image/png"));
        assert_eq!(received[0].file_len, 12);
        assert!(received[0].other_fields.is_empty());
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let base = serve(Router::new().route(
            ROUTE,
            post(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    r#"{"error":{"message":"Upload preset not found"}}"#,
                )
            }),
        ))
        .await;
        let file = png_file(b"png");

        let err = host(&base).upload(file.path().to_path_buf()).await.unwrap_err();

        match err {
            UploadError::Status { status, body } => {
                assert_eq!(status, 400);
                assert!(body.contains("Upload preset not found"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_body_is_decode_error() {
        let base = serve(Router::new().route(
            ROUTE,
            post(|| async { "<html>maintenance</html>" }),
        ))
        .await;
        let file = png_file(b"png");

        let err = host(&base).upload(file.path().to_path_buf()).await.unwrap_err();

        assert!(matches!(err, UploadError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let file = png_file(b"png");

        let err = host(&format!("http://{}", addr))
            .upload(file.path().to_path_buf())
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::Transport(_)));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        let err = host("http://127.0.0.1:9").upload(missing).await.unwrap_err();

        assert!(matches!(err, UploadError::Read(_)));
        assert_eq!(err.user_message(), "Failed to upload image. Please try again.");
    }
}
