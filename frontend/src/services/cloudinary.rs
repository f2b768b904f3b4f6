//! Browser upload to the hosted image service.
//!
//! Builds a `FormData` body with the picked `File` and the upload preset,
//! then POSTs it with `fetch` through `gloo-net`.

use gloo_net::http::Request;
use imgdrop::{ImageHost, UploadError, UploadResult, UploadTarget, UploadedImage};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// [`ImageHost`] backed by the browser's `fetch`.
#[derive(Clone, Debug, Default)]
pub struct BrowserHost {
    target: UploadTarget,
}

impl BrowserHost {
    pub fn new(target: UploadTarget) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &UploadTarget {
        &self.target
    }

    fn form_data(&self, file: &File) -> UploadResult<FormData> {
        let form_data = FormData::new().map_err(|e| js_error("Failed to create FormData", e))?;

        form_data
            .append_with_blob("file", file)
            .map_err(|e| js_error("Failed to append file", e))?;
        form_data
            .append_with_str("upload_preset", &self.target.upload_preset)
            .map_err(|e| js_error("Failed to append upload preset", e))?;

        Ok(form_data)
    }
}

impl ImageHost for BrowserHost {
    type File = File;

    async fn upload(&self, file: File) -> UploadResult<UploadedImage> {
        log::debug!("📤 Uploading {} ({} bytes)", file.name(), file.size());

        let form_data = self.form_data(&file)?;

        let request = Request::post(&self.target.endpoint())
            .body(form_data)
            .map_err(|e| UploadError::Transport(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        if !response.ok() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(UploadError::Status {
                status: response.status(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| UploadError::Decode(e.to_string()))?;
        UploadedImage::from_json(&body)
    }
}

fn js_error(context: &str, err: JsValue) -> UploadError {
    UploadError::Transport(format!("{}: {:?}", context, err))
}
