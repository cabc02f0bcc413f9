//! Binding to a JavaScript artifact SDK object provided by the host page.

use js_sys::{Promise, Reflect, Uint8Array};
use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use super::client::{ArtifactClient, ClientFuture};
use super::error::ClientError;
use crate::config::HOST_CLIENT_GLOBAL;
use crate::models::{CommitId, EntryKind, FileMeta, FolderEntry, RepoScope};

#[wasm_bindgen]
extern "C" {
    /// Host SDK object. Async methods may return promises or plain values.
    pub type JsSdk;

    #[wasm_bindgen(method, getter)]
    fn repo(this: &JsSdk) -> JsValue;

    #[wasm_bindgen(method, getter)]
    fn branch(this: &JsSdk) -> JsValue;

    #[wasm_bindgen(method, catch, js_name = listFolder)]
    fn list_folder(this: &JsSdk, path: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = readFileBytes)]
    fn read_file_bytes(this: &JsSdk, path: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = readFileMeta)]
    fn read_file_meta(this: &JsSdk, path: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = writeTextFile)]
    fn write_text_file(this: &JsSdk, path: &str, content: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = writeBinaryFile)]
    fn write_binary_file(this: &JsSdk, path: &str, bytes: &Uint8Array)
    -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = moveFile)]
    fn move_file(this: &JsSdk, from: &str, to: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = hasPendingChanges)]
    fn has_pending_changes(this: &JsSdk) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn commit(this: &JsSdk, message: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = listBranches)]
    fn list_branches(this: &JsSdk) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn checkout(this: &JsSdk, branch: &str) -> Result<JsValue, JsValue>;
}

/// Entry as the SDK reports it: `{ path, type }`.
#[derive(Deserialize)]
struct RawEntry {
    path: String,
    #[serde(rename = "type")]
    kind: String,
}

impl From<RawEntry> for FolderEntry {
    fn from(raw: RawEntry) -> Self {
        Self {
            path: raw.path,
            kind: EntryKind::from_sdk_type(&raw.kind),
        }
    }
}

#[derive(Deserialize)]
struct RawMeta {
    #[serde(rename = "type", default)]
    kind: String,
}

fn sdk_error(value: JsValue) -> ClientError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    ClientError::Sdk(message)
}

fn decode<T: for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, ClientError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
}

fn is_nullish(value: &JsValue) -> bool {
    value.is_null() || value.is_undefined()
}

/// Await a call result, whether it is a promise or a plain value.
async fn settle(call: Result<JsValue, JsValue>) -> Result<JsValue, ClientError> {
    let value = call.map_err(sdk_error)?;
    JsFuture::from(Promise::resolve(&value))
        .await
        .map_err(sdk_error)
}

/// The SDK addresses the root folder as `"."`.
fn sdk_folder(path: &str) -> &str {
    if path.is_empty() { "." } else { path }
}

/// [`ArtifactClient`] over a host-provided [`JsSdk`] object.
pub struct JsArtifactClient {
    sdk: JsSdk,
}

impl JsArtifactClient {
    pub fn new(sdk: JsSdk) -> Self {
        Self { sdk }
    }

    /// Bind `window.artifactClient` if the host page defines it.
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let value = Reflect::get(&window, &JsValue::from_str(HOST_CLIENT_GLOBAL)).ok()?;
        if !value.is_object() {
            return None;
        }
        Some(Self::new(value.unchecked_into::<JsSdk>()))
    }
}

impl ArtifactClient for JsArtifactClient {
    fn scope(&self) -> RepoScope {
        RepoScope {
            repo: self.sdk.repo().as_string().unwrap_or_default(),
            branch: self.sdk.branch().as_string().unwrap_or_default(),
        }
    }

    fn list_folder(&self, path: &str) -> ClientFuture<'_, Vec<FolderEntry>> {
        let call = self.sdk.list_folder(sdk_folder(path));
        Box::pin(async move {
            let value = settle(call).await?;
            if is_nullish(&value) {
                return Ok(Vec::new());
            }
            let raw: Vec<RawEntry> = decode(value)?;
            Ok(raw.into_iter().map(FolderEntry::from).collect())
        })
    }

    fn read_file_bytes(&self, path: &str) -> ClientFuture<'_, Option<Vec<u8>>> {
        let call = self.sdk.read_file_bytes(path);
        Box::pin(async move {
            let value = settle(call).await?;
            if is_nullish(&value) {
                return Ok(None);
            }
            if value.is_instance_of::<Uint8Array>() || value.is_instance_of::<js_sys::ArrayBuffer>()
            {
                return Ok(Some(Uint8Array::new(&value).to_vec()));
            }
            match value.as_string() {
                Some(text) => Ok(Some(text.into_bytes())),
                None => Err(ClientError::Decode("expected Uint8Array".to_string())),
            }
        })
    }

    fn read_file_meta(&self, path: &str) -> ClientFuture<'_, Option<FileMeta>> {
        let call = self.sdk.read_file_meta(path);
        Box::pin(async move {
            let value = settle(call).await?;
            if is_nullish(&value) {
                return Ok(None);
            }
            let raw: RawMeta = decode(value)?;
            Ok(Some(FileMeta {
                kind: EntryKind::from_sdk_type(&raw.kind),
            }))
        })
    }

    fn write_text_file(&self, path: &str, content: &str) -> Result<(), ClientError> {
        self.sdk
            .write_text_file(path, content)
            .map(drop)
            .map_err(sdk_error)
    }

    fn write_binary_file(&self, path: &str, bytes: &[u8]) -> Result<(), ClientError> {
        let array = Uint8Array::from(bytes);
        self.sdk
            .write_binary_file(path, &array)
            .map(drop)
            .map_err(sdk_error)
    }

    fn move_file(&self, from: &str, to: &str) -> Result<(), ClientError> {
        self.sdk.move_file(from, to).map(drop).map_err(sdk_error)
    }

    fn has_pending_changes(&self) -> bool {
        self.sdk
            .has_pending_changes()
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false)
    }

    fn commit(&self, message: &str) -> ClientFuture<'_, CommitId> {
        let call = self.sdk.commit(message);
        Box::pin(async move {
            let value = settle(call).await?;
            value
                .as_string()
                .ok_or_else(|| ClientError::Decode("expected commit id".to_string()))
        })
    }

    fn list_branches(&self) -> ClientFuture<'_, Vec<String>> {
        let call = self.sdk.list_branches();
        Box::pin(async move {
            let value = settle(call).await?;
            if is_nullish(&value) {
                return Ok(Vec::new());
            }
            decode(value)
        })
    }

    fn checkout(&self, branch: &str) -> ClientFuture<'_, ()> {
        let call = self.sdk.checkout(branch);
        Box::pin(async move { settle(call).await.map(drop) })
    }
}
