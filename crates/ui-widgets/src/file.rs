//! File Reading
//!
//! Pulls the bytes out of a picked `web_sys::File` for multipart upload.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, JsValue> {
    let buffer = JsFuture::from(file.array_buffer()).await?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
