//! 浏览器端文件下载
//!
//! 服务端生成导出内容，客户端只负责把返回的字节落盘：
//! Blob -> Object URL -> 临时 `<a download>` -> 点击 -> 回收 URL。

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// 下载错误，携带出错环节的描述
#[derive(Debug)]
pub struct DownloadError(String);

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "下载失败: {}", self.0)
    }
}

fn js_err(stage: &str, value: JsValue) -> DownloadError {
    DownloadError(format!("{}: {:?}", stage, value))
}

/// 将字节序列保存为本地文件
pub fn save_bytes(bytes: &[u8], filename: &str, mime: &str) -> Result<(), DownloadError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());

    let options = BlobPropertyBag::new();
    options.set_type(mime);

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| js_err("创建 Blob", e))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| js_err("创建 Object URL", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DownloadError("无法获取 document".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_err("创建 <a> 元素", e))?
        .dyn_into()
        .map_err(|e| js_err("<a> 类型转换", e.into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        anchor.remove();
    }

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
