use anyhow::{anyhow, Result};
use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Offer `html` to the user as a downloaded file.
///
/// The object URL backing the download is revoked when this returns.
pub fn download_html(file_name: &str, html: &str) -> Result<()> {
    let url = ObjectUrl::from(Blob::new_with_options(html, Some("text/html")));

    let document = gloo::utils::document();
    let body = document
        .body()
        .ok_or_else(|| anyhow!("document has no body"))?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an anchor"))?;

    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(js_error)?;

    Ok(())
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!("{:?}", value)
}
