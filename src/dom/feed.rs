//! Good-times list
//!
//! Fetches the upcoming good times and renders them as list items. Any
//! failure leaves an empty list and a logged diagnostic.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Window};

use crate::error::{GraphError, Result};
use crate::models::GoodTime;

/// Fetch and decode the good-times feed
pub async fn fetch_good_times(window: &Window, url: &str) -> Result<Vec<GoodTime>> {
    let response: Response = JsFuture::from(window.fetch_with_str(url))
        .await?
        .dyn_into()
        .map_err(|_| GraphError::Js("fetch did not resolve to a Response".to_string()))?;

    if !response.ok() {
        return Err(GraphError::Js(format!(
            "GET {} returned {} {}",
            url,
            response.status(),
            response.status_text()
        )));
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(serde_json::from_str(&body)?)
}

/// Fetch the feed, degrading to an empty list on any failure
pub async fn load_good_times(window: &Window, url: &str) -> Vec<GoodTime> {
    match fetch_good_times(window, url).await {
        Ok(times) => {
            log::info!("loaded {} good time(s)", times.len());
            times
        }
        Err(e) => {
            log::error!("good times unavailable: {}", e);
            Vec::new()
        }
    }
}

/// Replace the container's children with one `<li>` per good time
pub fn render_good_times(document: &Document, container_id: &str, times: &[GoodTime]) -> Result<()> {
    let container = document
        .get_element_by_id(container_id)
        .ok_or_else(|| GraphError::missing(format!("#{}", container_id)))?;

    container.set_text_content(None);
    for time in times {
        let item = document.create_element("li")?;
        item.set_text_content(Some(time.display_line().as_str()));
        container.append_child(&item)?;
    }
    Ok(())
}

/// Fetch the feed and render it, if the page has a container for it
pub fn spawn_good_times_feed(window: Window, url: String, container_id: String) {
    let Some(document) = window.document() else {
        return;
    };
    if document.get_element_by_id(&container_id).is_none() {
        log::debug!("no #{} container, skipping good times feed", container_id);
        return;
    }

    wasm_bindgen_futures::spawn_local(async move {
        let times = load_good_times(&window, &url).await;
        if let Err(e) = render_good_times(&document, &container_id, &times) {
            log::warn!("could not render good times: {}", e);
        }
    });
}
