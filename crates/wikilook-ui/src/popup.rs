use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use slint::{CloseRequestResponse, ComponentHandle, PhysicalPosition};
use wikilook_config::popup::PopupConfig;
use wikilook_core::{PopupHost, PopupView};
use wikilook_lookup::{LookupClient, PageSource};
use wikilook_types::{LookupResult, Point, Size};

use crate::PopupWindow;
use crate::document::Document;
use crate::lifetime::{PopupLifetime, close_weak};
use crate::placement::place_on_screen;
use crate::thumbnail::{IMAGE_FAILED, THUMBNAIL_BOUNDS, decode_thumbnail, to_slint_image};

/// Opens lookup popups, sharing one lookup client (and its cache) across all of them
pub struct SlintPopupHost<S> {
    client: LookupClient<S>,
    config: PopupConfig,
}

impl<S: PageSource> SlintPopupHost<S> {
    pub fn new(client: LookupClient<S>, config: PopupConfig) -> Self {
        Self { client, config }
    }

    fn render(&self, window: &PopupWindow, result: &LookupResult) {
        let document = Document::from_result(result);
        window.set_heading(document.heading.into());
        window.set_body(document.body.into());

        let Some(url) = &result.thumbnail_url else {
            window.set_show_image(false);
            return;
        };

        window.set_show_image(true);
        match self.load_thumbnail(url) {
            Ok(image) => window.set_thumbnail(image),
            Err(e) => {
                tracing::warn!("Error loading image {}: {:#}", url, e);
                window.set_image_status(IMAGE_FAILED.into());
            }
        }
    }

    fn load_thumbnail(&self, url: &str) -> Result<slint::Image> {
        let bytes = self
            .client
            .fetch_thumbnail(url)
            .context("Failed to download thumbnail")?;
        let rgba = decode_thumbnail(&bytes, THUMBNAIL_BOUNDS)?;
        Ok(to_slint_image(&rgba))
    }

    fn position(&self, window: &PopupWindow) {
        let Some(cursor) = wikilook_io::cursor_position() else {
            return;
        };

        // The native window does not exist before show(), so its own scale factor
        // is not known yet; the monitor's is
        let screen = wikilook_io::screen_at(cursor);
        let size = Size::new(self.config.width, self.config.height);

        let Point { x, y } = place_on_screen(cursor, size, &screen, self.config.cursor_margin);
        tracing::debug!("Placing popup at ({}, {}) on {:?}", x, y, screen);
        window.window().set_position(PhysicalPosition::new(x, y));
    }
}

impl<S: PageSource> PopupHost for SlintPopupHost<S> {
    type Popup = Popup;

    fn open(&mut self, term: &str) -> Result<Popup> {
        let window = PopupWindow::new().context("Failed to create popup window")?;
        window.set_popup_width(self.config.width as f32);
        window.set_popup_height(self.config.height as f32);
        window.set_loading(true);

        let result = self.client.fetch(term);
        self.render(&window, &result);
        window.set_loading(false);

        self.position(&window);
        window.show().context("Failed to show popup")?;

        tracing::info!("Opened popup for '{}' ({})", term, result.title);
        Ok(Popup::new(window, result.title, self.config.dismiss_after()))
    }
}

/// One live lookup popup. The window is released when the last handle drops.
pub struct Popup {
    lifetime: Rc<PopupLifetime<PopupWindow>>,
}

impl Popup {
    fn new(window: PopupWindow, title: String, dismiss_after: Duration) -> Self {
        let lifetime = PopupLifetime::new(window, title);
        let window = lifetime.surface();

        let on_escape = Rc::downgrade(&lifetime);
        window.on_dismissed(move || close_weak(&on_escape, "dismissed"));

        let on_close = Rc::downgrade(&lifetime);
        window.window().on_close_requested(move || {
            close_weak(&on_close, "close requested");
            CloseRequestResponse::HideWindow
        });

        lifetime.arm(dismiss_after);
        Self { lifetime }
    }
}

impl PopupView for Popup {
    fn close(&mut self) {
        self.lifetime.close();
    }

    fn is_closed(&self) -> bool {
        self.lifetime.is_closed()
    }
}
