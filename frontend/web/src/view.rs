use submit::View;
use tracing::warn;
use web_sys::{Element, Window};

/// The submit control and result region of the prediction page.
pub struct DomView {
    window: Window,
    submit: Element,
    result: Element,
}

impl DomView {
    pub fn new(window: Window, submit: Element, result: Element) -> Self {
        Self {
            window,
            submit,
            result,
        }
    }
}

impl View for DomView {
    fn set_submit(&self, enabled: bool, label: &str) {
        let toggled = if enabled {
            self.submit.remove_attribute("disabled")
        } else {
            self.submit.set_attribute("disabled", "")
        };

        if let Err(e) = toggled {
            warn!("Failed to toggle submit control: {e:?}");
        }

        self.submit.set_text_content(Some(label));
    }

    fn show_result(&self, html: &str) {
        self.result.set_inner_html(html);
    }

    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            warn!("Failed to show notification: {e:?}");
        }
    }
}
