/// Transient floating notification shown after form submissions.
/// Every call creates its own element; concurrent toasts stack and each
/// one leaves on its own timer.
use std::time::Duration;

use gloo_timers::future::sleep;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

const DISPLAY_FOR: Duration = Duration::from_secs(5);
const EXIT_AFTER: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
        }
    }
}

/// Appends a toast to `<body>` and schedules its removal: visible for
/// 5 seconds, then the exit transition, then the element is dropped.
pub fn show_toast(kind: ToastKind, message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let element = match document.create_element("div") {
        Ok(element) => element,
        Err(_) => return,
    };

    element.set_id(&format!("toast-{}", Uuid::new_v4()));
    element.set_class_name(kind.class());
    element.set_text_content(Some(message));
    let _ = body.append_child(&element);

    spawn_local(async move {
        sleep(DISPLAY_FOR).await;
        element.set_class_name(&format!("{} toast-exit", kind.class()));
        sleep(EXIT_AFTER).await;
        element.remove();
    });
}
