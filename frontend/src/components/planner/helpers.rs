//! Browser utilities for the planner component.
//!
//! - **Time**: `now_ms` feeds the drag session's touch hold threshold.
//! - **Hit testing**: `cell_at_point` finds the grid cell under a lifted finger,
//!   since touch events keep targeting the element where the touch started.
//! - **User feedback**: `show_toast` shows short, self-removing notifications
//!   for failed saves and rejected input, styled by `style.css`.

use common::model::assignment::CellKey;
use common::model::vacation::VacationType;

/// Attribute holding a grid cell's year.
pub const YEAR_ATTR: &str = "data-year";
/// Attribute holding a grid cell's vacation-type slug.
pub const VACATION_ATTR: &str = "data-vacation";
/// How long a toast stays on screen.
const TOAST_MS: u32 = 3_000;

/// Milliseconds since the epoch, as reported by the browser.
pub fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

/// Returns the grid cell rendered at viewport coordinates `(x, y)`, if any.
pub fn cell_at_point(x: i32, y: i32) -> Option<CellKey> {
    let document = web_sys::window()?.document()?;
    let element = document.element_from_point(x as f32, y as f32)?;
    let cell = element.closest(&format!("[{}]", YEAR_ATTR)).ok()??;
    let year = cell.get_attribute(YEAR_ATTR)?.parse().ok()?;
    let vacation_type = cell.get_attribute(VACATION_ATTR)?.parse::<VacationType>().ok()?;
    Some(CellKey::new(year, vacation_type))
}

/// Appends a `.toast` notification to `<body>` and removes it after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            toast.remove();
        });
    }
}
