//! Analytics
//!
//! Page-visit logging to the browser console. Centralized so a real
//! analytics sink can replace the console later.

use crate::context::Page;

pub fn page_name(page: &Page) -> &'static str {
    match page {
        Page::Home => "Home Page",
        Page::NewTask | Page::EditTask(_) => "Task Management Page",
    }
}

#[cfg(target_arch = "wasm32")]
pub fn log_page_visit(page_name: &str) {
    web_sys::console::log_1(&format!("User visited: {page_name}").into());
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_page_visit(_page_name: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_map_to_display_names() {
        assert_eq!(page_name(&Page::Home), "Home Page");
        assert_eq!(page_name(&Page::NewTask), "Task Management Page");
        assert_eq!(
            page_name(&Page::EditTask(Some("1".into()))),
            "Task Management Page"
        );
    }
}
