//! `sessview title` – print a normalized title.

use sessview_core::title::normalize_title;

pub fn run_title(raw: &str) {
    println!("{}", normalize_title(raw));
}
