//! `sessview classify` – print the kind of a content URL.

use sessview_core::classify::classify;

pub fn run_classify(url: &str) {
    println!("{}", classify(url));
}
