//! Ready-made output sinks for [`BitSet::print`](crate::BitSet::print).
//!
//! Any `FnOnce(&str)` works as a sink; these cover the common destinations.

use alloc::string::String;

/// Writes `text` and a trailing newline to standard output.
#[cfg(feature = "std")]
pub fn stdout(text: &str) {
    std::println!("{}", text);
}

/// Returns a sink that stores the text in `buffer`, replacing its contents.
pub fn capture(buffer: &mut String) -> impl FnOnce(&str) + '_ {
    move |text| {
        buffer.clear();
        buffer.push_str(text);
    }
}

/// Returns a sink that forwards the text to the `log` facade at info level.
pub fn log_info(target: &str) -> impl FnOnce(&str) + '_ {
    move |text| log::info!(target: target, "{}", text)
}
