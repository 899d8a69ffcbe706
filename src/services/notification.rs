//! User notification sink
//! Generic "notify the user" seam; host applications supply the real
//! surface (toast, banner, status bar). This crate only hands it strings.

/// Notification sink consumed by flows that must surface failures.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Default sink that forwards notifications to the log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::warn!("[notify] {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_notifier_accepts_any_message() {
        // Must never panic, whatever the content.
        LogNotifier.notify("");
        LogNotifier.notify("profile update failed");
    }
}
