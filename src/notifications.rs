// ============================================================================
// NOTIFICATIONS - User-facing toasts
// ============================================================================
// The globe only knows the Notifier trait; the Yew toaster implements it.
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastVariant::Default => "toast",
            ToastVariant::Destructive => "toast toast--destructive",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: ToastVariant::Default,
        }
    }
}

/// Sink for toasts
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Fallback used when no toaster is mounted
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Destructive => log::error!("❌ {}: {}", toast.title, toast.description),
            ToastVariant::Default => log::info!("🔔 {}: {}", toast.title, toast.description),
        }
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;

    use super::{Notifier, Toast};

    #[derive(Default)]
    pub struct RecordingNotifier {
        toasts: RefCell<Vec<Toast>>,
    }

    impl RecordingNotifier {
        pub fn toasts(&self) -> Vec<Toast> {
            self.toasts.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }
}
