use std::time::Duration;

use services::{Toast, ToastLevel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastVm {
    pub id: u64,
    pub title: String,
    pub duration: Duration,
    level: ToastLevel,
}

impl ToastVm {
    #[must_use]
    pub fn new(id: u64, toast: Toast) -> Self {
        Self {
            id,
            title: toast.title,
            duration: toast.duration,
            level: toast.level,
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.level {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}
