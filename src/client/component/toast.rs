use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            ToastKind::Success => "alert alert-success",
            ToastKind::Info => "alert alert-info",
            ToastKind::Warning => "alert alert-warning",
            ToastKind::Error => "alert alert-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastData {
    pub heading: String,
    pub message: String,
    pub kind: ToastKind,
    pub duration_ms: u32,
}

/// Transient notification queue, provided as a context at the app root.
/// Each toast removes itself after its duration.
#[derive(Clone, Copy)]
pub struct Toasts {
    entries: Signal<Vec<(u64, ToastData)>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            entries: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    fn push(&mut self, kind: ToastKind, heading: String, message: String, duration_ms: u32) {
        let id = {
            let mut next_id = self.next_id.write();
            *next_id += 1;
            *next_id
        };

        self.entries.write().push((
            id,
            ToastData {
                heading,
                message,
                kind,
                duration_ms,
            },
        ));

        let mut entries = self.entries;
        spawn(async move {
            TimeoutFuture::new(duration_ms).await;
            entries.write().retain(|(entry_id, _)| *entry_id != id);
        });
    }

    pub fn success(
        &mut self,
        heading: impl Into<String>,
        message: impl Into<String>,
        duration_ms: u32,
    ) {
        self.push(ToastKind::Success, heading.into(), message.into(), duration_ms);
    }

    pub fn info(
        &mut self,
        heading: impl Into<String>,
        message: impl Into<String>,
        duration_ms: u32,
    ) {
        self.push(ToastKind::Info, heading.into(), message.into(), duration_ms);
    }

    pub fn warning(
        &mut self,
        heading: impl Into<String>,
        message: impl Into<String>,
        duration_ms: u32,
    ) {
        self.push(ToastKind::Warning, heading.into(), message.into(), duration_ms);
    }

    pub fn error(
        &mut self,
        heading: impl Into<String>,
        message: impl Into<String>,
        duration_ms: u32,
    ) {
        self.push(ToastKind::Error, heading.into(), message.into(), duration_ms);
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_context::<Toasts>();
    let entries = (toasts.entries)();

    rsx!(
        div {
            class: "toast toast-end z-50",
            for (id, toast) in entries {
                div {
                    key: "{id}",
                    class: toast.kind.alert_class(),
                    div {
                        p {
                            class: "font-bold",
                            "{toast.heading}"
                        }
                        p {
                            class: "text-sm",
                            "{toast.message}"
                        }
                    }
                }
            }
        }
    )
}
