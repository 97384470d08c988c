//! 瞬态通知
//!
//! 所有拉取/变更失败都折叠成一条通用提示；成功操作给一条确认。
//! 提示 3 秒后自动消失。每条通知带递增 id，定时器只清除
//! 自己对应的那条，后来的通知不会被先前的定时器提前关掉。

use leptos::prelude::*;

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub text: String,
    pub is_error: bool,
}

/// 通知上下文，在 App 根部提供
#[derive(Clone, Copy)]
pub struct ToastContext {
    message: ReadSignal<Option<Toast>>,
    set_message: WriteSignal<Option<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (message, set_message) = signal(Option::<Toast>::None);
        Self {
            message,
            set_message,
            next_id: RwSignal::new(0),
        }
    }

    fn push(&self, text: String, is_error: bool) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.set_message.set(Some(Toast { id, text, is_error }));
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(text.into(), false);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.push(text.into(), true);
    }
}

/// 从 Context 获取通知上下文
pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// 定时器到点时是否还轮得到它清除当前通知
fn timer_should_dismiss(current: Option<&Toast>, scheduled_id: u64) -> bool {
    current.is_some_and(|toast| toast.id == scheduled_id)
}

/// 通知展示组件，挂在 App 根部
#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_toast();
    let message = ctx.message;
    let set_message = ctx.set_message;

    // 每条通知 3 秒后清除；期间被新通知顶掉则交给新通知的定时器
    Effect::new(move |_| {
        if let Some(current) = message.get() {
            let scheduled_id = current.id;
            set_timeout(
                move || {
                    if timer_should_dismiss(message.get_untracked().as_ref(), scheduled_id) {
                        set_message.set(None);
                    }
                },
                std::time::Duration::from_secs(3),
            );
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if message.get().map(|m| m.is_error).unwrap_or(false) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || message.get().map(|m| m.text).unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64) -> Toast {
        Toast {
            id,
            text: "saved".to_string(),
            is_error: false,
        }
    }

    #[test]
    fn timer_only_dismisses_the_toast_it_was_scheduled_for() {
        assert!(timer_should_dismiss(Some(&toast(1)), 1));
        assert!(!timer_should_dismiss(None, 1));
    }

    #[test]
    fn stale_timer_leaves_a_newer_toast_alone() {
        // 旧通知的定时器到点时已有新通知在展示
        assert!(!timer_should_dismiss(Some(&toast(2)), 1));
    }
}
