//! 认证模块
//!
//! 管理认证状态，与路由系统解耦：路由服务只消费注入的认证信号。
//! 持久化经由 `session::BrowserSession`，状态变更同步可见，
//! 调用返回后守卫立即能观察到新状态。

use hrdesk_shared::Employee;
use leptos::prelude::*;

use crate::session::BrowserSession;

/// 会话状态
#[derive(Clone, Default)]
pub struct SessionState {
    /// bearer token（仅在认证后存在）
    pub token: Option<String>,
    /// 最后已知的当前用户记录
    pub user: Option<Employee>,
    /// 是否已认证
    pub is_authenticated: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState::default());
        Self { state, set_state }
    }

    /// 认证状态信号（注入路由服务用）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated)
    }

    /// 当前用户名（头部展示用）
    pub fn username_signal(&self) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || {
            state
                .get()
                .user
                .map(|u| u.username)
                .unwrap_or_default()
        })
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态
///
/// 从持久化存储恢复会话：token 与用户记录都在才算已认证，
/// 不发起任何网络请求，也不做过期检查。
pub fn init_auth(ctx: &AuthContext) {
    if let Some((token, user)) = BrowserSession::default().restore() {
        ctx.set_state.update(|state| {
            state.token = Some(token);
            state.user = Some(user);
            state.is_authenticated = true;
        });
    }
}

/// 登录：先落盘再更新内存状态
pub fn login(ctx: &AuthContext, token: String, user: Employee) {
    BrowserSession::default().persist(&token, &user);
    ctx.set_state.update(|state| {
        state.token = Some(token);
        state.user = Some(user);
        state.is_authenticated = true;
    });
}

/// 注销：清除持久化条目并重置状态
///
/// 不需要手动导航，路由服务会监听认证状态变化并自动重定向。
pub fn logout(ctx: &AuthContext) {
    BrowserSession::default().clear();
    ctx.set_state.set(SessionState::default());
}
