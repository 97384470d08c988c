//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，所有对 window.history 的操作都集中在此。
//! 导航流程：请求 -> 守卫验证 -> 写入 History -> 更新信号。
//! 认证状态以信号注入，路由层不感知会话的具体实现。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 重定向时使用 replace，避免在历史里留下被拦截的地址
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 通过 Signal 驱动界面更新；认证检查信号由外部注入。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        // 初始路由从 URL 解析；守卫由挂载后的 Effect 立即补上
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到目标路径，途经守卫
    pub fn navigate(&self, route: AppRoute) {
        self.apply(route, true);
    }

    /// 守卫并落地一次导航
    ///
    /// `use_push` 为 true 时写入新历史记录，否则替换当前记录。
    fn apply(&self, target: AppRoute, use_push: bool) {
        let is_auth = self.is_authenticated.get_untracked();

        let resolved = if target.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[router] access denied, redirecting to login".into());
            AppRoute::auth_failure_redirect()
        } else if target.should_redirect_when_authenticated() && is_auth {
            AppRoute::auth_success_redirect()
        } else {
            target
        };

        if use_push {
            push_history_state(resolved.to_path());
        } else {
            replace_history_state(resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// 浏览器后退/前进按钮同样要过守卫
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            if target.requires_auth() && !is_authenticated.get_untracked() {
                let redirect = AppRoute::auth_failure_redirect();
                replace_history_state(redirect.to_path());
                set_route.set(redirect);
            } else {
                set_route.set(target);
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态翻转时自动重定向：
    /// 登录 -> 离开登录页；登出 -> 离开任何受保护页面。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let is_authenticated = self.is_authenticated;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                let redirect = AppRoute::auth_success_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(&"[router] logged in, entering dashboard".into());
            } else if !is_auth && route.requires_auth() {
                let redirect = AppRoute::auth_failure_redirect();
                push_history_state(redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(&"[router] logged out, returning to login".into());
            }
        });
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件，应在 App 根部使用
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件：根据当前路由状态渲染对应的视图
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 导航链接
///
/// 拦截点击走客户端路由；`active_class` 在当前路由命中时附加。
#[component]
pub fn NavLink(
    /// 目标路由
    to: AppRoute,
    /// 基础样式类
    #[prop(into)]
    class: String,
    /// 命中当前路由时附加的样式类
    #[prop(into, optional)]
    active_class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate(to);
    };

    let class_fn = move || {
        if router.current_route().get() == to && !active_class.is_empty() {
            format!("{} {}", class, active_class)
        } else {
            class.clone()
        }
    };

    view! {
        <a href=to.to_path() class=class_fn on:click=on_click>
            {children()}
        </a>
    }
}
