//! hrdesk 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与路由服务（访问守卫在此）
//! - `session` / `auth`: 会话持久化与认证状态管理
//! - `api`: HTTP API 客户端（bearer token 请求拦截）
//! - `query`: 服务端状态缓存与失效
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod attendance;
    pub mod dashboard;
    mod employee_form;
    pub mod employees;
    mod icons;
    pub mod layout;
    pub mod login;
    pub mod toast;
}
mod query;
mod session;

// 原生 Web API 封装模块
pub(crate) mod web;

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::{AuthContext, init_auth};
use crate::components::attendance::AttendancePage;
use crate::components::dashboard::DashboardPage;
use crate::components::employees::EmployeesPage;
use crate::components::layout::AppShell;
use crate::components::login::LoginPage;
use crate::components::toast::{ToastContext, Toaster};
use crate::query::QueryClient;
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 登录页裸渲染；受保护视图统一包在 AppShell 框架里。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Dashboard => view! {
            <AppShell>
                <DashboardPage />
            </AppShell>
        }
        .into_any(),
        AppRoute::Employees => view! {
            <AppShell>
                <EmployeesPage />
            </AppShell>
        }
        .into_any(),
        AppRoute::Attendance => view! {
            <AppShell>
                <AttendancePage />
            </AppShell>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 全局上下文：通知、认证、API 客户端、查询缓存
    let toast_ctx = ToastContext::new();
    provide_context(toast_ctx);

    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 同步恢复持久化会话（不发网络请求）
    init_auth(&auth_ctx);

    provide_context(ApiClient::default());
    provide_context(QueryClient::new());

    // 3. 认证信号注入路由服务，守卫与会话实现解耦
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Toaster />
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
