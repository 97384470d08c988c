//! 认证后视图的外壳：侧边栏 + 头部 + 内容区
//!
//! HR 与 NORMAL 用户看到完全相同的导航与能力，客户端不做角色区分。

use crate::auth::{logout, use_auth};
use crate::components::icons::{Building2, CalendarDays, Home, LogOut, UserRound, Users};
use crate::web::route::AppRoute;
use crate::web::router::NavLink;
use leptos::prelude::*;

#[component]
fn Sidebar() -> impl IntoView {
    let link_class = "flex items-center gap-3 px-4 py-2 text-sm font-medium rounded-md text-base-content/70 hover:bg-base-200";
    let active_class = "bg-base-200 text-base-content";

    view! {
        <aside class="w-64 bg-base-100 shadow-sm min-h-screen shrink-0">
            <div class="h-16 flex items-center gap-2 px-4 border-b border-base-200">
                <Building2 attr:class="h-8 w-8 text-primary" />
                <h1 class="text-xl font-semibold">"HR System"</h1>
            </div>
            <nav class="px-2 pt-3 space-y-1">
                <NavLink to=AppRoute::Dashboard class=link_class active_class=active_class>
                    <Home attr:class="h-5 w-5" />
                    "Dashboard"
                </NavLink>
                <NavLink to=AppRoute::Employees class=link_class active_class=active_class>
                    <Users attr:class="h-5 w-5" />
                    "Employees"
                </NavLink>
                <NavLink to=AppRoute::Attendance class=link_class active_class=active_class>
                    <CalendarDays attr:class="h-5 w-5" />
                    "Attendance"
                </NavLink>
            </nav>
        </aside>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = use_auth();
    let username = auth.username_signal();

    // 登出后的跳转由路由服务的认证监听处理
    let on_logout = move |_| logout(&auth);

    view! {
        <header class="bg-base-100 shadow-sm">
            <div class="px-8 h-16 flex items-center justify-end gap-4">
                <div class="flex items-center gap-2">
                    <UserRound attr:class="w-5 h-5 text-base-content/50" />
                    <span class="text-base-content/80">{username}</span>
                </div>
                <button on:click=on_logout class="btn btn-ghost btn-sm gap-2">
                    <LogOut attr:class="w-5 h-5" />
                    "Logout"
                </button>
            </div>
        </header>
    }
}

/// 认证后页面的统一框架
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <div class="flex">
                <Sidebar />
                <div class="flex-1 flex flex-col">
                    <Header />
                    <main class="flex-1 p-8">{children()}</main>
                </div>
            </div>
        </div>
    }
}
