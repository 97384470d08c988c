use crate::api::use_api;
use crate::components::icons::{UserCheck, UserX, Users};
use crate::components::toast::use_toast;
use crate::query::{QueryKey, ResourceTag, use_query_client};
use hrdesk_shared::{DashboardStats, date::format_timestamp};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn StatCard(title: &'static str, value: Signal<u32>, children: Children) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 rounded-box shadow">
            <div class="stat-figure text-primary">{children()}</div>
            <div class="stat-title">{title}</div>
            <div class="stat-value">{value}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let client = use_query_client();
    let toast = use_toast();

    // 快照由服务端整体重算，客户端只缓存与展示
    let (stats, set_stats) = signal(Option::<DashboardStats>::None);

    let load_stats = {
        let api = api.clone();
        let client = client.clone();
        move || {
            let api = api.clone();
            let client = client.clone();
            spawn_local(async move {
                if let Some(cached) = client.get::<DashboardStats>(&QueryKey::Dashboard) {
                    set_stats.set(Some((*cached).clone()));
                    return;
                }
                match api.dashboard_stats().await {
                    Ok(data) => {
                        client.insert(QueryKey::Dashboard, data.clone());
                        set_stats.set(Some(data));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[dashboard] {}", e).into());
                        toast.error("Failed to load dashboard.");
                    }
                }
            });
        }
    };

    // 初始加载；epoch 被失效时重新拉取
    Effect::new({
        let client = client.clone();
        let load_stats = load_stats.clone();
        move |_| {
            client.track(ResourceTag::Dashboard);
            load_stats();
        }
    });

    let stat = move |pick: fn(&DashboardStats) -> u32| {
        Signal::derive(move || stats.get().map(|s| pick(&s)).unwrap_or(0))
    };
    let total = stat(|s| s.total_employees);
    let present = stat(|s| s.present_today);
    let absent = stat(|s| s.absent_today);

    view! {
        <div class="space-y-6">
            <h1 class="text-2xl font-bold">"Dashboard"</h1>

            <Show
                when=move || stats.get().is_some()
                fallback=|| view! {
                    <div class="flex items-center justify-center py-16">
                        <span class="loading loading-spinner loading-lg text-primary"></span>
                        <span class="ml-3 text-base-content/50">"Loading dashboard..."</span>
                    </div>
                }
            >
                <div class="grid grid-cols-1 gap-5 sm:grid-cols-3">
                    <StatCard title="Total Employees" value=total>
                        <Users attr:class="h-8 w-8" />
                    </StatCard>
                    <StatCard title="Present Today" value=present>
                        <UserCheck attr:class="h-8 w-8 text-success" />
                    </StatCard>
                    <StatCard title="Absent Today" value=absent>
                        <UserX attr:class="h-8 w-8 text-error" />
                    </StatCard>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title">"Recent Activities"</h3>
                        <Show when=move || stats.get().map(|s| s.recent_activities.is_empty()).unwrap_or(true)>
                            <p class="text-base-content/50 py-4">"No recent activity."</p>
                        </Show>
                        <ul class="divide-y divide-base-200">
                            <For
                                each=move || stats.get().map(|s| s.recent_activities).unwrap_or_default()
                                key=|activity| activity.id
                                children=move |activity| {
                                    view! {
                                        <li class="py-4">
                                            <p class="text-sm font-medium">{activity.description}</p>
                                            <p class="text-sm text-base-content/50">
                                                {format_timestamp(&activity.timestamp)}
                                            </p>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                </div>
            </Show>
        </div>
    }
}
