use crate::api::use_api;
use crate::components::icons::{CalendarDays, Check, Download, Filter, XMark};
use crate::components::toast::use_toast;
use crate::query::{Mutation, QueryKey, ResourceTag, use_query_client};
use crate::web;
use hrdesk_shared::{
    Attendance, AttendanceStatus, Employee, MarkAction, Period, attendance::find_record,
    attendance::plan_mark, date::is_valid_date, export_filename,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn AttendancePage() -> impl IntoView {
    let api = use_api();
    let client = use_query_client();
    let toast = use_toast();

    let (selected_date, set_selected_date) = signal(web::today_iso_date());
    let (selected_period, set_selected_period) = signal(Period::Day);

    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (loading_employees, set_loading_employees) = signal(true);
    let (attendances, set_attendances) = signal(Vec::<Attendance>::new());
    let (loading_attendance, set_loading_attendance) = signal(true);

    // 初始加载员工名册；epoch 被失效时重新拉取
    Effect::new({
        let client = client.clone();
        let api = api.clone();
        move |_| {
            client.track(ResourceTag::Employees);
            let client = client.clone();
            let api = api.clone();
            set_loading_employees.set(true);
            spawn_local(async move {
                if let Some(cached) = client.get::<Vec<Employee>>(&QueryKey::Employees) {
                    set_employees.set((*cached).clone());
                    set_loading_employees.set(false);
                    return;
                }
                match api.list_employees().await {
                    Ok(list) => {
                        client.insert(QueryKey::Employees, list.clone());
                        set_employees.set(list);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[attendance] {}", e).into());
                        toast.error("Failed to load employees.");
                    }
                }
                set_loading_employees.set(false);
            });
        }
    });

    // 日期或周期变化即换键重新拉取；不取消在途请求，
    // 以最后落地的响应为准
    Effect::new({
        let client = client.clone();
        let api = api.clone();
        move |_| {
            client.track(ResourceTag::Attendance);
            let date = selected_date.get();
            let period = selected_period.get();
            // 日期输入编辑到一半时值不完整，不发请求
            if !is_valid_date(&date) {
                set_attendances.set(Vec::new());
                set_loading_attendance.set(false);
                return;
            }
            let client = client.clone();
            let api = api.clone();
            set_loading_attendance.set(true);
            spawn_local(async move {
                let key = QueryKey::Attendance {
                    date: date.clone(),
                    period,
                };
                if let Some(cached) = client.get::<Vec<Attendance>>(&key) {
                    set_attendances.set((*cached).clone());
                    set_loading_attendance.set(false);
                    return;
                }
                match api.list_attendance(&date, period).await {
                    Ok(list) => {
                        client.insert(key, list.clone());
                        set_attendances.set(list);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[attendance] {}", e).into());
                        toast.error("Failed to load attendance.");
                    }
                }
                set_loading_attendance.set(false);
            });
        }
    });

    // 无记录 -> 创建；有记录 -> 按记录 id 更新出勤标志
    let handle_mark = {
        let api = api.clone();
        let client = client.clone();
        move |employee_id: i64, existing: Option<Attendance>, is_present: bool| {
            let date = selected_date.get_untracked();
            if !is_valid_date(&date) {
                return;
            }
            let action = plan_mark(employee_id, &date, existing.as_ref(), is_present);
            let api = api.clone();
            let client = client.clone();
            spawn_local(async move {
                let (result, success_msg, error_msg) = match action {
                    MarkAction::Create(body) => (
                        api.create_attendance(&body).await,
                        "Attendance marked successfully!",
                        "Failed to mark attendance.",
                    ),
                    MarkAction::Update { id, body } => (
                        api.update_attendance(id, &body).await,
                        "Attendance updated successfully!",
                        "Failed to update attendance.",
                    ),
                };
                match result {
                    Ok(()) => {
                        client.invalidate(Mutation::MarkAttendance);
                        toast.success(success_msg);
                    }
                    Err(_) => toast.error(error_msg),
                }
            });
        }
    };

    let handle_export = {
        let api = api.clone();
        move |_| {
            let date = selected_date.get_untracked();
            if !is_valid_date(&date) {
                toast.error("Failed to export attendance.");
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                let period = selected_period.get_untracked();
                match api.export_attendance(&date, period).await {
                    Ok(bytes) => {
                        let filename = export_filename(period, &date);
                        match web::save_bytes(&bytes, &filename, "text/csv") {
                            Ok(()) => toast.success("Attendance exported successfully!"),
                            Err(e) => {
                                web_sys::console::error_1(&format!("[export] {}", e).into());
                                toast.error("Failed to export attendance.");
                            }
                        }
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[export] {}", e).into());
                        toast.error("Failed to export attendance.");
                    }
                }
            });
        }
    };

    let status_badge = |status: AttendanceStatus| match status {
        AttendanceStatus::Present => "badge badge-success",
        AttendanceStatus::Absent => "badge badge-error",
        AttendanceStatus::NotMarked => "badge badge-ghost",
    };

    let is_loading = move || loading_employees.get() || loading_attendance.get();

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center flex-wrap gap-4">
                <h1 class="text-2xl font-bold">"Attendance"</h1>
                <div class="flex items-center gap-4">
                    <div class="flex items-center gap-2">
                        <Filter attr:class="h-5 w-5 text-base-content/50" />
                        <select
                            class="select select-bordered select-sm"
                            on:change=move |ev| {
                                if let Some(period) = Period::from_str(&event_target_value(&ev)) {
                                    set_selected_period.set(period);
                                }
                            }
                        >
                            {Period::ALL
                                .into_iter()
                                .map(|period| {
                                    view! {
                                        <option
                                            value=period.as_str()
                                            selected=move || selected_period.get() == period
                                        >
                                            {period.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <div class="flex items-center gap-2">
                        <CalendarDays attr:class="h-5 w-5 text-base-content/50" />
                        <input
                            type="date"
                            class="input input-bordered input-sm"
                            prop:value=selected_date
                            on:input=move |ev| set_selected_date.set(event_target_value(&ev))
                        />
                    </div>

                    <button class="btn btn-primary btn-sm gap-2" on:click=handle_export>
                        <Download attr:class="h-5 w-5" />
                        "Export"
                    </button>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0 overflow-x-auto">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"Employee"</th>
                                <th>"Status"</th>
                                <th class="text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=is_loading>
                                <tr>
                                    <td colspan="3" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Loading attendance..."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id
                                children={
                                    let handle_mark = handle_mark.clone();
                                    move |employee: Employee| {
                                        let employee_id = employee.id;
                                        let record = Signal::derive(move || {
                                            find_record(&attendances.get(), employee_id).cloned()
                                        });
                                        let status = move || AttendanceStatus::of(record.get().as_ref());
                                        let mark_present = {
                                            let handle_mark = handle_mark.clone();
                                            move |_| handle_mark(employee_id, record.get_untracked(), true)
                                        };
                                        let mark_absent = {
                                            let handle_mark = handle_mark.clone();
                                            move |_| handle_mark(employee_id, record.get_untracked(), false)
                                        };
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="text-sm font-medium">{employee.full_name()}</div>
                                                    <div class="text-sm text-base-content/50">{employee.email.clone()}</div>
                                                </td>
                                                <td>
                                                    <span class=move || status_badge(status())>
                                                        {move || status().label()}
                                                    </span>
                                                </td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-success"
                                                        disabled=move || !status().can_mark_present()
                                                        on:click=mark_present
                                                    >
                                                        <Check attr:class="h-5 w-5" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        disabled=move || !status().can_mark_absent()
                                                        on:click=mark_absent
                                                    >
                                                        <XMark attr:class="h-5 w-5" />
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
