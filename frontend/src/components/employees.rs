use crate::api::use_api;
use crate::components::employee_form::{EmployeeFormDialog, EmployeeSubmit};
use crate::components::icons::{Pencil, Plus, Trash2};
use crate::components::toast::use_toast;
use crate::query::{Mutation, QueryKey, ResourceTag, use_query_client};
use hrdesk_shared::{Employee, EmployeeRole};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let api = use_api();
    let client = use_query_client();
    let toast = use_toast();

    let modal_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Employee>::None);

    let (employees, set_employees) = signal(Vec::<Employee>::new());
    let (loading, set_loading) = signal(true);

    // 初始加载；增删改使缓存失效后由 epoch 触发重拉
    Effect::new({
        let client = client.clone();
        let api = api.clone();
        move |_| {
            client.track(ResourceTag::Employees);
            let client = client.clone();
            let api = api.clone();
            set_loading.set(true);
            spawn_local(async move {
                if let Some(cached) = client.get::<Vec<Employee>>(&QueryKey::Employees) {
                    set_employees.set((*cached).clone());
                    set_loading.set(false);
                    return;
                }
                match api.list_employees().await {
                    Ok(list) => {
                        client.insert(QueryKey::Employees, list.clone());
                        set_employees.set(list);
                    }
                    Err(e) => {
                        web_sys::console::error_1(&format!("[employees] {}", e).into());
                        toast.error("Failed to load employees.");
                    }
                }
                set_loading.set(false);
            });
        }
    });

    let on_submit = {
        let api = api.clone();
        let client = client.clone();
        move |submission: EmployeeSubmit| {
            let api = api.clone();
            let client = client.clone();
            spawn_local(async move {
                match submission {
                    EmployeeSubmit::Create(body) => match api.create_employee(&body).await {
                        Ok(()) => {
                            client.invalidate(Mutation::CreateEmployee);
                            toast.success("Employee added successfully!");
                        }
                        Err(_) => toast.error("Failed to add employee."),
                    },
                    EmployeeSubmit::Update { id, body } => {
                        match api.update_employee(id, &body).await {
                            Ok(()) => {
                                client.invalidate(Mutation::UpdateEmployee);
                                toast.success("Employee updated successfully!");
                            }
                            Err(_) => toast.error("Failed to update employee."),
                        }
                    }
                }
            });
        }
    };

    let on_delete = {
        let api = api.clone();
        let client = client.clone();
        move |id: i64| {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete this employee?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let api = api.clone();
            let client = client.clone();
            spawn_local(async move {
                match api.delete_employee(id).await {
                    Ok(()) => {
                        client.invalidate(Mutation::DeleteEmployee);
                        toast.success("Employee deleted successfully!");
                    }
                    Err(_) => toast.error("Failed to delete employee."),
                }
            });
        }
    };

    let role_badge = |role: EmployeeRole| match role {
        EmployeeRole::Hr => "badge badge-success",
        EmployeeRole::Normal => "badge badge-ghost",
    };

    view! {
        <div class="space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold">"Employees"</h1>
                <button
                    class="btn btn-primary gap-2"
                    on:click=move |_| {
                        editing.set(None);
                        modal_open.set(true);
                    }
                >
                    <Plus attr:class="h-5 w-5" />
                    "Add Employee"
                </button>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body p-0 overflow-x-auto">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"Name"</th>
                                <th>"Email"</th>
                                <th>"Type"</th>
                                <th class="text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || loading.get()>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        <span class="loading loading-spinner loading-md"></span>
                                        " Loading employees..."
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=move || employees.get()
                                key=|employee| employee.id
                                children={
                                    let on_delete = on_delete.clone();
                                    move |employee: Employee| {
                                        let on_delete = on_delete.clone();
                                        let row = employee.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="text-sm font-medium">{employee.full_name()}</div>
                                                    <div class="text-sm text-base-content/50">{employee.username.clone()}</div>
                                                </td>
                                                <td class="text-sm text-base-content/70">{employee.email.clone()}</td>
                                                <td>
                                                    <span class=role_badge(employee.employee_type)>
                                                        {employee.employee_type.as_str()}
                                                    </span>
                                                </td>
                                                <td class="text-right">
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-info"
                                                        on:click=move |_| {
                                                            editing.set(Some(row.clone()));
                                                            modal_open.set(true);
                                                        }
                                                    >
                                                        <Pencil attr:class="h-5 w-5" />
                                                    </button>
                                                    <button
                                                        class="btn btn-ghost btn-sm btn-square text-error"
                                                        on:click=move |_| on_delete(employee.id)
                                                    >
                                                        <Trash2 attr:class="h-5 w-5" />
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

            <EmployeeFormDialog open=modal_open editing=editing on_submit=on_submit />
        </div>
    }
}
