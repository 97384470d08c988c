//! 员工表单模态框
//!
//! 创建与编辑复用同一个表单，由是否传入既有员工区分：
//! 编辑时隐藏密码输入，提交走按 id 更新；创建时采集密码。
//! 两种提交走各自的强类型载荷，更新载荷在类型上就没有密码字段。

use crate::components::icons::XMark;
use hrdesk_shared::{CreateEmployeeRequest, Employee, EmployeeRole, UpdateEmployeeRequest};
use leptos::prelude::*;

/// 表单提交结果：创建或按 id 更新
#[derive(Clone)]
pub enum EmployeeSubmit {
    Create(CreateEmployeeRequest),
    Update { id: i64, body: UpdateEmployeeRequest },
}

/// 表单状态结构体
///
/// 将零散的 signal 整合为一个 `Copy` 结构体，负责数据的持有、
/// 重置/预填，以及到请求载荷的转换。
#[derive(Clone, Copy)]
struct FormState {
    username: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    employee_type: RwSignal<EmployeeRole>,
}

impl FormState {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            employee_type: RwSignal::new(EmployeeRole::Normal),
        }
    }

    fn reset(&self) {
        self.username.set(String::new());
        self.email.set(String::new());
        self.password.set(String::new());
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.employee_type.set(EmployeeRole::Normal);
    }

    /// 编辑时用既有记录预填；密码永远不预填
    fn load(&self, employee: &Employee) {
        self.username.set(employee.username.clone());
        self.email.set(employee.email.clone());
        self.password.set(String::new());
        self.first_name.set(employee.first_name.clone());
        self.last_name.set(employee.last_name.clone());
        self.employee_type.set(employee.employee_type);
    }

    fn create_request(&self) -> CreateEmployeeRequest {
        CreateEmployeeRequest {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            employee_type: self.employee_type.get_untracked(),
        }
    }

    fn update_request(&self) -> UpdateEmployeeRequest {
        UpdateEmployeeRequest {
            username: self.username.get_untracked(),
            email: self.email.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            employee_type: self.employee_type.get_untracked(),
        }
    }
}

#[component]
pub fn EmployeeFormDialog(
    /// 模态框开关
    open: RwSignal<bool>,
    /// 编辑对象；`None` 表示创建
    #[prop(into)]
    editing: Signal<Option<Employee>>,
    /// 提交回调
    #[prop(into)]
    on_submit: Callback<EmployeeSubmit>,
) -> impl IntoView {
    let form = FormState::new();
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let is_editing = move || editing.get().is_some();

    // 打开时同步编辑对象到表单
    Effect::new(move |_| {
        if open.get() {
            match editing.get_untracked() {
                Some(employee) => form.load(&employee),
                None => form.reset(),
            }
        }
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let submission = match editing.get_untracked() {
            Some(employee) => EmployeeSubmit::Update {
                id: employee.id,
                body: form.update_request(),
            },
            None => EmployeeSubmit::Create(form.create_request()),
        };
        on_submit.run(submission);
        open.set(false);
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <div class="flex items-center justify-between">
                    <h3 class="font-bold text-lg">
                        {move || if is_editing() { "Edit Employee" } else { "Add Employee" }}
                    </h3>
                    <button class="btn btn-ghost btn-sm btn-square" on:click=move |_| open.set(false)>
                        <XMark attr:class="h-5 w-5" />
                    </button>
                </div>

                <form on:submit=submit class="space-y-4 mt-4">
                    <div class="form-control">
                        <label for="username" class="label">
                            <span class="label-text">"Username"</span>
                        </label>
                        <input id="username" required
                            type="text"
                            on:input=move |ev| form.username.set(event_target_value(&ev))
                            prop:value=form.username
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="email" class="label">
                            <span class="label-text">"Email"</span>
                        </label>
                        <input id="email" required
                            type="email"
                            on:input=move |ev| form.email.set(event_target_value(&ev))
                            prop:value=form.email
                            class="input input-bordered w-full"
                        />
                    </div>

                    // 密码只在创建时采集
                    <Show when=move || !is_editing()>
                        <div class="form-control">
                            <label for="password" class="label">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input id="password" required
                                type="password"
                                on:input=move |ev| form.password.set(event_target_value(&ev))
                                prop:value=form.password
                                class="input input-bordered w-full"
                            />
                        </div>
                    </Show>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="first_name" class="label">
                                <span class="label-text">"First Name"</span>
                            </label>
                            <input id="first_name" required
                                type="text"
                                on:input=move |ev| form.first_name.set(event_target_value(&ev))
                                prop:value=form.first_name
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="last_name" class="label">
                                <span class="label-text">"Last Name"</span>
                            </label>
                            <input id="last_name" required
                                type="text"
                                on:input=move |ev| form.last_name.set(event_target_value(&ev))
                                prop:value=form.last_name
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="employee_type" class="label">
                            <span class="label-text">"Employee Type"</span>
                        </label>
                        <select
                            id="employee_type"
                            class="select select-bordered w-full"
                            on:change=move |ev| {
                                let role = EmployeeRole::from_str(&event_target_value(&ev))
                                    .unwrap_or_default();
                                form.employee_type.set(role);
                            }
                        >
                            <option
                                value="NORMAL"
                                selected=move || form.employee_type.get() == EmployeeRole::Normal
                            >
                                "Normal Employee"
                            </option>
                            <option
                                value="HR"
                                selected=move || form.employee_type.get() == EmployeeRole::Hr
                            >
                                "HR"
                            </option>
                        </select>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">
                            {move || if is_editing() { "Update" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
