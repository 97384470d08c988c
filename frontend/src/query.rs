//! 服务端状态缓存
//!
//! 以查询键寻址的结果缓存，配合按变更声明的失效集合：
//! - 读取是幂等且无副作用的，结果按键缓存直到被失效
//! - 变更成功后按逻辑资源整体失效（例如任何考勤变更使
//!   所有已缓存的考勤列表失效，无论当初按哪个日期/周期拉取）
//! - 变更失败时缓存保持原样，不做乐观更新
//!
//! 每个逻辑资源配一个 epoch 信号；视图的加载 `Effect` 读取 epoch
//! 即订阅失效事件，epoch 递增时自动重新拉取。

use hrdesk_shared::Period;
use leptos::prelude::*;
use std::any::Any;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// 逻辑资源：失效的粒度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceTag {
    Employees,
    Attendance,
    Dashboard,
}

impl ResourceTag {
    const COUNT: usize = 3;

    fn index(&self) -> usize {
        match self {
            ResourceTag::Employees => 0,
            ResourceTag::Attendance => 1,
            ResourceTag::Dashboard => 2,
        }
    }
}

/// 查询键：一个键对应一份可缓存的结果
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    Employees,
    Attendance { date: String, period: Period },
    Dashboard,
}

impl QueryKey {
    pub fn tag(&self) -> ResourceTag {
        match self {
            QueryKey::Employees => ResourceTag::Employees,
            QueryKey::Attendance { .. } => ResourceTag::Attendance,
            QueryKey::Dashboard => ResourceTag::Dashboard,
        }
    }
}

/// 变更操作及其失效集合
///
/// 失效集合在此处静态声明，而不是在调用点临时推断。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    CreateEmployee,
    UpdateEmployee,
    DeleteEmployee,
    MarkAttendance,
}

impl Mutation {
    pub fn invalidates(&self) -> &'static [ResourceTag] {
        match self {
            Mutation::CreateEmployee | Mutation::UpdateEmployee | Mutation::DeleteEmployee => {
                &[ResourceTag::Employees]
            }
            Mutation::MarkAttendance => &[ResourceTag::Attendance],
        }
    }
}

type EntryMap = HashMap<QueryKey, Arc<dyn Any + Send + Sync>>;

/// 查询缓存客户端
///
/// `Clone` 后共享同一份缓存；放入 Context 供所有视图使用。
#[derive(Clone)]
pub struct QueryClient {
    entries: Arc<Mutex<EntryMap>>,
    epochs: [ArcRwSignal<u64>; ResourceTag::COUNT],
}

impl Default for QueryClient {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryClient {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            epochs: std::array::from_fn(|_| ArcRwSignal::new(0)),
        }
    }

    /// 在响应式上下文中读取 epoch，即订阅该资源的失效事件
    pub fn track(&self, tag: ResourceTag) {
        self.epochs[tag.index()].track();
    }

    /// 当前 epoch 值（测试与诊断用）
    pub fn epoch(&self, tag: ResourceTag) -> u64 {
        self.epochs[tag.index()].get_untracked()
    }

    /// 读取缓存条目
    pub fn get<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let entries = self.entries.lock().ok()?;
        let entry = entries.get(key)?.clone();
        entry.downcast::<T>().ok()
    }

    /// 写入缓存条目（成功拉取后调用）
    pub fn insert<T: Send + Sync + 'static>(&self, key: QueryKey, value: T) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key, Arc::new(value));
        }
    }

    /// 是否存在某个键的缓存
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries
            .lock()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }

    /// 按变更声明的失效集合作废缓存并通知订阅者
    pub fn invalidate(&self, mutation: Mutation) {
        for tag in mutation.invalidates() {
            self.invalidate_tag(*tag);
        }
    }

    fn invalidate_tag(&self, tag: ResourceTag) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.retain(|key, _| key.tag() != tag);
        }
        self.epochs[tag.index()].update(|epoch| *epoch += 1);
    }
}

/// 从 Context 获取查询缓存
pub fn use_query_client() -> QueryClient {
    use_context::<QueryClient>().expect("QueryClient should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_shared::Employee;

    fn attendance_key(date: &str, period: Period) -> QueryKey {
        QueryKey::Attendance {
            date: date.to_string(),
            period,
        }
    }

    #[test]
    fn cached_values_come_back_typed() {
        let client = QueryClient::new();
        client.insert(QueryKey::Employees, Vec::<Employee>::new());

        let cached = client.get::<Vec<Employee>>(&QueryKey::Employees);
        assert!(cached.is_some_and(|v| v.is_empty()));
        assert!(client.get::<Vec<Employee>>(&QueryKey::Dashboard).is_none());
    }

    #[test]
    fn period_change_addresses_a_different_key_with_the_same_date() {
        let day = attendance_key("2024-03-01", Period::Day);
        let month = attendance_key("2024-03-01", Period::Month);
        assert_ne!(day, month);
        assert_eq!(day.tag(), month.tag());

        let client = QueryClient::new();
        client.insert(day.clone(), vec![1u32]);
        assert!(client.contains(&day));
        assert!(!client.contains(&month));
    }

    #[test]
    fn attendance_mutation_drops_every_attendance_entry_regardless_of_filter() {
        let client = QueryClient::new();
        client.insert(attendance_key("2024-03-01", Period::Day), vec![1u32]);
        client.insert(attendance_key("2024-02-01", Period::Month), vec![2u32]);
        client.insert(QueryKey::Employees, vec![3u32]);

        client.invalidate(Mutation::MarkAttendance);

        assert!(!client.contains(&attendance_key("2024-03-01", Period::Day)));
        assert!(!client.contains(&attendance_key("2024-02-01", Period::Month)));
        assert!(client.contains(&QueryKey::Employees));
    }

    #[test]
    fn employee_mutations_leave_attendance_and_dashboard_untouched() {
        for mutation in [
            Mutation::CreateEmployee,
            Mutation::UpdateEmployee,
            Mutation::DeleteEmployee,
        ] {
            let client = QueryClient::new();
            client.insert(QueryKey::Employees, vec![1u32]);
            client.insert(QueryKey::Dashboard, vec![2u32]);
            client.insert(attendance_key("2024-03-01", Period::Day), vec![3u32]);

            client.invalidate(mutation);

            assert!(!client.contains(&QueryKey::Employees));
            assert!(client.contains(&QueryKey::Dashboard));
            assert!(client.contains(&attendance_key("2024-03-01", Period::Day)));
        }
    }

    #[test]
    fn invalidation_bumps_only_the_affected_epoch() {
        let client = QueryClient::new();
        assert_eq!(client.epoch(ResourceTag::Attendance), 0);

        client.invalidate(Mutation::MarkAttendance);

        assert_eq!(client.epoch(ResourceTag::Attendance), 1);
        assert_eq!(client.epoch(ResourceTag::Employees), 0);
        assert_eq!(client.epoch(ResourceTag::Dashboard), 0);
    }
}
