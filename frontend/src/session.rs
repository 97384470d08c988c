//! 会话持久化
//!
//! 会话只有两个持久化条目：bearer token 字符串与序列化后的当前用户记录，
//! 登出时一并清除。存储后端以 trait 注入，宿主测试用内存实现替换浏览器
//! LocalStorage。

use hrdesk_shared::{Employee, STORAGE_TOKEN_KEY, STORAGE_USER_KEY};

use crate::web::LocalStorage;

/// 键值存储后端
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// 浏览器 LocalStorage 后端
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::get(key)
    }

    fn set(&self, key: &str, value: &str) {
        LocalStorage::set(key, value);
    }

    fn remove(&self, key: &str) {
        LocalStorage::remove(key);
    }
}

/// 会话存储：token 与用户记录的读写始终成对出现
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore<S> {
    store: S,
}

/// 应用运行时使用的会话存储
pub type BrowserSession = SessionStore<BrowserStore>;

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 恢复持久化的会话
    ///
    /// 只有 token 与用户记录同时存在且用户记录可解析时才算有会话；
    /// 任一条目缺失或损坏都按未认证处理。
    pub fn restore(&self) -> Option<(String, Employee)> {
        let token = self.store.get(STORAGE_TOKEN_KEY)?;
        let raw_user = self.store.get(STORAGE_USER_KEY)?;
        let user = serde_json::from_str::<Employee>(&raw_user).ok()?;
        Some((token, user))
    }

    /// 持久化一次成功登录
    pub fn persist(&self, token: &str, user: &Employee) {
        self.store.set(STORAGE_TOKEN_KEY, token);
        if let Ok(raw) = serde_json::to_string(user) {
            self.store.set(STORAGE_USER_KEY, &raw);
        }
    }

    /// 清除两个条目
    pub fn clear(&self) {
        self.store.remove(STORAGE_TOKEN_KEY);
        self.store.remove(STORAGE_USER_KEY);
    }

    /// 当前的 bearer token，供 API 客户端在每次请求时读取
    pub fn token(&self) -> Option<String> {
        self.store.get(STORAGE_TOKEN_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hrdesk_shared::EmployeeRole;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }

    fn user() -> Employee {
        Employee {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            employee_type: EmployeeRole::Hr,
            first_name: "Ada".to_string(),
            last_name: "Min".to_string(),
        }
    }

    #[test]
    fn persisted_session_restores_with_the_same_user() {
        let session = SessionStore::new(MemoryStore::default());
        session.persist("t1", &user());

        let (token, restored) = session.restore().expect("session should restore");
        assert_eq!(token, "t1");
        assert_eq!(restored, user());
        assert_eq!(session.token().as_deref(), Some("t1"));
    }

    #[test]
    fn restore_requires_both_entries() {
        let session = SessionStore::new(MemoryStore::default());
        assert!(session.restore().is_none());

        session.store.set(STORAGE_TOKEN_KEY, "t1");
        assert!(session.restore().is_none());

        let session = SessionStore::new(MemoryStore::default());
        session
            .store
            .set(STORAGE_USER_KEY, &serde_json::to_string(&user()).unwrap());
        assert!(session.restore().is_none());
    }

    #[test]
    fn corrupt_user_record_is_treated_as_no_session() {
        let session = SessionStore::new(MemoryStore::default());
        session.store.set(STORAGE_TOKEN_KEY, "t1");
        session.store.set(STORAGE_USER_KEY, "{not json");
        assert!(session.restore().is_none());
    }

    #[test]
    fn clear_removes_token_and_user_together() {
        let session = SessionStore::new(MemoryStore::default());
        session.persist("t1", &user());
        session.clear();

        assert!(session.token().is_none());
        assert!(session.restore().is_none());
        assert!(session.store.entries.borrow().is_empty());
    }
}
