//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供简洁的本地存储接口。

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
/// 所有失败（无 window、隐私模式禁用存储等）都退化为 `None` / `false`。
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取键对应的字符串值，键不存在或发生错误时返回 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入键值对，返回操作是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除键值对，返回操作是否成功
    pub fn remove(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}
