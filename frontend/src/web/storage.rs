//! LocalStorage 适配模块
//!
//! 基于 `gloo-storage` 的原始 `web_sys::Storage` 句柄实现核心库的
//! `KeyValueStorage`，值按原样存取（不做二次 JSON 编码）。

use gloo_storage::{LocalStorage, Storage};
use xamfi::KeyValueStorage;

/// 浏览器 LocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> bool {
        LocalStorage::raw().set_item(key, value).is_ok()
    }

    fn delete(&self, key: &str) -> bool {
        LocalStorage::delete(key);
        true
    }
}
