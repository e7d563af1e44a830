//! 凭证解析模块
//!
//! 核心只消费按 Provider 键存取的抽象凭证接口，具体持久化
//! （浏览器 localStorage、配置文件等）由外部协作方实现。
//! 解析顺序：调用方显式传入 → 存储条目 → 进程环境变量。

use std::collections::HashMap;

use parking_lot::RwLock;

/// Gemini Provider 的存储键
pub const GEMINI_PROVIDER: &str = "gemini";

/// 环境变量回退顺序
const ENV_KEYS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// 按 Provider 键存取凭证的抽象接口
pub trait CredentialStore: Send + Sync {
    fn get(&self, provider: &str) -> Option<String>;
    fn set(&self, provider: &str, key: String);
}

/// 进程内存实现，适用于测试与无持久化场景
#[derive(Default)]
pub struct InMemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for InMemoryCredentialStore {
    fn get(&self, provider: &str) -> Option<String> {
        self.entries
            .read()
            .get(provider)
            .cloned()
            .filter(|key| !key.is_empty())
    }

    fn set(&self, provider: &str, key: String) {
        self.entries.write().insert(provider.to_string(), key);
    }
}

/// 解析 API Key：显式 Key → 存储条目 → 进程环境变量；全部缺失返回 None
pub fn resolve_api_key(
    explicit: Option<&str>,
    store: &dyn CredentialStore,
    provider: &str,
) -> Option<String> {
    resolve_api_key_with(explicit, store, provider, |name| std::env::var(name).ok())
}

/// 同 [`resolve_api_key`]，环境变量查询由调用方注入，
/// 测试与隔离环境无需触碰进程全局状态
pub fn resolve_api_key_with(
    explicit: Option<&str>,
    store: &dyn CredentialStore,
    provider: &str,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> Option<String> {
    if let Some(key) = explicit.filter(|key| !key.is_empty()) {
        return Some(key.to_string());
    }
    if let Some(key) = store.get(provider) {
        return Some(key);
    }
    ENV_KEYS
        .iter()
        .find_map(|name| env_lookup(name).filter(|value| !value.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_key_takes_precedence() {
        let store = InMemoryCredentialStore::new();
        store.set(GEMINI_PROVIDER, "stored-key".to_string());
        let key = resolve_api_key(Some("explicit-key"), &store, GEMINI_PROVIDER);
        assert_eq!(key.as_deref(), Some("explicit-key"));
    }

    #[test]
    fn test_store_entry_used_when_no_explicit_key() {
        let store = InMemoryCredentialStore::new();
        store.set(GEMINI_PROVIDER, "stored-key".to_string());
        let key = resolve_api_key(None, &store, GEMINI_PROVIDER);
        assert_eq!(key.as_deref(), Some("stored-key"));
        // 空字符串视为未配置
        let key = resolve_api_key(Some(""), &store, GEMINI_PROVIDER);
        assert_eq!(key.as_deref(), Some("stored-key"));
    }

    #[test]
    fn test_empty_store_entry_is_ignored() {
        let store = InMemoryCredentialStore::new();
        store.set(GEMINI_PROVIDER, String::new());
        assert!(store.get(GEMINI_PROVIDER).is_none());
    }

    #[test]
    fn test_env_fallback_order() {
        let store = InMemoryCredentialStore::new();
        let env = |name: &str| match name {
            "GEMINI_API_KEY" => Some("primary-env-key".to_string()),
            "API_KEY" => Some("legacy-env-key".to_string()),
            _ => None,
        };
        let key = resolve_api_key_with(None, &store, GEMINI_PROVIDER, env);
        assert_eq!(key.as_deref(), Some("primary-env-key"));

        // 首选变量缺失时回退到次选
        let env = |name: &str| (name == "API_KEY").then(|| "legacy-env-key".to_string());
        let key = resolve_api_key_with(None, &store, GEMINI_PROVIDER, env);
        assert_eq!(key.as_deref(), Some("legacy-env-key"));

        // 空值视为未配置
        let env = |_: &str| Some(String::new());
        assert!(resolve_api_key_with(None, &store, GEMINI_PROVIDER, env).is_none());
    }

    #[test]
    fn test_store_entry_shadows_env() {
        let store = InMemoryCredentialStore::new();
        store.set(GEMINI_PROVIDER, "stored-key".to_string());
        let env = |_: &str| Some("env-key".to_string());
        let key = resolve_api_key_with(None, &store, GEMINI_PROVIDER, env);
        assert_eq!(key.as_deref(), Some("stored-key"));
    }
}
