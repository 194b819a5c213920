//! 테스트용 인메모리 저장소
//!
//! Redis 와 같은 방식으로 값을 JSON 문자열로 보관하고,
//! 저장소 접근 횟수를 기록해서 "저장소에 접근하지 않음"을 검증할 수 있게 합니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use async_trait::async_trait;
use crate::caching::{KeyValueStore, decode_mapping, encode_mapping};
use crate::domain::mapping::Mapping;
use crate::errors::{StoreError, StoreResult};

#[derive(Default)]
struct Entries {
    hashes: HashMap<String, HashMap<String, String>>,
    values: HashMap<String, String>,
}

#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<Entries>,
    accesses: AtomicUsize,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지 수행된 저장소 명령 수
    pub fn accesses(&self) -> usize {
        self.accesses.load(Ordering::SeqCst)
    }

    /// 켜면 이후 모든 명령이 `StoreError::Store` 로 실패합니다.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 해시 필드에 원시 문자열을 직접 넣습니다. 손상된 데이터 재현용.
    pub fn put_raw_hash_field(&self, bucket: &str, field: &str, raw: &str) {
        let mut entries = self.entries.lock().unwrap();
        entries
            .hashes
            .entry(bucket.to_string())
            .or_default()
            .insert(field.to_string(), raw.to_string());
    }

    pub fn hash_len(&self, bucket: &str) -> usize {
        let entries = self.entries.lock().unwrap();
        entries.hashes.get(bucket).map_or(0, HashMap::len)
    }

    fn begin(&self) -> StoreResult<()> {
        self.accesses.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Store("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn hash_set(&self, bucket: &str, field: &str, value: &Mapping) -> StoreResult<()> {
        self.begin()?;
        let json = encode_mapping(value)?;
        let mut entries = self.entries.lock().unwrap();
        entries
            .hashes
            .entry(bucket.to_string())
            .or_default()
            .insert(field.to_string(), json);
        Ok(())
    }

    async fn hash_get(&self, bucket: &str, field: &str) -> StoreResult<Option<Mapping>> {
        self.begin()?;
        let entries = self.entries.lock().unwrap();
        entries
            .hashes
            .get(bucket)
            .and_then(|hash| hash.get(field))
            .map(|raw| decode_mapping(raw))
            .transpose()
    }

    async fn set_value(&self, key: &str, value: &Mapping) -> StoreResult<()> {
        self.begin()?;
        let json = encode_mapping(value)?;
        self.entries.lock().unwrap().values.insert(key.to_string(), json);
        Ok(())
    }

    async fn get_value(&self, key: &str) -> StoreResult<Option<Mapping>> {
        self.begin()?;
        let entries = self.entries.lock().unwrap();
        entries.values.get(key).map(|raw| decode_mapping(raw)).transpose()
    }

    async fn delete(&self, key: &str) -> StoreResult<bool> {
        self.begin()?;
        let mut entries = self.entries.lock().unwrap();
        let removed = entries.values.remove(key).is_some() || entries.hashes.remove(key).is_some();
        Ok(removed)
    }
}
