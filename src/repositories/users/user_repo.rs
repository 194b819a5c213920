//! # 사용자 해시 저장소 구현
//!
//! 모든 사용자를 하나의 공유 해시 버킷(`user`)에 저장하고,
//! 사용자 이름을 해시 필드 키로 사용하는 데이터 액세스 계층입니다.
//!
//! ## 특징
//!
//! - **명시적 의존성 주입**: 저장소와 변환기를 생성자 인자로 받습니다
//! - **단일 명령**: 저장/조회는 각각 HSET / HGET 한 번으로 끝납니다
//! - **panic 없음**: 모든 실패는 `StoreError` 또는 `false` / `None` 으로 돌아옵니다
//!
//! ## 두 가지 API
//!
//! | 메서드 | 반환 | 실패 사유 |
//! |--------|------|-----------|
//! | [`try_save`](UserHashStore::try_save) | `StoreResult<()>` | 호출자가 구분 가능 |
//! | [`try_find_by_name`](UserHashStore::try_find_by_name) | `StoreResult<Option<User>>` | 호출자가 구분 가능 |
//! | [`save`](UserHashStore::save) | `bool` | 로그로만 확인 |
//! | [`find_by_name`](UserHashStore::find_by_name) | `Option<User>` | 로그로만 확인 |

use std::sync::Arc;
use log::{debug, error, warn};
use crate::{
    caching::KeyValueStore,
    domain::{entities::users::User, mapping::StructMapConverter},
    errors::{StoreError, StoreResult},
    utils::string_utils::validate_required_string,
};

/// 사용자 레코드가 저장되는 해시 버킷 키
pub const USER_HASH_KEY: &str = "user";

/// 사용자 해시 저장소
///
/// 같은 이름으로 다시 저장하면 이전 값을 덮어씁니다 (last-write-wins).
/// 삭제 연산은 제공하지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let store = UserHashStore::new(redis_client, Arc::new(SerdeMapConverter));
///
/// assert!(store.save(Some(&User::new(1, "Ana", "Lopez", "30"))).await);
/// let ana = store.find_by_name(Some("Ana")).await;
/// ```
#[derive(Clone)]
pub struct UserHashStore {
    store: Arc<dyn KeyValueStore>,
    converter: Arc<dyn StructMapConverter<User>>,
}

impl UserHashStore {
    pub fn new(store: Arc<dyn KeyValueStore>, converter: Arc<dyn StructMapConverter<User>>) -> Self {
        Self { store, converter }
    }

    /// 사용자를 `user` 버킷의 `name` 필드에 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 저장 성공
    /// * `Err(StoreError::InvalidInput)` - 사용자가 없거나 이름이 비어 있음 (저장소 접근 없음)
    /// * `Err(StoreError::Conversion)` - 매핑 변환 실패
    /// * `Err(StoreError::Store)` - Redis 오류
    pub async fn try_save(&self, user: Option<&User>) -> StoreResult<()> {
        let Some(user) = user else {
            warn!("사용자 저장 거부: 사용자 정보가 없습니다");
            return Err(StoreError::InvalidInput("user는(은) 필수입니다".to_string()));
        };

        let name = match validate_required_string(user.name.as_deref(), "name") {
            Ok(name) => name,
            Err(e) => {
                warn!("사용자 저장 거부: 이름이 비어 있습니다 (id: {:?})", user.id);
                return Err(e);
            }
        };

        let result = match self.converter.to_mapping(user) {
            Ok(mapping) => self.store.hash_set(USER_HASH_KEY, name, &mapping).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            error!("사용자 저장 실패 (name: {}): {}", name, e);
        }
        result
    }

    /// `user` 버킷에서 `name` 필드를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 필드가 없는 경우 (에러 아님)
    /// * `Err(StoreError::InvalidInput)` - 이름이 없거나 비어 있음 (저장소 접근 없음)
    /// * `Err(StoreError::Conversion | StoreError::Store)` - 변환 또는 Redis 오류
    pub async fn try_find_by_name(&self, name: Option<&str>) -> StoreResult<Option<User>> {
        let name = match validate_required_string(name, "name") {
            Ok(name) => name,
            Err(e) => {
                warn!("사용자 조회 거부: 이름이 비어 있습니다");
                return Err(e);
            }
        };

        let result = match self.store.hash_get(USER_HASH_KEY, name).await {
            Ok(Some(mapping)) => self.converter.from_mapping(mapping).map(Some),
            Ok(None) => {
                debug!("사용자 없음 (name: {})", name);
                Ok(None)
            }
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            error!("사용자 조회 실패 (name: {}): {}", name, e);
        }
        result
    }

    /// 실패 사유를 숨기는 저장. 성공하면 `true`, 그 외 모든 경우 `false`.
    pub async fn save(&self, user: Option<&User>) -> bool {
        self.try_save(user).await.is_ok()
    }

    /// 실패 사유를 숨기는 조회. 없거나 실패하면 `None`.
    pub async fn find_by_name(&self, name: Option<&str>) -> Option<User> {
        self.try_find_by_name(name).await.ok().flatten()
    }
}
