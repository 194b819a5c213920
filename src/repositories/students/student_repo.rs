//! # 학생 리포지토리 구현
//!
//! 학생 레코드 하나를 최상위 키 하나(`Student:{id}`)에 저장합니다.
//! 실제로 사용하는 연산(저장, ID 조회, ID 삭제)만 제공합니다.

use std::sync::Arc;
use log::{debug, info};
use validator::Validate;
use crate::{
    caching::KeyValueStore,
    domain::{
        entities::students::{Student, student::student_key},
        mapping::StructMapConverter,
    },
    errors::AppResult,
    utils::string_utils::validate_required_string,
};

/// 학생 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **ValidationError**: 검증 실패 또는 빈 ID (저장소 접근 없음)
/// - **RedisError**: Redis 통신 오류
/// - **ConversionError**: 저장된 값이 `Student` 형태가 아님
#[derive(Clone)]
pub struct StudentRepository {
    store: Arc<dyn KeyValueStore>,
    converter: Arc<dyn StructMapConverter<Student>>,
}

impl StudentRepository {
    pub fn new(store: Arc<dyn KeyValueStore>, converter: Arc<dyn StructMapConverter<Student>>) -> Self {
        Self { store, converter }
    }

    /// 학생을 검증한 뒤 저장합니다. 같은 ID 가 있으면 덮어씁니다.
    pub async fn save(&self, student: Student) -> AppResult<Student> {
        student.validate()?;

        let mapping = self.converter.to_mapping(&student)?;
        self.store.set_value(&student.key(), &mapping).await?;

        info!("학생 저장 완료 (id: {})", student.id);
        Ok(student)
    }

    /// ID 로 학생을 조회합니다. 없으면 `Ok(None)`.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Student>> {
        let id = validate_required_string(Some(id), "id")?;

        match self.store.get_value(&student_key(id)).await? {
            Some(mapping) => Ok(Some(self.converter.from_mapping(mapping)?)),
            None => {
                debug!("학생 없음 (id: {})", id);
                Ok(None)
            }
        }
    }

    /// ID 로 학생을 삭제합니다. 실제로 삭제되었으면 `true`.
    pub async fn delete_by_id(&self, id: &str) -> AppResult<bool> {
        let id = validate_required_string(Some(id), "id")?;

        let removed = self.store.delete(&student_key(id)).await?;
        if removed {
            info!("학생 삭제 완료 (id: {})", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::memory::MemoryStore;
    use crate::errors::AppError;
    use crate::domain::mapping::SerdeMapConverter;

    fn setup() -> (Arc<MemoryStore>, StudentRepository) {
        let memory = Arc::new(MemoryStore::new());
        let repo = StudentRepository::new(memory.clone(), Arc::new(SerdeMapConverter));
        (memory, repo)
    }

    #[actix_web::test]
    async fn test_save_find_delete() {
        let (_, repo) = setup();
        let student = Student::new("s-1", "Ana", 2020);

        repo.save(student.clone()).await.unwrap();
        assert_eq!(repo.find_by_id("s-1").await.unwrap(), Some(student));

        assert!(repo.delete_by_id("s-1").await.unwrap());
        assert_eq!(repo.find_by_id("s-1").await.unwrap(), None);
        assert!(!repo.delete_by_id("s-1").await.unwrap());
    }

    #[actix_web::test]
    async fn test_invalid_student_is_rejected_before_store_access() {
        let (memory, repo) = setup();

        let result = repo.save(Student::new("s-1", "Ana", 2010)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(memory.accesses(), 0);
    }

    #[actix_web::test]
    async fn test_blank_id_lookup_is_validation_error() {
        let (memory, repo) = setup();

        assert!(matches!(repo.find_by_id("  ").await, Err(AppError::ValidationError(_))));
        assert!(matches!(repo.delete_by_id("").await, Err(AppError::ValidationError(_))));
        assert_eq!(memory.accesses(), 0);
    }

    #[actix_web::test]
    async fn test_store_failure_is_redis_error() {
        let (memory, repo) = setup();
        memory.set_failing(true);

        let result = repo.save(Student::new("s-1", "Ana", 2020)).await;

        assert!(matches!(result, Err(AppError::RedisError(_))));
    }

    #[actix_web::test]
    async fn test_padded_id_does_not_alias_trimmed_id() {
        let (_, repo) = setup();
        let padded = Student::new(" s-1 ", "Ana", 2020);
        let plain = Student::new("s-1", "Bob", 2021);

        repo.save(padded.clone()).await.unwrap();
        repo.save(plain.clone()).await.unwrap();

        assert_eq!(repo.find_by_id(" s-1 ").await.unwrap(), Some(padded));
        assert_eq!(repo.find_by_id("s-1").await.unwrap(), Some(plain));

        assert!(repo.delete_by_id(" s-1 ").await.unwrap());
        assert_eq!(repo.find_by_id(" s-1 ").await.unwrap(), None);
        assert!(repo.find_by_id("s-1").await.unwrap().is_some());
    }
}
