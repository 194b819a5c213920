//! # User HTTP Handlers
//!
//! 사용자 해시 저장소를 HTTP 로 노출하는 핸들러입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 사용자 저장 (같은 이름이면 덮어씀) | 201 Created |
//! | `GET` | `/api/v1/users/{name}` | 이름으로 사용자 조회 | 200 OK / 404 |
//!
//! 저장소의 실패 사유(`StoreError`)는 `AppError` 로 변환되어
//! 400 (잘못된 입력) 또는 500 (Redis/변환 오류) 응답이 됩니다.

use actix_web::{web, HttpResponse, get, post};
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::users::UserHashStore;

/// 사용자 저장 핸들러
///
/// # 요청 본문
///
/// ```json
/// { "id": 1, "name": "Ana", "surname": "Lopez", "age": "30" }
/// ```
///
/// 본문이 `null` 이거나 `name` 이 비어 있으면 400 Bad Request 입니다.
#[post("")]
pub async fn save_user(
    store: web::Data<UserHashStore>,
    payload: web::Json<Option<User>>,
) -> Result<HttpResponse, AppError> {
    let user = payload.into_inner();
    store.try_save(user.as_ref()).await?;

    Ok(HttpResponse::Created().json(user))
}

/// 이름으로 사용자 조회 핸들러
///
/// ```bash
/// curl http://localhost:8080/api/v1/users/Ana
/// ```
#[get("/{name}")]
pub async fn get_user(
    store: web::Data<UserHashStore>,
    name: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let name = name.into_inner();

    match store.try_find_by_name(Some(&name)).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(AppError::NotFound(format!("user '{}'", name))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{App, http::StatusCode, test};
    use serde_json::json;
    use super::*;
    use crate::caching::memory::MemoryStore;
    use crate::domain::mapping::SerdeMapConverter;

    fn user_store(memory: Arc<MemoryStore>) -> web::Data<UserHashStore> {
        web::Data::new(UserHashStore::new(memory, Arc::new(SerdeMapConverter)))
    }

    #[actix_web::test]
    async fn test_save_then_get_user() {
        let memory = Arc::new(MemoryStore::new());
        let app = test::init_service(
            App::new()
                .app_data(user_store(memory))
                .service(web::scope("/api/v1/users").service(save_user).service(get_user)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"id": 1, "name": "Ana", "surname": "Lopez", "age": 30}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::get().uri("/api/v1/users/Ana").to_request();
        let user: User = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user, User::new(1, "Ana", "Lopez", "30"));
    }

    #[actix_web::test]
    async fn test_null_or_blank_user_is_bad_request() {
        let memory = Arc::new(MemoryStore::new());
        let app = test::init_service(
            App::new()
                .app_data(user_store(memory.clone()))
                .service(web::scope("/api/v1/users").service(save_user)),
        )
        .await;

        for body in [json!(null), json!({"id": 1, "name": "   "})] {
            let req = test::TestRequest::post()
                .uri("/api/v1/users")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(memory.accesses(), 0);
    }

    #[actix_web::test]
    async fn test_unknown_user_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(user_store(Arc::new(MemoryStore::new())))
                .service(web::scope("/api/v1/users").service(get_user)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users/nonexistent").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_store_failure_is_internal_error() {
        let memory = Arc::new(MemoryStore::new());
        memory.set_failing(true);
        let app = test::init_service(
            App::new()
                .app_data(user_store(memory))
                .service(web::scope("/api/v1/users").service(get_user)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/users/Ana").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
