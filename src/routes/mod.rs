//! API 라우트 설정 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(users)
//!     .app_data(students)
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 핸들러가 사용하는 `web::Data<UserHashStore>` 와 `web::Data<StudentRepository>` 는
/// 호출자가 `App::app_data` 로 등록해야 합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_student_routes(cfg);
}

/// - `POST /api/v1/users` - 사용자 저장
/// - `GET /api/v1/users/{name}` - 이름으로 조회
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::save_user)
            .service(handlers::users::get_user),
    );
}

/// - `POST /api/v1/students` - 학생 저장
/// - `GET /api/v1/students/{id}` - 학생 조회
/// - `DELETE /api/v1/students/{id}` - 학생 삭제
fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/students")
            .service(handlers::students::save_student)
            .service(handlers::students::get_student)
            .service(handlers::students::delete_student),
    );
}

/// 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "bebigquery",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
