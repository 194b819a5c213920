//! # Student HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/students` | 학생 저장 | 201 Created / 400 |
//! | `GET` | `/api/v1/students/{id}` | 학생 조회 | 200 OK / 404 |
//! | `DELETE` | `/api/v1/students/{id}` | 학생 삭제 | 204 No Content / 404 |

use actix_web::{web, HttpResponse, delete, get, post};
use crate::domain::entities::students::Student;
use crate::errors::AppError;
use crate::repositories::students::StudentRepository;

#[post("")]
pub async fn save_student(
    repo: web::Data<StudentRepository>,
    payload: web::Json<Student>,
) -> Result<HttpResponse, AppError> {
    let student = repo.save(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(student))
}

#[get("/{student_id}")]
pub async fn get_student(
    repo: web::Data<StudentRepository>,
    student_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    match repo.find_by_id(&student_id).await? {
        Some(student) => Ok(HttpResponse::Ok().json(student)),
        None => Err(AppError::NotFound(format!("student '{}'", student_id))),
    }
}

#[delete("/{student_id}")]
pub async fn delete_student(
    repo: web::Data<StudentRepository>,
    student_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    if repo.delete_by_id(&student_id).await? {
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound(format!("student '{}'", student_id)))
    }
}
