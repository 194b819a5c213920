//! 사용자/학생 저장 서비스 메인 애플리케이션
//!
//! Redis 연결을 만들고 저장소들을 조립한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use bebigquery::caching::redis::RedisClient;
use bebigquery::config::{Environment, RedisConfig, ServerConfig};
use bebigquery::domain::mapping::SerdeMapConverter;
use bebigquery::repositories::{students::StudentRepository, users::UserHashStore};
use bebigquery::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));

    info!("🚀 저장 서비스 시작중... (environment: {:?})", environment);

    let redis_url = RedisConfig::url();
    let redis = match RedisClient::new(&redis_url).await {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Redis 연결 실패: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    // 명시적 생성자 주입으로 저장소 조립
    let converter = Arc::new(SerdeMapConverter);
    let users = web::Data::new(UserHashStore::new(redis.clone(), converter.clone()));
    let students = web::Data::new(StudentRepository::new(redis, converter));

    let bind_address = (ServerConfig::host(), ServerConfig::port());
    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .app_data(users.clone())
            .app_data(students.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 실행되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("{} 프로필 .env 파일 로드 실패: {}", profile, e);
    }
}
