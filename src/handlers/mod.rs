pub mod charts;

use actix_web::web;

/// 注册路由
///
/// 同时挂载在根路径和 `/api` 下，前端看板通过 `/api/charts/` 访问
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api").configure(charts::config))
        .configure(charts::config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_routes_mounted() {
        let app = test::init_service(App::new().configure(config)).await;

        for uri in ["/charts/", "/api/charts/"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_only_chart_routes() {
        let app = test::init_service(App::new().configure(config)).await;

        for uri in ["/health", "/api/health"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);
        }
    }

    #[actix_web::test]
    async fn test_unknown_route() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/charts/extra").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
