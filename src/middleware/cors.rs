//! 跨域中间件
//!
//! 前端看板与后端不同源，为所有响应追加 CORS 响应头，
//! OPTIONS 预检请求直接返回 204

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{
            HeaderValue, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        Method,
    },
    Error, HttpResponse,
    body::EitherBody,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;

const ALLOWED_METHODS: &str = "GET, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

/// CORS 中间件
pub struct CorsMiddleware {
    allowed_origin: Rc<HeaderValue>,
}

impl CorsMiddleware {
    /// 创建中间件，origin 非法时退回 `*`
    pub fn new(allowed_origin: &str) -> Self {
        let allowed_origin = HeaderValue::from_str(allowed_origin).unwrap_or_else(|_| {
            log::warn!("非法的 allowed_origin: {}，使用 *", allowed_origin);
            HeaderValue::from_static("*")
        });
        Self {
            allowed_origin: Rc::new(allowed_origin),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for CorsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = CorsMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(CorsMiddlewareService {
            service: Rc::new(service),
            allowed_origin: self.allowed_origin.clone(),
        })
    }
}

pub struct CorsMiddlewareService<S> {
    service: Rc<S>,
    allowed_origin: Rc<HeaderValue>,
}

impl<S, B> Service<ServiceRequest> for CorsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let allowed_origin = self.allowed_origin.clone();

        Box::pin(async move {
            // 预检请求不进入路由
            if *req.method() == Method::OPTIONS {
                let response = HttpResponse::NoContent()
                    .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, allowed_origin.as_ref().clone()))
                    .insert_header((ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
                    .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
                    .finish();
                return Ok(req.into_response(response).map_into_right_body());
            }

            let mut res = service.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, allowed_origin.as_ref().clone());
            headers.insert(
                ACCESS_CONTROL_ALLOW_METHODS,
                HeaderValue::from_static(ALLOWED_METHODS),
            );
            headers.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static(ALLOWED_HEADERS),
            );
            Ok(res.map_into_left_body())
        })
    }
}
