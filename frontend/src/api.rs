//! HR API 客户端
//!
//! 单个固定 origin 的 HTTP 客户端。每次请求都重新读取持久化的
//! bearer token（相当于请求拦截器）；没有响应拦截器：401/403 与
//! 其他失败一样以 `ApiError` 形式抛给调用方，不触发自动登出。
//! 无重试、无显式超时。

use gloo_net::http::{Request, RequestBuilder, Response};
use hrdesk_shared::{
    Attendance, CreateAttendanceRequest, CreateEmployeeRequest, DashboardStats, Employee,
    LoginRequest, LoginResponse, Period, UpdateAttendanceRequest, UpdateEmployeeRequest,
};
use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::session::BrowserSession;

/// 默认后端 origin（开发环境）
pub const API_BASE: &str = "http://localhost:8000/api";

/// API 错误分类
///
/// 视图层把所有变体折叠成同一条通用失败提示；
/// 分类只用于控制台诊断。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络/传输失败
    Network(String),
    /// 非 2xx 状态码（包含 401/403）
    Status(u16),
    /// 响应体解析失败
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "网络错误: {}", msg),
            ApiError::Status(code) => write!(f, "请求被拒绝: HTTP {}", code),
            ApiError::Decode(msg) => write!(f, "响应解析失败: {}", msg),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>().expect("ApiClient should be provided")
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 请求拦截：当前存在 token 时附加 Authorization 头
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match BrowserSession::default().token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn send_json<B: Serialize>(
        &self,
        builder: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let response = builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response)
    }

    fn check_status(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            Ok(response)
        } else {
            Err(ApiError::Status(response.status()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response)?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================
    // 认证
    // =========================================================

    /// 登录；唯一不带 token 调用的端点
    ///
    /// 响应中的 refresh token 由调用方丢弃。
    pub async fn login(&self, body: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = self.send_json(Request::post(&self.url("/login")), body).await?;
        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    // =========================================================
    // 员工
    // =========================================================

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get_json("/employees/").await
    }

    pub async fn create_employee(&self, body: &CreateEmployeeRequest) -> Result<(), ApiError> {
        self.send_json(self.authorize(Request::post(&self.url("/employees/"))), body)
            .await?;
        Ok(())
    }

    pub async fn update_employee(
        &self,
        id: i64,
        body: &UpdateEmployeeRequest,
    ) -> Result<(), ApiError> {
        let path = format!("/employees/{}/", id);
        self.send_json(self.authorize(Request::put(&self.url(&path))), body)
            .await?;
        Ok(())
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        let path = format!("/employees/{}/", id);
        let response = self
            .authorize(Request::delete(&self.url(&path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response)?;
        Ok(())
    }

    // =========================================================
    // 考勤
    // =========================================================

    pub async fn list_attendance(
        &self,
        date: &str,
        period: Period,
    ) -> Result<Vec<Attendance>, ApiError> {
        let path = format!("/attendance/?date={}&period={}", date, period.as_str());
        self.get_json(&path).await
    }

    /// 导出：同一过滤条件加 `export=csv`，响应按二进制处理
    pub async fn export_attendance(&self, date: &str, period: Period) -> Result<Vec<u8>, ApiError> {
        let path = format!(
            "/attendance/?date={}&period={}&export=csv",
            date,
            period.as_str()
        );
        let response = self
            .authorize(Request::get(&self.url(&path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::check_status(response)?
            .binary()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn create_attendance(&self, body: &CreateAttendanceRequest) -> Result<(), ApiError> {
        self.send_json(self.authorize(Request::post(&self.url("/attendance/"))), body)
            .await?;
        Ok(())
    }

    pub async fn update_attendance(
        &self,
        id: i64,
        body: &UpdateAttendanceRequest,
    ) -> Result<(), ApiError> {
        let path = format!("/attendance/{}/", id);
        self.send_json(self.authorize(Request::put(&self.url(&path))), body)
            .await?;
        Ok(())
    }

    // =========================================================
    // 仪表盘
    // =========================================================

    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("/dashboard/").await
    }
}
