//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、路径映射以及访问守卫属性。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面（唯一不需要认证的功能路由）
    #[default]
    Login,
    /// 仪表盘，挂在根路径
    Dashboard,
    /// 员工名册
    Employees,
    /// 考勤
    Attendance,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Dashboard,
            "/login" => Self::Login,
            "/employees" => Self::Employees,
            "/attendance" => Self::Attendance,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Employees => "/employees",
            Self::Attendance => "/attendance",
            Self::NotFound => "/404",
        }
    }

    /// 核心守卫逻辑：除登录页与 404 外都需要认证
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::Employees | Self::Attendance)
    }

    /// 已认证用户是否应该离开此路由（登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip_through_parse_and_print() {
        for route in [
            AppRoute::Login,
            AppRoute::Dashboard,
            AppRoute::Employees,
            AppRoute::Attendance,
        ] {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/payroll"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
    }

    #[test]
    fn every_content_route_is_guarded_except_login() {
        assert!(!AppRoute::Login.requires_auth());
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(AppRoute::Employees.requires_auth());
        assert!(AppRoute::Attendance.requires_auth());
    }

    #[test]
    fn redirect_targets_pair_login_and_dashboard() {
        assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
        assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Dashboard);
        assert!(AppRoute::Login.should_redirect_when_authenticated());
        assert!(!AppRoute::Attendance.should_redirect_when_authenticated());
    }
}
