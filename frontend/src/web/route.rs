//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Login,
    Register,
    /// 活动目录
    Marketplace,
    /// 活动详情，携带活动 id
    Activity(String),
    /// 控制面板 (需要认证)
    Dashboard,
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Home,
            "/login" => Self::Login,
            "/register" => Self::Register,
            "/marketplace" => Self::Marketplace,
            "/dashboard" => Self::Dashboard,
            _ => match trimmed.strip_prefix("/activity/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Self::Activity(id.to_string()),
                _ => Self::NotFound,
            },
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Marketplace => "/marketplace".to_string(),
            Self::Activity(id) => format!("/activity/{}", id),
            Self::Dashboard => "/dashboard".to_string(),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard)
    }

    /// 已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

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
    fn parses_every_known_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/register"), AppRoute::Register);
        assert_eq!(AppRoute::from_path("/marketplace/"), AppRoute::Marketplace);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
        assert_eq!(
            AppRoute::from_path("/activity/42"),
            AppRoute::Activity("42".to_string())
        );
    }

    #[test]
    fn malformed_activity_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/activity/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/activity/1/edit"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/destinations"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Marketplace,
            AppRoute::Activity("3".into()),
            AppRoute::Dashboard,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn only_dashboard_is_guarded() {
        assert!(AppRoute::Dashboard.requires_auth());
        assert!(!AppRoute::Activity("1".into()).requires_auth());
        assert!(AppRoute::Register.should_redirect_when_authenticated());
    }
}
