//! 认证模块
//!
//! 管理用户认证状态，与路由系统解耦。
//! 路由服务通过注入的认证信号来检查认证状态。

use crate::web::BrowserStorage;
use leptos::prelude::*;
use xamfi_shared::Identity;
use xamfi::{IdentityProvider, MockIdentityProvider};

/// 认证上下文
///
/// 身份记录持久化在 LocalStorage，信号只是其内存镜像。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub identity: ReadSignal<Option<Identity>>,
    set_identity: WriteSignal<Option<Identity>>,
    provider: MockIdentityProvider<BrowserStorage>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (identity, set_identity) = signal(None);
        Self {
            identity,
            set_identity,
            provider: MockIdentityProvider::new(BrowserStorage),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let identity = self.identity;
        Signal::derive(move || identity.with(Option::is_some))
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 登录/注销同时更新持久化记录和信号
impl IdentityProvider for AuthContext {
    fn current(&self) -> Option<Identity> {
        self.provider.current()
    }

    fn login(&self) -> Identity {
        let user = self.provider.login();
        self.set_identity.set(Some(user.clone()));
        user
    }

    fn logout(&self) {
        self.provider.logout();
        // 不需要手动导航，路由服务会监听认证状态变化并自动重定向
        self.set_identity.set(None);
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化认证状态：从 LocalStorage 恢复上次的模拟登录
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_identity.set(ctx.provider.current());
}
