//! 浏览器端数据访问
//!
//! 以 `gloo-net` 实现核心库的 `HttpClient`，并通过 Context 共享
//! 一个 `RestDataStore` 实例。

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder};
use leptos::prelude::*;
use xamfi_shared::protocol::HttpMethod;
use xamfi::{ClientConfig, HttpClient, HttpRequest, HttpResponse, RestDataStore, StoreError, StoreResult};

/// 基于 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHttpClient;

#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn send(&self, req: HttpRequest) -> StoreResult<HttpResponse> {
        let mut builder: RequestBuilder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Patch => Request::patch(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| StoreError::network(e.to_string()))?;

        let resp = request
            .send()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| StoreError::network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

pub type AppStore = RestDataStore<BrowserHttpClient>;

/// 使用构建时配置创建数据存储
pub fn app_store() -> AppStore {
    RestDataStore::new(BrowserHttpClient, ClientConfig::from_env())
}

/// 从 Context 获取数据存储
pub fn use_store() -> AppStore {
    use_context::<AppStore>().expect("AppStore should be provided")
}
