//! 注释服务客户端：一次 multipart 上传，一次结构化响应

use std::path::Path;

use reqwest::blocking::{multipart, Client};
use serde::Deserialize;
use thiserror::Error;

use crate::model::data_core::MSG_GENERIC_FAILURE;
use crate::model::target_lang::TargetLang;

/// 固定的协作服务端点（与配套后端约定，本组件不提供配置项）
pub const API_ENDPOINT: &str = "http://localhost:5001/api/comment";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("读取文件失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("网络请求失败: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{0}")]
    Server(String),
    #[error("响应格式无法解析")]
    MalformedBody,
}

impl ApiError {
    /// 面向用户的单条错误信息：服务端消息优先，否则使用通用提示
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server(msg) => msg.clone(),
            _ => MSG_GENERIC_FAILURE.to_string(),
        }
    }
}

/// 成功响应体：{"commentedCode": "..."}
#[derive(Debug, Deserialize)]
struct CommentResponse {
    #[serde(rename = "commentedCode")]
    commented_code: String,
}

/// 错误响应体：{"error": "..."}
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// 注释服务HTTP客户端
pub struct CommentClient {
    client: Client,
    endpoint: String,
}

impl Default for CommentClient {
    fn default() -> Self {
        Self::new(API_ENDPOINT)
    }
}

impl CommentClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            // 与后端约定同步一次往返，不设超时
            client: Client::builder()
                .timeout(None::<std::time::Duration>)
                .build()
                .unwrap_or_default(),
            endpoint: endpoint.into(),
        }
    }

    /// 上传代码文件并等待注释后的完整源码
    ///
    /// 请求为 multipart 表单：`file` 字段携带文件二进制内容（保留原文件名），
    /// `targetLang` 字段携带语言线上令牌。
    pub fn annotate(&self, path: &Path, file_name: &str, lang: TargetLang) -> Result<String, ApiError> {
        let content = std::fs::read(path)?;
        let part = multipart::Part::bytes(content).file_name(file_name.to_string());
        let form = multipart::Form::new()
            .part("file", part)
            .text("targetLang", lang.wire_token());

        let response = self.client.post(&self.endpoint).multipart(form).send()?;

        let status = response.status();
        if status.is_success() {
            let body: CommentResponse = response.json().map_err(|e| {
                tracing::error!("注释服务成功响应无法解析: {}", e);
                ApiError::MalformedBody
            })?;
            Ok(body.commented_code)
        } else {
            let text = response.text().unwrap_or_default();
            match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(body) if !body.error.is_empty() => Err(ApiError::Server(body.error)),
                _ => {
                    tracing::error!("注释服务返回错误 ({}): {}", status, text);
                    Err(ApiError::MalformedBody)
                }
            }
        }
    }
}
