//! 智能代码注释生成器库
//!
//! 提供文件选择状态、提交流转控制与注释服务客户端
//! 遵循MVVM架构模式，网络调用在后台线程执行以保持UI响应

pub mod model;
pub mod net;
pub mod utils;
pub mod vm;

// 重新导出主要类型
pub use model::data_core::{AppError, AppState, SubmitJob};
pub use model::target_lang::TargetLang;
pub use net::client::{ApiError, CommentClient};
