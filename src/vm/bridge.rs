//! VM桥接层：连接Slint UI与AppState数据模型
//!
//! 注意：此模块的具体实现在main.rs中，因为依赖于Slint生成的类型
//! 这里只提供公共常量

// === 状态栏常量定义（消除魔法值） ===
pub const STATUS_READY: &str = "就绪";
pub const STATUS_SUBMITTING: &str = "正在生成注释...";
pub const STATUS_DONE: &str = "注释生成完成";
pub const STATUS_FILE_CANCELLED: &str = "未选择文件";
pub const STATUS_SAVE_CANCELLED: &str = "已取消保存";
pub const STATUS_SAVED_PREFIX: &str = "已保存到: ";
pub const STATUS_COPIED: &str = "已复制到剪贴板";
pub const STATUS_ERROR_PREFIX: &str = "错误: ";
