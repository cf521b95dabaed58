//! 工具模块：文件IO与剪贴板

pub mod clipboard;
pub mod fs;
