//! 数据模型层：核心状态与目标语言枚举

pub mod data_core;
pub mod target_lang;
