//! 网络层：注释服务客户端

pub mod client;
