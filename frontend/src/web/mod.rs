//! 原生 Web API 封装模块
//!
//! 对浏览器原生 API 的轻量级封装（存储、日期、文件保存、路由），
//! 以减小 WASM 二进制体积；HTTP 仍走 gloo-net。

mod date;
mod download;
pub mod route;
pub mod router;
mod storage;

pub use date::today_iso_date;
pub use download::save_bytes;
pub use storage::LocalStorage;
