//! 原生 Web API 封装模块
//!
//! 对浏览器原生 API 的轻量级封装，直接使用 `web_sys` 以减小 WASM 体积。

mod console;
pub mod router;
mod storage;

pub use console::init_logging;
pub use storage::BrowserSessionStore;
