//! 错误类型
//!
//! 交互核心（拖动、回弹、追踪器、滚动）不会失败；这里只覆盖资源加载、
//! 配置解析、布局和外部调用这些边界。

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("font error: {0}")]
    Font(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("layout error: {0}")]
    Layout(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("audio error: {0}")]
    Audio(String),

    #[error("failed to open {url}: {source}")]
    Link {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

impl FolioError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
