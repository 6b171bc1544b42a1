//! 外部链接 - 在系统浏览器中打开，调用方不关心结果

use crate::error::{FolioError, Result};

pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// 交给系统默认浏览器
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).map_err(|source| FolioError::Link { url: url.to_string(), source })
    }
}

/// 打开链接，失败只记日志
pub fn open_link(opener: &dyn LinkOpener, url: &str) {
    match opener.open(url) {
        Ok(()) => log::info!("🔗 Opened {}", url),
        Err(e) => log::warn!("⚠️ {}", e),
    }
}
