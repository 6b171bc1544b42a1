//! 音效 - 首页图标点击时的闪光音

use crate::error::{FolioError, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::io::Cursor;
use std::path::Path;

pub trait Chime {
    /// 播放一次，不等待结束
    fn play(&mut self);
}

/// 静音实现（无音频设备、测试）
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn play(&mut self) {}
}

/// 基于 rodio 的音效，输出流在第一次播放时才打开
pub struct SparkleChime {
    data: Vec<u8>,
    // OutputStream 被 drop 后声音会停，所以一直持有
    output: Option<(OutputStream, OutputStreamHandle)>,
    broken: bool,
}

impl SparkleChime {
    pub const ASSET: &'static str = "audio/sparkle.mp3";

    pub fn from_bytes(data: Vec<u8>) -> Self {
        Self { data, output: None, broken: false }
    }

    pub fn load(assets_dir: &Path) -> Result<Self> {
        let path = assets_dir.join(Self::ASSET);
        let data = std::fs::read(&path).map_err(|e| FolioError::io(path.display().to_string(), e))?;
        log::info!("🔊 Sparkle sound loaded ({} bytes)", data.len());
        Ok(Self::from_bytes(data))
    }

    fn handle(&mut self) -> Result<&OutputStreamHandle> {
        if self.output.is_none() {
            let output = OutputStream::try_default().map_err(|e| FolioError::Audio(e.to_string()))?;
            self.output = Some(output);
        }
        self.output
            .as_ref()
            .map(|(_, handle)| handle)
            .ok_or_else(|| FolioError::Audio("no output stream".to_string()))
    }

    fn try_play(&mut self) -> Result<()> {
        let source = Decoder::new(Cursor::new(self.data.clone())).map_err(|e| FolioError::Audio(e.to_string()))?;
        let sink = Sink::try_new(self.handle()?).map_err(|e| FolioError::Audio(e.to_string()))?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}

impl Chime for SparkleChime {
    fn play(&mut self) {
        if self.broken {
            return;
        }
        if let Err(e) = self.try_play() {
            // 失败一次后不再重试
            log::warn!("⚠️ Sparkle sound disabled: {}", e);
            self.broken = true;
        }
    }
}

/// 加载音效，资源或设备缺失时退回静音
pub fn load_chime(assets_dir: &Path) -> Box<dyn Chime> {
    match SparkleChime::load(assets_dir) {
        Ok(chime) => Box::new(chime),
        Err(e) => {
            log::warn!("⚠️ {}, sound disabled", e);
            Box::new(SilentChime)
        }
    }
}
