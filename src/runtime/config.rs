//! 应用配置 - assets/folio.json（camelCase），可用环境变量覆盖

use crate::content::PanelKind;
use crate::error::{FolioError, Result};
use crate::ui::panel::PanelConfig;
use crate::ui::spring::SpringConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 内置默认配置
const DEFAULT_CONFIG: &str = include_str!("../../assets/folio.json");

/// 指定配置文件路径
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
/// 指定资源目录
pub const ASSETS_ENV: &str = "FOLIO_ASSETS";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolioConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
    #[serde(default)]
    pub panels: PanelsConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub tap: TapConfig,
}

fn default_assets_dir() -> String { "assets".to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// 逻辑像素
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default = "default_height")]
    pub height: f32,
    #[serde(default = "default_true")]
    pub resizable: bool,
}

fn default_title() -> String { "Mia's Portfolio".to_string() }
fn default_width() -> f32 { 375.0 }
fn default_height() -> f32 { 800.0 }
fn default_true() -> bool { true }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            width: default_width(),
            height: default_height(),
            resizable: true,
        }
    }
}

/// 四个面板的变体参数
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelsConfig {
    #[serde(default = "PanelConfig::about")]
    pub about: PanelConfig,
    #[serde(default = "PanelConfig::interests")]
    pub interests: PanelConfig,
    #[serde(default = "PanelConfig::contact")]
    pub contact: PanelConfig,
    #[serde(default = "PanelConfig::related_work")]
    pub related_work: PanelConfig,
}

impl Default for PanelsConfig {
    fn default() -> Self {
        Self {
            about: PanelConfig::about(),
            interests: PanelConfig::interests(),
            contact: PanelConfig::contact(),
            related_work: PanelConfig::related_work(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerConfig {
    /// 提前量：section 顶部距离滚动位置小于它时就算进入该 section
    #[serde(default = "default_lookahead")]
    pub lookahead: f32,
}

fn default_lookahead() -> f32 { 100.0 }

impl Default for TrackerConfig {
    fn default() -> Self {
        Self { lookahead: default_lookahead() }
    }
}

/// 弹簧参数（origami 的 tension/friction 写法）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrigamiSpring {
    pub tension: f32,
    pub friction: f32,
}

impl OrigamiSpring {
    pub fn to_spring(self) -> SpringConfig {
        SpringConfig::from_origami(self.tension, self.friction)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    #[serde(default = "default_entrance")]
    pub entrance: OrigamiSpring,
    /// 入场起始缩放
    #[serde(default = "default_entrance_scale")]
    pub entrance_from_scale: f32,
    #[serde(default = "default_spring_back")]
    pub spring_back: OrigamiSpring,
    #[serde(default = "default_fade_in")]
    pub fade_in_ms: u64,
    #[serde(default = "default_moving_star")]
    pub moving_star_ms: u64,
}

fn default_entrance() -> OrigamiSpring { OrigamiSpring { tension: 50.0, friction: 6.0 } }
fn default_entrance_scale() -> f32 { 0.8 }
fn default_spring_back() -> OrigamiSpring { OrigamiSpring { tension: 40.0, friction: 5.0 } }
fn default_fade_in() -> u64 { 600 }
fn default_moving_star() -> u64 { 5000 }

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            entrance: default_entrance(),
            entrance_from_scale: default_entrance_scale(),
            spring_back: default_spring_back(),
            fade_in_ms: default_fade_in(),
            moving_star_ms: default_moving_star(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapConfig {
    #[serde(default = "default_slop")]
    pub slop: f32,
    #[serde(default = "default_tap_duration")]
    pub max_duration_ms: u64,
}

fn default_slop() -> f32 { 10.0 }
fn default_tap_duration() -> u64 { 300 }

impl Default for TapConfig {
    fn default() -> Self {
        Self { slop: default_slop(), max_duration_ms: default_tap_duration() }
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets_dir: default_assets_dir(),
            panels: PanelsConfig::default(),
            tracker: TrackerConfig::default(),
            animation: AnimationConfig::default(),
            tap: TapConfig::default(),
        }
    }
}

impl FolioConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// 内置配置
    pub fn embedded() -> Result<Self> {
        Self::from_json(DEFAULT_CONFIG)
    }

    /// 读取配置：FOLIO_CONFIG 指向的文件优先，否则使用内置配置；
    /// FOLIO_ASSETS 覆盖资源目录
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let json = std::fs::read_to_string(&path).map_err(|e| FolioError::io(path.clone(), e))?;
                log::info!("⚙️ Config loaded from {}", path);
                Self::from_json(&json)?
            }
            Err(_) => Self::embedded()?,
        };

        if let Ok(dir) = std::env::var(ASSETS_ENV) {
            config.assets_dir = dir;
        }
        Ok(config)
    }

    pub fn panel(&self, kind: PanelKind) -> &PanelConfig {
        match kind {
            PanelKind::About => &self.panels.about,
            PanelKind::Interests => &self.panels.interests,
            PanelKind::Contact => &self.panels.contact,
            PanelKind::RelatedWork => &self.panels.related_work,
        }
    }

    pub fn assets_path(&self) -> PathBuf {
        PathBuf::from(&self.assets_dir)
    }
}
