//! 键盘事件处理

use mini_folio::event::{Key, KeyEvent};
use winit::keyboard::{Key as WinitKey, ModifiersState, NamedKey};

/// 把按下的键翻译成 KeyEvent
pub fn translate_key(key: &WinitKey, modifiers: ModifiersState) -> KeyEvent {
    let key = match key {
        WinitKey::Named(NamedKey::Escape) => Key::Escape,
        WinitKey::Character(text) => text.chars().next().map(Key::Char).unwrap_or(Key::Other),
        _ => Key::Other,
    };
    KeyEvent {
        key,
        ctrl: modifiers.contains(ModifiersState::CONTROL),
        meta: modifiers.contains(ModifiersState::SUPER),
    }
}
