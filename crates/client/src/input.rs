use cannonbattle::InputEvents;
use crossterm::event::KeyCode;

/// Collects key presses between frames. Presses of the same key within one
/// frame collapse into a single event; terminal auto-repeat still yields one
/// event per frame while a key is held.
#[derive(Default)]
pub struct Keyboard {
    pressed: InputEvents,
}

impl Keyboard {
    pub fn press(&mut self, code: KeyCode) {
        if let Some(event) = map_key(code) {
            self.pressed |= event;
        }
    }

    pub fn take(&mut self) -> InputEvents {
        std::mem::take(&mut self.pressed)
    }
}

fn map_key(code: KeyCode) -> Option<InputEvents> {
    match code {
        KeyCode::Up => Some(InputEvents::AIM_UP),
        KeyCode::Down => Some(InputEvents::AIM_DOWN),
        KeyCode::Left => Some(InputEvents::SLOWER),
        KeyCode::Right => Some(InputEvents::FASTER),
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputEvents::FIRE),
        _ => None,
    }
}
