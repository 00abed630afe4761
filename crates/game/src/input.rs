use bitflags::bitflags;

bitflags! {
    /// Keys pressed since the previous tick. Edge-triggered: holding a key
    /// down produces a single event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InputEvents: u8 {
        const AIM_UP = 1 << 0;
        const AIM_DOWN = 1 << 1;
        const SLOWER = 1 << 2;
        const FASTER = 1 << 3;
        const FIRE = 1 << 4;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LauncherAction {
    AimUp,
    AimDown,
    Slower,
    Faster,
    Fire,
}

impl InputEvents {
    /// At most one action is applied per tick. Earlier flags win.
    pub fn action(self) -> Option<LauncherAction> {
        if self.contains(Self::AIM_UP) {
            Some(LauncherAction::AimUp)
        } else if self.contains(Self::AIM_DOWN) {
            Some(LauncherAction::AimDown)
        } else if self.contains(Self::SLOWER) {
            Some(LauncherAction::Slower)
        } else if self.contains(Self::FASTER) {
            Some(LauncherAction::Faster)
        } else if self.contains(Self::FIRE) {
            Some(LauncherAction::Fire)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        let all = InputEvents::all();
        assert_eq!(all.action(), Some(LauncherAction::AimUp));

        let events = InputEvents::FIRE | InputEvents::FASTER;
        assert_eq!(events.action(), Some(LauncherAction::Faster));

        let events = InputEvents::FIRE | InputEvents::AIM_DOWN | InputEvents::SLOWER;
        assert_eq!(events.action(), Some(LauncherAction::AimDown));

        assert_eq!(InputEvents::FIRE.action(), Some(LauncherAction::Fire));
        assert_eq!(InputEvents::empty().action(), None);
    }
}
