#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ShotFired { angle: f64, speed: f64 },
    ShotGrounded { x: f64 },
    TargetHit { damage: u32, remaining: u32 },
    TargetDestroyed,
    TargetRelocated { x: f64 },
}

impl GameEvent {
    pub fn describe(&self) -> String {
        match self {
            Self::ShotFired { angle, speed } => {
                format!("Fired at {:.1} deg, speed {:.2}", angle.to_degrees(), speed)
            }
            Self::ShotGrounded { x } => format!("Shot landed at x={:.0}", x),
            Self::TargetHit { damage, remaining } => {
                format!("{} dmg to target! Health remaining: {}", damage, remaining)
            }
            Self::TargetDestroyed => "Target is dead!".to_string(),
            Self::TargetRelocated { x } => format!("Target moved to x={:.0}", x),
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::TargetHit { .. } | Self::TargetDestroyed)
    }
}
