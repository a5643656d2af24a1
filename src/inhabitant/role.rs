//! Role definitions for village inhabitants

/// Profession of an inhabitant, fixed at creation.
///
/// Variant-specific state lives inside the tag, so a warrior's kill counts
/// can never be attached to any other role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// General laborer, places blocks
    Worker,
    /// Oversees construction, paid per finished house
    Builder { houses: i32 },
    /// Fights mobs and bosses for per-kill pay
    Warrior { mob_kills: i32, boss_kills: i32 },
    /// Brews potions
    Mage,
}

impl Role {
    /// Discriminator string used by the persisted format and display output
    pub fn name(&self) -> &'static str {
        match self {
            Role::Worker => "Worker",
            Role::Builder { .. } => "Builder",
            Role::Warrior { .. } => "Warrior",
            Role::Mage => "Mage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_ignores_variant_payload() {
        assert_eq!(Role::Worker.name(), "Worker");
        assert_eq!(Role::Builder { houses: 12 }.name(), "Builder");
        assert_eq!(
            Role::Warrior {
                mob_kills: 5,
                boss_kills: 1
            }
            .name(),
            "Warrior"
        );
        assert_eq!(Role::Mage.name(), "Mage");
    }
}
