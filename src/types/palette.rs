//! Per-character palettes keyed by semantic role.

use std::fmt;

use super::Colour;

/// Semantic colour roles shared by every palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Skin,
    Hair,
    Clothing,
    Weapon,
    Accent,
}

impl Role {
    /// All roles in declaration order.
    pub const ALL: [Role; 5] = [
        Role::Skin,
        Role::Hair,
        Role::Clothing,
        Role::Weapon,
        Role::Accent,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Skin => "skin",
            Role::Hair => "hair",
            Role::Clothing => "clothing",
            Role::Weapon => "weapon",
            Role::Accent => "accent",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable mapping from [`Role`] to colour for one identity.
///
/// Every role always resolves; palettes are defined as constants and never
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Palette name (the identity it belongs to).
    pub name: &'static str,

    colours: [Colour; 5],
}

impl Palette {
    /// Create a palette from its five role colours.
    pub const fn new(
        name: &'static str,
        skin: Colour,
        hair: Colour,
        clothing: Colour,
        weapon: Colour,
        accent: Colour,
    ) -> Self {
        Self {
            name,
            colours: [skin, hair, clothing, weapon, accent],
        }
    }

    /// Get the colour for a role.
    pub fn get(&self, role: Role) -> Colour {
        self.colours[role as usize]
    }

    pub fn skin(&self) -> Colour {
        self.get(Role::Skin)
    }

    pub fn hair(&self) -> Colour {
        self.get(Role::Hair)
    }

    pub fn clothing(&self) -> Colour {
        self.get(Role::Clothing)
    }

    pub fn weapon(&self) -> Colour {
        self.get(Role::Weapon)
    }

    pub fn accent(&self) -> Colour {
        self.get(Role::Accent)
    }

    /// Iterate over `(role, colour)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, Colour)> + '_ {
        Role::ALL.iter().map(move |&role| (role, self.get(role)))
    }
}

/// Shared named colours used across recipes.
pub mod named {
    use super::Colour;

    pub const GOLD: Colour = Colour::rgb(255, 215, 0);
    pub const ORANGE: Colour = Colour::rgb(255, 165, 0);
    pub const DARK_ORANGE: Colour = Colour::rgb(255, 140, 0);
    pub const ORANGE_RED: Colour = Colour::rgb(255, 69, 0);
    pub const SADDLE_BROWN: Colour = Colour::rgb(139, 69, 19);
    pub const FOREST_GREEN: Colour = Colour::rgb(34, 139, 34);
    pub const LOTUS_PINK: Colour = Colour::rgb(255, 182, 193);
    pub const CRIMSON: Colour = Colour::rgb(220, 20, 60);
    pub const RED: Colour = Colour::rgb(255, 0, 0);
    pub const CHARCOAL: Colour = Colour::rgb(25, 25, 25);
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST: Palette = Palette::new(
        "test",
        Colour::rgb(1, 0, 0),
        Colour::rgb(2, 0, 0),
        Colour::rgb(3, 0, 0),
        Colour::rgb(4, 0, 0),
        Colour::rgb(5, 0, 0),
    );

    #[test]
    fn test_get_by_role() {
        assert_eq!(TEST.get(Role::Skin).r, 1);
        assert_eq!(TEST.hair().r, 2);
        assert_eq!(TEST.clothing().r, 3);
        assert_eq!(TEST.weapon().r, 4);
        assert_eq!(TEST.accent().r, 5);
    }

    #[test]
    fn test_iter_in_role_order() {
        let roles: Vec<&str> = TEST.iter().map(|(role, _)| role.name()).collect();
        assert_eq!(roles, vec!["skin", "hair", "clothing", "weapon", "accent"]);
    }
}
