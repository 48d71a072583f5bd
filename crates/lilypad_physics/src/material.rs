//! Material properties for collision response

/// Surface properties attached to each collision primitive
///
/// The triple is consumed opaquely by the solver: static friction
/// resists the start of sliding, dynamic friction damps ongoing
/// sliding, restitution controls bounce. Values are conventionally in
/// [0, 1]; `new` clamps, but the fields are public and permissive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialProperties {
    /// Resistance to the start of sliding (0.0 = ice, 1.0 = rubber)
    pub static_friction: f32,
    /// Resistance to ongoing sliding
    pub dynamic_friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = perfect bounce)
    pub restitution: f32,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self {
            static_friction: 0.5,
            dynamic_friction: 0.5,
            restitution: 0.0,
        }
    }
}

impl MaterialProperties {
    /// Slick surface: very low friction, slight bounce
    pub const ICE: Self = Self {
        static_friction: 0.05,
        dynamic_friction: 0.03,
        restitution: 0.1,
    };

    /// Grippy and bouncy
    pub const RUBBER: Self = Self {
        static_friction: 0.9,
        dynamic_friction: 0.8,
        restitution: 0.8,
    };

    /// Wooden platform surface: moderate friction, low bounce
    pub const WOOD: Self = Self {
        static_friction: 0.5,
        dynamic_friction: 0.4,
        restitution: 0.2,
    };

    /// Grassy ground: high friction, almost no bounce
    pub const GRASS: Self = Self {
        static_friction: 0.8,
        dynamic_friction: 0.7,
        restitution: 0.05,
    };

    /// Create a material with the given triple, clamped to [0, 1]
    pub fn new(static_friction: f32, dynamic_friction: f32, restitution: f32) -> Self {
        Self {
            static_friction: static_friction.clamp(0.0, 1.0),
            dynamic_friction: dynamic_friction.clamp(0.0, 1.0),
            restitution: restitution.clamp(0.0, 1.0),
        }
    }

    /// Combine two materials for contact response
    ///
    /// Geometric mean for the friction pair, maximum for restitution
    /// (the bouncier surface wins).
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            static_friction: (self.static_friction * other.static_friction).sqrt(),
            dynamic_friction: (self.dynamic_friction * other.dynamic_friction).sqrt(),
            restitution: self.restitution.max(other.restitution),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let m = MaterialProperties::default();
        assert_eq!(m.static_friction, 0.5);
        assert_eq!(m.restitution, 0.0);
    }

    #[test]
    fn test_new_clamps() {
        let m = MaterialProperties::new(1.5, -0.5, 2.0);
        assert_eq!(m.static_friction, 1.0);
        assert_eq!(m.dynamic_friction, 0.0);
        assert_eq!(m.restitution, 1.0);
    }

    #[test]
    fn test_combine_friction_geometric_mean() {
        let a = MaterialProperties::new(0.4, 0.4, 0.0);
        let b = MaterialProperties::new(0.9, 0.9, 0.0);
        let c = a.combine(&b);
        let expected = (0.4_f32 * 0.9).sqrt();
        assert!((c.static_friction - expected).abs() < 0.0001);
        assert!((c.dynamic_friction - expected).abs() < 0.0001);
    }

    #[test]
    fn test_combine_max_restitution() {
        let a = MaterialProperties::new(0.5, 0.5, 0.2);
        let b = MaterialProperties::new(0.5, 0.5, 0.7);
        assert_eq!(a.combine(&b).restitution, 0.7);
    }

    #[test]
    fn test_combine_commutative() {
        let a = MaterialProperties::new(0.3, 0.2, 0.5);
        let b = MaterialProperties::new(0.7, 0.6, 0.2);
        let ab = a.combine(&b);
        let ba = b.combine(&a);
        assert!((ab.static_friction - ba.static_friction).abs() < 0.0001);
        assert_eq!(ab.restitution, ba.restitution);
    }
}
