//! Throw zones and impulse profiles
//!
//! Each throw starts from one of four tray corners. A zone's profile pairs
//! the spawn point with impulse ranges whose signs oppose the corner, so
//! every throw is nominally aimed at the tray center.

use bevy::prelude::*;
use rand::Rng;

/// The four tray corners a throw can start from.
///
/// North is negative Z, west is negative X, matching the tray layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThrowZone {
    SouthWest,
    SouthEast,
    NorthWest,
    NorthEast,
}

impl ThrowZone {
    pub const ALL: [ThrowZone; 4] = [
        ThrowZone::SouthWest,
        ThrowZone::SouthEast,
        ThrowZone::NorthWest,
        ThrowZone::NorthEast,
    ];

    /// Pick a zone uniformly at random.
    pub fn random(rng: &mut impl Rng) -> ThrowZone {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThrowZone::SouthWest => "south-west",
            ThrowZone::SouthEast => "south-east",
            ThrowZone::NorthWest => "north-west",
            ThrowZone::NorthEast => "north-east",
        }
    }
}

/// Spawn point and impulse ranges for one throw zone. Immutable; selected,
/// never mutated, at roll time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImpulseProfile {
    pub spawn: Vec3,
    /// Inclusive-exclusive range of the unscaled X impulse component
    pub impulse_x: (f32, f32),
    /// Inclusive-exclusive range of the unscaled Z impulse component
    pub impulse_z: (f32, f32),
}

impl ImpulseProfile {
    /// Pure lookup from zone to profile.
    pub fn for_zone(zone: ThrowZone) -> ImpulseProfile {
        match zone {
            ThrowZone::SouthWest => ImpulseProfile {
                spawn: Vec3::new(-12.0, 3.0, 5.0),
                impulse_x: (0.0, 1.0),
                impulse_z: (-1.0, 0.0),
            },
            ThrowZone::SouthEast => ImpulseProfile {
                spawn: Vec3::new(12.0, 3.0, 5.0),
                impulse_x: (-1.0, 0.0),
                impulse_z: (-1.0, 0.0),
            },
            ThrowZone::NorthWest => ImpulseProfile {
                spawn: Vec3::new(-12.0, 3.0, -7.0),
                impulse_x: (0.0, 1.0),
                impulse_z: (0.0, 1.0),
            },
            ThrowZone::NorthEast => ImpulseProfile {
                spawn: Vec3::new(12.0, 3.0, -7.0),
                impulse_x: (-1.0, 0.0),
                impulse_z: (0.0, 1.0),
            },
        }
    }

    /// Sample a horizontal impulse within this profile's ranges.
    pub fn sample_impulse(&self, rng: &mut impl Rng, scale: f32) -> Vec3 {
        let x = rng.gen_range(self.impulse_x.0..self.impulse_x.1);
        let z = rng.gen_range(self.impulse_z.0..self.impulse_z.1);
        Vec3::new(x * scale, 0.0, z * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_profiles_aim_at_tray_center() {
        // Impulse range signs must oppose the spawn-corner signs so the
        // throw heads toward the center of the tray.
        for zone in ThrowZone::ALL {
            let profile = ImpulseProfile::for_zone(zone);

            assert!(profile.impulse_x.0 < profile.impulse_x.1);
            assert!(profile.impulse_z.0 < profile.impulse_z.1);

            if profile.spawn.x > 0.0 {
                assert!(profile.impulse_x.1 <= 0.0, "{} throws east", zone.name());
            } else {
                assert!(profile.impulse_x.0 >= 0.0, "{} throws west", zone.name());
            }
            if profile.spawn.z > 0.0 {
                assert!(profile.impulse_z.1 <= 0.0, "{} throws south", zone.name());
            } else {
                assert!(profile.impulse_z.0 >= 0.0, "{} throws north", zone.name());
            }
        }
    }

    #[test]
    fn test_profiles_spawn_above_floor() {
        for zone in ThrowZone::ALL {
            assert_eq!(ImpulseProfile::for_zone(zone).spawn.y, 3.0);
        }
    }

    #[test]
    fn test_sample_impulse_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let profile = ImpulseProfile::for_zone(ThrowZone::SouthWest);

        for _ in 0..100 {
            let impulse = profile.sample_impulse(&mut rng, 35.0);
            assert!(impulse.x >= 0.0 && impulse.x < 35.0);
            assert_eq!(impulse.y, 0.0);
            assert!(impulse.z >= -35.0 && impulse.z < 0.0);
        }
    }

    #[test]
    fn test_random_zone_covers_all_corners() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(ThrowZone::random(&mut rng));
        }
        assert_eq!(seen.len(), ThrowZone::ALL.len());
    }
}
