//! The nine Human Design centers and which gates belong to each.

/// A bodygraph center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Center {
    Head,
    Ajna,
    Throat,
    G,
    Heart,
    Sacral,
    SolarPlexus,
    Spleen,
    Root,
}

pub const ALL_CENTERS: [Center; 9] = [
    Center::Head,
    Center::Ajna,
    Center::Throat,
    Center::G,
    Center::Heart,
    Center::Sacral,
    Center::SolarPlexus,
    Center::Spleen,
    Center::Root,
];

impl Center {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "Head",
            Self::Ajna => "Ajna",
            Self::Throat => "Throat",
            Self::G => "G",
            Self::Heart => "Heart",
            Self::Sacral => "Sacral",
            Self::SolarPlexus => "Solar Plexus",
            Self::Spleen => "Spleen",
            Self::Root => "Root",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Gates that sit in this center.
    pub const fn gates(self) -> &'static [u8] {
        match self {
            Self::Head => &[64, 61, 63],
            Self::Ajna => &[47, 24, 4, 17, 43, 11],
            Self::Throat => &[62, 23, 56, 35, 12, 45, 33, 8, 31, 20, 16],
            Self::G => &[7, 1, 13, 10, 25, 15, 46, 2],
            Self::Heart => &[21, 40, 26, 51],
            Self::Sacral => &[5, 14, 29, 59, 9, 3, 42, 27, 34],
            Self::SolarPlexus => &[6, 37, 22, 36, 49, 55, 30],
            Self::Spleen => &[48, 57, 44, 50, 32, 28, 18],
            Self::Root => &[53, 60, 52, 19, 39, 41, 58, 38, 54],
        }
    }

    /// Motor centers drive a defined Throat into a Manifestor.
    pub const fn is_motor(self) -> bool {
        matches!(
            self,
            Self::Heart | Self::Sacral | Self::SolarPlexus | Self::Root
        )
    }
}

/// Center holding `gate`, or `None` outside 1..=64.
pub fn center_of_gate(gate: u8) -> Option<Center> {
    ALL_CENTERS
        .iter()
        .copied()
        .find(|c| c.gates().contains(&gate))
}

/// Center pairs joined by at least one channel.
pub const CENTER_LINKS: [(Center, Center); 17] = [
    (Center::Head, Center::Ajna),
    (Center::Ajna, Center::Throat),
    (Center::Throat, Center::G),
    (Center::Throat, Center::Heart),
    (Center::Throat, Center::Sacral),
    (Center::Throat, Center::SolarPlexus),
    (Center::Throat, Center::Spleen),
    (Center::G, Center::Heart),
    (Center::G, Center::Sacral),
    (Center::G, Center::Spleen),
    (Center::Heart, Center::Spleen),
    (Center::Heart, Center::SolarPlexus),
    (Center::Sacral, Center::Spleen),
    (Center::Sacral, Center::SolarPlexus),
    (Center::Sacral, Center::Root),
    (Center::Spleen, Center::Root),
    (Center::SolarPlexus, Center::Root),
];

/// Number of connected groups among `active` centers.
pub fn connected_groups(active: &[bool; 9]) -> usize {
    let mut parent: [usize; 9] = std::array::from_fn(|i| i);

    fn find(parent: &mut [usize; 9], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for (a, b) in CENTER_LINKS {
        if active[a.index()] && active[b.index()] {
            let (ra, rb) = (find(&mut parent, a.index()), find(&mut parent, b.index()));
            parent[ra] = rb;
        }
    }

    (0..9)
        .filter(|&i| active[i] && find(&mut parent, i) == i)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_gate_in_exactly_one_center() {
        for gate in 1..=64u8 {
            let holders = ALL_CENTERS
                .iter()
                .filter(|c| c.gates().contains(&gate))
                .count();
            assert_eq!(holders, 1, "gate {gate}");
        }
        let total: usize = ALL_CENTERS.iter().map(|c| c.gates().len()).sum();
        assert_eq!(total, 64);
    }

    #[test]
    fn gate_lookup() {
        assert_eq!(center_of_gate(34), Some(Center::Sacral));
        assert_eq!(center_of_gate(25), Some(Center::G));
        assert_eq!(center_of_gate(0), None);
    }

    #[test]
    fn groups() {
        let mut active = [false; 9];
        assert_eq!(connected_groups(&active), 0);

        active[Center::Head.index()] = true;
        active[Center::Ajna.index()] = true;
        assert_eq!(connected_groups(&active), 1);

        active[Center::Root.index()] = true;
        assert_eq!(connected_groups(&active), 2);

        active[Center::Sacral.index()] = true;
        active[Center::Throat.index()] = true;
        assert_eq!(connected_groups(&active), 1);
    }
}
