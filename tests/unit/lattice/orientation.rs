//! Tests for orientation names and the static geometry tables

#[cfg(test)]
mod tests {
    use rhombic_tiling::lattice::orientation::CORE_OFFSETS;
    use rhombic_tiling::lattice::{Offset, Orientation, SectorSet};
    use std::collections::HashSet;

    #[test]
    fn test_names() {
        let names: Vec<String> = Orientation::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["NW", "N", "NE"]);
        for orientation in Orientation::ALL {
            assert_eq!(orientation.to_string(), orientation.name());
        }
    }

    // Tests the documented output order of orientations
    // Verified by reordering the enum variants
    #[test]
    fn test_orientation_order() {
        assert!(Orientation::North < Orientation::NorthWest);
        assert!(Orientation::NorthWest < Orientation::NorthEast);
        assert_eq!(
            Orientation::ALL,
            [Orientation::NorthWest, Orientation::North, Orientation::NorthEast]
        );
    }

    #[test]
    fn test_others_excludes_self() {
        for orientation in Orientation::ALL {
            let others: Vec<Orientation> = orientation.others().collect();
            assert_eq!(others.len(), 2);
            assert!(!others.contains(&orientation));
        }
    }

    // Tests specific offsets lie outside the core and come in opposite pairs
    // Verified by editing one NorthEast offset
    #[test]
    fn test_specific_offsets_are_antipodal() {
        for orientation in Orientation::ALL {
            let [first, second] = *orientation.specific_offsets();
            assert_eq!(first.di, -second.di);
            assert_eq!(first.dj, -second.dj);
            assert!(!CORE_OFFSETS.contains(&first));
            assert!(!CORE_OFFSETS.contains(&second));
        }
    }

    #[test]
    fn test_core_offsets_closed_under_negation() {
        for offset in CORE_OFFSETS {
            assert!(CORE_OFFSETS.contains(&Offset::new(-offset.di, -offset.dj)));
        }
    }

    // Tests forbidden placements always name a foreign orientation
    // Verified by tagging one forbidden entry with its own orientation
    #[test]
    fn test_forbidden_offsets_name_other_orientations() {
        for orientation in Orientation::ALL {
            for forbidden in orientation.forbidden_offsets() {
                assert_ne!(forbidden.orientation, orientation);
            }
        }
    }

    // Tests the eight border patterns visit exactly the eight footprint cells
    // Verified by moving one pattern offset
    #[test]
    fn test_border_patterns_cover_footprint_offsets() {
        for orientation in Orientation::ALL {
            let pattern_offsets: HashSet<Offset> = orientation
                .border_patterns()
                .iter()
                .map(|pattern| pattern.offset)
                .collect();
            let footprint_offsets: HashSet<Offset> = CORE_OFFSETS
                .iter()
                .chain(orientation.specific_offsets())
                .copied()
                .collect();

            assert_eq!(pattern_offsets, footprint_offsets, "{orientation}");
        }
    }

    #[test]
    fn test_border_and_inside_disjoint() {
        for orientation in Orientation::ALL {
            for pattern in orientation.border_patterns() {
                assert!(!pattern.border.intersects(pattern.inside));
                assert_eq!(pattern.border.len(), 2);
            }
        }
    }

    // Tests acute corners fix two cyclically adjacent sectors and nothing inside
    // Verified by changing the bottom acute corner of North to {1,3}
    #[test]
    fn test_acute_patterns_fix_adjacent_sectors() {
        let adjacent: Vec<SectorSet> = (1..=6_u8)
            .map(|sector| SectorSet::of(&[sector, sector % 6 + 1]))
            .collect();

        for orientation in Orientation::ALL {
            let acute: Vec<_> = orientation
                .border_patterns()
                .iter()
                .filter(|pattern| pattern.inside.is_empty())
                .collect();

            assert_eq!(acute.len(), 2);
            for pattern in acute {
                assert!(adjacent.contains(&pattern.border));
            }
        }
    }
}
