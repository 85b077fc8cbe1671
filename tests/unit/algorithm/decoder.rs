//! Tests for model decoding and solution ordering

#[cfg(test)]
mod tests {
    use rhombic_tiling::Solution;
    use rhombic_tiling::algorithm::decoder::{decode_model, sort_solutions};
    use rhombic_tiling::encoding::VariableRegistry;
    use rhombic_tiling::lattice::{Cell, Orientation, SectorSet};

    // Tests only true orientation variables become placements
    // Verified by decoding every positive literal through the registry
    #[test]
    fn test_decode_ignores_negative_and_border_literals() {
        let mut registry = VariableRegistry::new();
        let first = registry.id_of(Cell::new(1, 0), Orientation::North) as i32;
        let label = registry.id_of(Cell::new(1, 1), SectorSet::of(&[2, 5])) as i32;
        let second = registry.id_of(Cell::new(0, 1), Orientation::NorthEast) as i32;
        let absent = registry.id_of(Cell::new(0, 0), Orientation::NorthWest) as i32;

        let solution = decode_model(&[first, label, second, -absent, 99], &registry);

        assert_eq!(
            solution.placements(),
            &[
                (Cell::new(0, 1), Orientation::NorthEast),
                (Cell::new(1, 0), Orientation::North),
            ]
        );
        assert_eq!(solution.to_string(), "0.1NE,1.0N");
    }

    #[test]
    fn test_solution_is_sorted_on_construction() {
        let solution = Solution::new(vec![
            (Cell::new(2, 0), Orientation::North),
            (Cell::new(0, 3), Orientation::NorthWest),
            (Cell::new(0, 3), Orientation::NorthWest),
            (Cell::new(0, 1), Orientation::NorthEast),
        ]);

        let cells: Vec<Cell> = solution.placements().iter().map(|&(cell, _)| cell).collect();
        assert_eq!(
            cells,
            vec![Cell::new(0, 1), Cell::new(0, 3), Cell::new(0, 3), Cell::new(2, 0)]
        );
        assert_eq!(solution.len(), 4);
        assert_eq!(
            solution.orientations_at(Cell::new(0, 3)).collect::<Vec<_>>(),
            vec![Orientation::NorthWest; 2]
        );
    }

    #[test]
    fn test_sort_solutions_lexicographic() {
        let late = Solution::new(vec![(Cell::new(1, 0), Orientation::NorthWest)]);
        let early = Solution::new(vec![(Cell::new(0, 0), Orientation::NorthEast)]);
        let middle = Solution::new(vec![(Cell::new(0, 1), Orientation::NorthWest)]);
        let mut solutions = vec![late.clone(), early.clone(), middle.clone()];

        sort_solutions(&mut solutions);

        assert_eq!(solutions, vec![early, middle, late]);
    }

    #[test]
    fn test_orientation_order_within_cell() {
        let solution = Solution::new(vec![
            (Cell::new(0, 0), Orientation::NorthEast),
            (Cell::new(0, 0), Orientation::NorthWest),
            (Cell::new(0, 0), Orientation::North),
        ]);
        assert_eq!(solution.to_string(), "0.0N,0.0NW,0.0NE");
    }

    #[test]
    fn test_empty_solution() {
        let solution = decode_model(&[-1, -2], &VariableRegistry::new());
        assert!(solution.is_empty());
        assert_eq!(solution.to_string(), "");
    }
}
