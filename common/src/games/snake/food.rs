use crate::games::SessionRng;
use super::types::{Coordinate, Segment};

/// Samples cells until one is free of the snake.
///
/// The retry loop is unbounded: it slows down as the snake fills the board
/// and only the fully occupied board is ruled out up front.
pub fn place_food(snake: &[Segment], size: i32, rng: &mut SessionRng) -> Coordinate {
    let cells = (size as usize) * (size as usize);
    assert!(
        snake.len() < cells,
        "Cannot place food: snake of length {} fills the {}x{} board",
        snake.len(),
        size,
        size
    );

    loop {
        let candidate = Coordinate::new(rng.inclusive(1, size), rng.inclusive(1, size));
        if !snake.iter().any(|segment| segment.cell == candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_snake(row: i32, cols: std::ops::RangeInclusive<i32>) -> Vec<Segment> {
        cols.map(|col| Segment::new(Coordinate::new(row, col))).collect()
    }

    #[test]
    fn test_food_is_on_board_and_off_snake() {
        let mut rng = SessionRng::new(11);
        let snake = row_snake(10, 10..=13);
        for _ in 0..200 {
            let food = place_food(&snake, 15, &mut rng);
            assert!((1..=15).contains(&food.row));
            assert!((1..=15).contains(&food.col));
            assert!(!snake.iter().any(|s| s.cell == food));
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let mut rng = SessionRng::new(5);
        let mut snake = row_snake(1, 1..=2);
        snake.push(Segment::new(Coordinate::new(2, 2)));
        let food = place_food(&snake, 2, &mut rng);
        assert_eq!(food, Coordinate::new(2, 1));
    }

    #[test]
    #[should_panic(expected = "Cannot place food")]
    fn test_full_board_is_rejected() {
        let mut rng = SessionRng::new(5);
        let mut snake = row_snake(1, 1..=2);
        snake.extend(row_snake(2, 1..=2));
        place_food(&snake, 2, &mut rng);
    }
}
