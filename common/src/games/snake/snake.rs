use super::types::{Coordinate, Direction, GrowthRule, Segment};

pub const INITIAL_LENGTH: i32 = 4;
pub const INITIAL_DIRECTION: Direction = Direction::Left;

const INITIAL_ANCHOR: i32 = 10;

/// Body cells, head first. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Segment>,
}

impl Snake {
    /// Horizontal snake heading left with its head at row 10, column 10
    /// when the board is large enough, pulled inwards on smaller boards.
    pub fn initial(size: i32) -> Self {
        let row = INITIAL_ANCHOR.min(size);
        let col = INITIAL_ANCHOR.min(size - INITIAL_LENGTH + 1).max(1);
        let segments = (0..INITIAL_LENGTH)
            .map(|offset| Segment::new(Coordinate::new(row, col + offset)))
            .collect();
        Self { segments }
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        assert!(!segments.is_empty(), "Snake body should never be empty");
        Self { segments }
    }

    pub fn head(&self) -> Coordinate {
        self.segments
            .first()
            .expect("Snake body should never be empty")
            .cell
    }

    pub fn tail(&self) -> Coordinate {
        self.segments
            .last()
            .expect("Snake body should never be empty")
            .cell
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.segments.iter().map(|segment| segment.cell)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn occupies(&self, cell: Coordinate) -> bool {
        self.cells().any(|c| c == cell)
    }

    /// The segments that follow the new head on the next tick.
    pub fn next_body(&self, rule: GrowthRule, will_eat: bool) -> Vec<Segment> {
        let (last, rest) = self
            .segments
            .split_last()
            .expect("Snake body should never be empty");

        match rule {
            GrowthRule::Immediate => {
                let kept = if will_eat { &self.segments[..] } else { rest };
                kept.iter().map(|segment| Segment::new(segment.cell)).collect()
            }
            GrowthRule::Digest => {
                let mut body = rest.to_vec();
                if last.has_food {
                    body.push(Segment::new(last.cell));
                }
                body
            }
        }
    }

    pub fn advanced(head: Segment, body: Vec<Segment>) -> Self {
        let mut segments = Vec::with_capacity(body.len() + 1);
        segments.push(head);
        segments.extend(body);
        Self { segments }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(segments: &[Segment]) -> Vec<(i32, i32)> {
        segments.iter().map(|s| (s.cell.row, s.cell.col)).collect()
    }

    #[test]
    fn test_initial_snake_on_standard_board() {
        let snake = Snake::initial(15);
        assert_eq!(cells(snake.segments()), vec![(10, 10), (10, 11), (10, 12), (10, 13)]);
        assert_eq!(snake.head(), Coordinate::new(10, 10));
        assert_eq!(snake.tail(), Coordinate::new(10, 13));
        assert!(snake.segments().iter().all(|s| !s.has_food));
    }

    #[test]
    fn test_initial_snake_fits_small_board() {
        let snake = Snake::initial(6);
        assert_eq!(cells(snake.segments()), vec![(6, 3), (6, 4), (6, 5), (6, 6)]);

        let snake = Snake::initial(4);
        assert_eq!(cells(snake.segments()), vec![(4, 1), (4, 2), (4, 3), (4, 4)]);
    }

    #[test]
    fn test_immediate_rule_drops_tail_without_food() {
        let snake = Snake::initial(15);
        let body = snake.next_body(GrowthRule::Immediate, false);
        assert_eq!(cells(&body), vec![(10, 10), (10, 11), (10, 12)]);
    }

    #[test]
    fn test_immediate_rule_keeps_tail_when_eating() {
        let snake = Snake::initial(15);
        let body = snake.next_body(GrowthRule::Immediate, true);
        assert_eq!(body.len(), 4);
    }

    #[test]
    fn test_immediate_rule_clears_digest_flags() {
        let snake = Snake::from_segments(vec![
            Segment::with_food(Coordinate::new(1, 1), true),
            Segment::new(Coordinate::new(1, 2)),
        ]);
        let body = snake.next_body(GrowthRule::Immediate, true);
        assert!(body.iter().all(|s| !s.has_food));
    }

    #[test]
    fn test_digest_rule_keeps_flagged_tail_once() {
        let snake = Snake::from_segments(vec![
            Segment::new(Coordinate::new(1, 1)),
            Segment::new(Coordinate::new(1, 2)),
            Segment::with_food(Coordinate::new(1, 3), true),
        ]);
        let body = snake.next_body(GrowthRule::Digest, false);
        assert_eq!(cells(&body), vec![(1, 1), (1, 2), (1, 3)]);
        assert!(!body[2].has_food);
    }

    #[test]
    fn test_digest_rule_ignores_eating_head() {
        let snake = Snake::initial(15);
        let body = snake.next_body(GrowthRule::Digest, true);
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_advanced_puts_head_first() {
        let snake = Snake::initial(15);
        let body = snake.next_body(GrowthRule::Digest, false);
        let moved = Snake::advanced(Segment::new(Coordinate::new(10, 9)), body);
        assert_eq!(cells(moved.segments()), vec![(10, 9), (10, 10), (10, 11), (10, 12)]);
    }

    #[test]
    #[should_panic(expected = "never be empty")]
    fn test_empty_snake_rejected() {
        Snake::from_segments(Vec::new());
    }
}
