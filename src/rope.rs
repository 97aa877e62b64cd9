use std::collections::HashSet;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    // Two positions are "touching" when this is at most 1.
    pub fn chebyshev(self, other: Position) -> i64 {
        i64::max((self.x - other.x).abs(), (self.y - other.y).abs())
    }

    fn step(&mut self, direction: Direction) {
        let (dx, dy) = direction.delta();
        self.x += dx;
        self.y += dy;
    }

    fn follow(&mut self, leader: &Position) {
        if self.chebyshev(*leader) > 1 {
            // Catch up by at most one cell per axis, both axes in the same
            // step when the leader sits off on a diagonal.
            self.x += (leader.x - self.x).signum();
            self.y += (leader.y - self.y).signum();
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // Screen-style axes: y grows downwards, so Up is negative y.
    pub fn delta(self) -> (i64, i64) {
        use Direction::*;

        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub direction: Direction,
    pub count: u64,
}

impl Move {
    pub fn from_line(line: &str) -> Result<Move, Error> {
        parser::decode_line(line).map_err(|_| Error::MalformedCommand {
            line: line.to_owned(),
        })
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    MalformedCommand { line: String },
    InvalidConfiguration { knots: usize },
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::MalformedCommand { line } => {
                write!(fmt, "malformed move command: {:?}", line)
            }
            Error::InvalidConfiguration { knots } => {
                write!(fmt, "a rope needs at least 2 knots, got {}", knots)
            }
        }
    }
}

impl std::error::Error for Error {}

#[derive(Eq, PartialEq, Debug)]
pub struct Rope {
    knots: Vec<Position>,
}

impl Rope {
    pub fn new(knots: usize) -> Result<Rope, Error> {
        if knots < 2 {
            return Err(Error::InvalidConfiguration { knots });
        }

        let knots = vec![Position::default(); knots];
        Ok(Rope { knots })
    }

    // One unit step: the head moves one cell, then every later knot catches
    // up off its already-updated leader. Returns the tail position after the
    // cascade.
    pub fn step(&mut self, direction: Direction) -> Position {
        let mut iter = self.knots.iter_mut();
        let mut prev = {
            let head = iter.next().expect("rope has a head");
            head.step(direction);
            *head
        };

        for knot in iter {
            knot.follow(&prev);
            // A gap here means the follow rule itself is broken, not the
            // input. Fail loudly.
            assert!(
                knot.chebyshev(prev) <= 1,
                "follow rule left knot at {:?} out of reach of its leader at {:?}",
                knot,
                prev,
            );
            prev = *knot;
        }

        prev
    }

    pub fn head(&self) -> Position {
        self.knots[0]
    }

    pub fn tail(&self) -> Position {
        *self.knots.last().expect("rope has a tail")
    }
}

// Every distinct cell the tail has ever occupied. Insert-only.
#[derive(Debug, Default)]
pub struct TailRecorder {
    visited: HashSet<Position>,
}

impl TailRecorder {
    pub fn record(&mut self, position: Position) {
        self.visited.insert(position);
    }

    pub fn count(&self) -> usize {
        self.visited.len()
    }
}

mod parser {
    use super::*;

    use crate::parser::base10_numeric;

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::space1;
    use nom::combinator::{all_consuming, verify};
    use nom::sequence::separated_pair;
    use nom::{Finish, IResult, Parser};

    fn direction(input: &str) -> IResult<&str, Direction> {
        alt((
            tag("U").map(|_| Direction::Up),
            tag("D").map(|_| Direction::Down),
            tag("L").map(|_| Direction::Left),
            tag("R").map(|_| Direction::Right),
        ))
        .parse(input)
    }

    fn a_move(input: &str) -> IResult<&str, Move> {
        // Counts are positive: zero repeats is not a command.
        separated_pair(
            direction,
            space1,
            verify(base10_numeric::<u64>, |&count: &u64| count > 0),
        )
        .map(|(direction, count)| Move { direction, count })
        .parse(input)
    }

    pub(super) fn decode_line(line: &str) -> Result<Move, nom::error::Error<&str>> {
        all_consuming(a_move)
            .parse(line)
            .finish()
            .map(|(_rest, m)| m)
    }
}
