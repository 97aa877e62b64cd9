use std::collections::BTreeMap;
use std::iter::from_fn;

use aoc2022::parser::read_from_stdin_and_parse;

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct Crate(char);

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
struct Move {
    count: u64,
    from: u64,
    to: u64,
}

#[derive(Eq, PartialEq, Debug, Clone)]
struct Ship {
    stacks: BTreeMap<u64, Vec<Crate>>,
}

impl Ship {
    // Crates can't move between two stacks of the map directly, so they rest
    // in an interim Vec. Popping reverses the run of crates.
    fn lift(&mut self, m: Move) -> Vec<Crate> {
        let n = usize::try_from(m.count).unwrap();
        let mut interim = Vec::with_capacity(n);

        if let Some(from) = self.stacks.get_mut(&m.from) {
            interim.extend(from_fn(|| from.pop()).take(n));
        }

        interim
    }

    // CrateMover 9000 moves one crate at a time, so the run lands reversed.
    fn perform(&mut self, m: Move) {
        let interim = self.lift(m);

        if let Some(to) = self.stacks.get_mut(&m.to) {
            to.extend(interim);
        }
    }

    // CrateMover 9001 lifts the whole run at once and keeps its order.
    fn perform_in_bulk(&mut self, m: Move) {
        let interim = self.lift(m);

        if let Some(to) = self.stacks.get_mut(&m.to) {
            to.extend(interim.into_iter().rev());
        }
    }

    fn tops(&self) -> impl Iterator<Item = char> + '_ {
        self.stacks
            .values()
            .filter_map(|stack| stack.last())
            .map(|&Crate(c)| c)
    }
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (ship, moves) = read_from_stdin_and_parse(parser::parse_input)?;

    let mut single = ship.clone();
    for &m in &moves {
        single.perform(m);
    }
    println!("{}", single.tops().collect::<String>());

    let mut bulk = ship;
    for &m in &moves {
        bulk.perform_in_bulk(m);
    }
    println!("{}", bulk.tops().collect::<String>());

    Ok(())
}

mod parser {
    use super::*;

    use aoc2022::parser::base10_numeric;

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::{anychar, char, line_ending, space0, space1};
    use nom::combinator::eof;
    use nom::multi::{many0, many1, separated_list1};
    use nom::sequence::{delimited, pair, preceded, terminated, tuple};
    use nom::{IResult, Parser};

    fn air(input: &str) -> IResult<&str, Option<Crate>> {
        tag("   ").map(|_| None).parse(input)
    }

    fn krate(input: &str) -> IResult<&str, Option<Crate>> {
        delimited(char('['), anychar, char(']'))
            .map(|c| Some(Crate(c)))
            .parse(input)
    }

    fn names(input: &str) -> IResult<&str, Vec<u64>> {
        terminated(
            delimited(space0, separated_list1(space1, base10_numeric), space0),
            pair(line_ending, line_ending),
        )
        .parse(input)
    }

    fn ship(input: &str) -> IResult<&str, Ship> {
        pair(
            many1(terminated(
                separated_list1(char(' '), alt((air, krate))),
                line_ending,
            )),
            names,
        )
        .map(|(rows, names)| collate_stacks(rows, names))
        .parse(input)
    }

    // Rows arrive top-down but the stacks grow bottom-up, so walk the rows in
    // reverse and drop the empty cells.
    fn collate_stacks(rows: Vec<Vec<Option<Crate>>>, names: Vec<u64>) -> Ship {
        let mut stacks: BTreeMap<u64, Vec<Crate>> =
            names.iter().map(|&name| (name, Vec::new())).collect();

        for row in rows.into_iter().rev() {
            for (name, cell) in names.iter().zip(row) {
                if let Some(krate) = cell {
                    stacks.get_mut(name).expect("name is present").push(krate);
                }
            }
        }

        Ship { stacks }
    }

    fn a_move(input: &str) -> IResult<&str, Move> {
        tuple((
            preceded(pair(tag("move"), space1), base10_numeric),
            preceded(pair(space1, pair(tag("from"), space1)), base10_numeric),
            preceded(pair(space1, pair(tag("to"), space1)), base10_numeric),
        ))
        .map(|(count, from, to)| Move { count, from, to })
        .parse(input)
    }

    fn end_of_input(input: &str) -> IResult<&str, ()> {
        pair(many0(line_ending), eof).map(|_| ()).parse(input)
    }

    pub(super) fn parse_input(input: &str) -> IResult<&str, (Ship, Vec<Move>)> {
        pair(
            ship,
            terminated(separated_list1(line_ending, a_move), end_of_input),
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROCEDURE: &str = concat!(
        "    [D]    \n",
        "[N] [C]    \n",
        "[Z] [M] [P]\n",
        " 1   2   3 \n",
        "\n",
        "move 1 from 2 to 1\n",
        "move 3 from 1 to 3\n",
        "move 2 from 2 to 1\n",
        "move 1 from 1 to 2\n",
    );

    fn parsed() -> (Ship, Vec<Move>) {
        let (rest, parsed) = parser::parse_input(PROCEDURE).expect("parse succeeds");
        assert_eq!(rest, "");
        parsed
    }

    #[test]
    fn test_parse_collates_the_stacks() {
        let (ship, moves) = parsed();

        let drawn: BTreeMap<u64, Vec<Crate>> = [
            (1, vec![Crate('Z'), Crate('N')]),
            (2, vec![Crate('M'), Crate('C'), Crate('D')]),
            (3, vec![Crate('P')]),
        ]
        .into_iter()
        .collect();

        assert_eq!(ship, Ship { stacks: drawn });
        assert_eq!(
            moves,
            vec![
                Move {
                    count: 1,
                    from: 2,
                    to: 1
                },
                Move {
                    count: 3,
                    from: 1,
                    to: 3
                },
                Move {
                    count: 2,
                    from: 2,
                    to: 1
                },
                Move {
                    count: 1,
                    from: 1,
                    to: 2
                },
            ]
        );
    }

    #[test]
    fn test_single_crate_moves() {
        let (mut ship, moves) = parsed();

        for m in moves {
            ship.perform(m);
        }

        assert_eq!(ship.tops().collect::<String>(), "CMZ");
    }

    #[test]
    fn test_bulk_crate_moves() {
        let (mut ship, moves) = parsed();

        for m in moves {
            ship.perform_in_bulk(m);
        }

        assert_eq!(ship.tops().collect::<String>(), "MCD");
    }
}
