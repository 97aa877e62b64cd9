use std::io::BufRead;

use nom::{bytes::complete::tag, character::complete::digit1, combinator::map_res, IResult};

type Range = std::ops::RangeInclusive<u64>;
struct Ranges(Range, Range);

impl Ranges {
    fn fully_contained(&self) -> bool {
        let Ranges(r0, r1) = self;

        (r0.contains(r1.start()) && r0.contains(r1.end()))
            || (r1.contains(r0.start()) && r1.contains(r0.end()))
    }

    fn overlapping(&self) -> bool {
        let Ranges(r0, r1) = self;

        (r0.contains(r1.start()) || r0.contains(r1.end()))
            || (r1.contains(r0.start()) || r1.contains(r0.end()))
    }
}

fn integer_parser(input: &str) -> IResult<&str, u64> {
    map_res(digit1, |s| u64::from_str_radix(s, 10))(input)
}

fn range_parser(input: &str) -> IResult<&str, Range> {
    let (input, a) = integer_parser(input)?;
    let (input, _) = tag("-")(input)?;
    let (input, b) = integer_parser(input)?;

    Ok((input, a..=b))
}

fn line_parser(input: &str) -> IResult<&str, Ranges> {
    let (input, a) = range_parser(input)?;
    let (input, _) = tag(",")(input)?;
    let (input, b) = range_parser(input)?;

    Ok((input, Ranges(a, b)))
}

pub fn main() {
    let pairs: Vec<Ranges> = std::io::stdin()
        .lock()
        .lines()
        .map(Result::unwrap)
        .map(|s| line_parser(&s).map(|(_input, r)| r).expect("valid parse"))
        .collect();

    let contained = pairs.iter().filter(|pair| pair.fully_contained()).count();
    let overlapping = pairs.iter().filter(|pair| pair.overlapping()).count();

    println!("{}", contained);
    println!("{}", overlapping);
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAIRS: [&str; 6] = [
        "2-4,6-8",
        "2-3,4-5",
        "5-7,7-9",
        "2-8,3-7",
        "6-6,4-6",
        "2-6,4-8",
    ];

    fn parsed() -> Vec<Ranges> {
        PAIRS
            .iter()
            .map(|line| line_parser(line).map(|(_input, r)| r).expect("valid parse"))
            .collect()
    }

    #[test]
    fn test_full_containment_in_either_direction() {
        let contained = parsed().iter().filter(|p| p.fully_contained()).count();
        assert_eq!(contained, 2);
    }

    #[test]
    fn test_overlap_counts_partial_overlaps_too() {
        let overlapping = parsed().iter().filter(|p| p.overlapping()).count();
        assert_eq!(overlapping, 4);
    }
}
