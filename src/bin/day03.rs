use std::collections::HashSet;

use itertools::Itertools;

struct Rucksack {
    first: HashSet<u8>,
    second: HashSet<u8>,
}

impl Rucksack {
    fn misplaced(&self) -> Option<u8> {
        self.first.intersection(&self.second).next().copied()
    }

    fn all_items(&self) -> HashSet<u8> {
        self.first.union(&self.second).copied().collect()
    }

    // The one item type carried by every rucksack in the group.
    fn multi_way_common<I>(sacks: I) -> Option<u8>
    where
        I: IntoIterator<Item = Rucksack>,
    {
        let mut sacks = sacks.into_iter();
        let first = sacks.next().expect("expected at least one rucksack");

        sacks
            .fold(first.all_items(), |common, sack| {
                common
                    .intersection(&sack.all_items())
                    .copied()
                    .collect()
            })
            .into_iter()
            .next()
    }
}

impl<S> From<S> for Rucksack
where
    S: AsRef<str>,
{
    fn from(s: S) -> Rucksack {
        let s = s.as_ref();
        let (first, second) = s.split_at(s.len() / 2);

        Rucksack {
            first: first.bytes().collect(),
            second: second.bytes().collect(),
        }
    }
}

fn priority(item: u8) -> u64 {
    match item {
        b'a'..=b'z' => u64::from(item - b'a') + 1,
        b'A'..=b'Z' => u64::from(item - b'A') + 27,
        _ => panic!("invalid item: {}", char::from(item)),
    }
}

pub fn main() {
    let lines: Vec<String> = std::io::stdin().lines().map(Result::unwrap).collect();

    let misplaced: u64 = lines
        .iter()
        .map(Rucksack::from)
        .filter_map(|sack| sack.misplaced())
        .map(priority)
        .sum();

    let badges: u64 = lines
        .iter()
        .map(Rucksack::from)
        .chunks(3)
        .into_iter()
        .filter_map(Rucksack::multi_way_common)
        .map(priority)
        .sum();

    println!("{}", misplaced);
    println!("{}", badges);
}
