use std::ops::Add;

#[derive(Default)]
struct Points(u64);

impl Add for Points {
    type Output = Points;

    fn add(self, other: Points) -> Points {
        Points(self.0 + other.0)
    }
}

enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl From<&str> for Shape {
    fn from(s: &str) -> Shape {
        use Shape::*;
        match s {
            "A" | "X" => Rock,
            "B" | "Y" => Paper,
            "C" | "Z" => Scissors,
            _ => panic!("invalid shape: {s:?}"),
        }
    }
}

impl From<Shape> for Points {
    fn from(shape: Shape) -> Points {
        use Shape::*;
        match shape {
            Rock => Points(1),
            Paper => Points(2),
            Scissors => Points(3),
        }
    }
}

enum Outcome {
    ElfWin,
    Draw,
    MeWin,
}

impl From<&str> for Outcome {
    fn from(s: &str) -> Outcome {
        use Outcome::*;
        match s {
            "X" => ElfWin,
            "Y" => Draw,
            "Z" => MeWin,
            _ => panic!("invalid outcome: {s:?}"),
        }
    }
}

impl From<Outcome> for Points {
    fn from(outcome: Outcome) -> Points {
        use Outcome::*;
        match outcome {
            ElfWin => Points(0),
            Draw => Points(3),
            MeWin => Points(6),
        }
    }
}

// First reading of the strategy guide: both columns name a shape.
struct Round {
    elf: Shape,
    mine: Shape,
}

impl Round {
    fn outcome(&self) -> Outcome {
        use {Outcome::*, Shape::*};
        let Round { elf, mine } = self;
        match (mine, elf) {
            (Rock, Scissors) | (Paper, Rock) | (Scissors, Paper) => MeWin,
            (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Draw,
            _ => ElfWin,
        }
    }
}

impl From<Round> for Points {
    fn from(r: Round) -> Points {
        Points::from(r.outcome()) + Points::from(r.mine)
    }
}

// Second reading: the right column is the outcome we have to arrange.
struct Strategy {
    elf: Shape,
    outcome: Outcome,
}

impl Strategy {
    fn my_shape(&self) -> Shape {
        use {Outcome::*, Shape::*};
        let Strategy { elf, outcome } = self;
        match (elf, outcome) {
            (Rock, ElfWin) | (Scissors, Draw) | (Paper, MeWin) => Scissors,
            (Scissors, ElfWin) | (Paper, Draw) | (Rock, MeWin) => Paper,
            (Paper, ElfWin) | (Rock, Draw) | (Scissors, MeWin) => Rock,
        }
    }
}

impl From<Strategy> for Points {
    fn from(s: Strategy) -> Points {
        Points::from(s.my_shape()) + Points::from(s.outcome)
    }
}

pub fn main() {
    let lines: Vec<String> = std::io::stdin().lines().map_while(Result::ok).collect();

    let Points(shapes) = lines
        .iter()
        .map(|line| split(line))
        .map(|(elf, mine)| Round {
            elf: elf.into(),
            mine: mine.into(),
        })
        .map(Points::from)
        .fold(Points::default(), Points::add);

    let Points(outcomes) = lines
        .iter()
        .map(|line| split(line))
        .map(|(elf, outcome)| Strategy {
            elf: elf.into(),
            outcome: outcome.into(),
        })
        .map(Points::from)
        .fold(Points::default(), Points::add);

    println!("{}", shapes);
    println!("{}", outcomes);
}

fn split(line: &str) -> (&str, &str) {
    line.split_once(' ')
        .unwrap_or_else(|| panic!("invalid line: {line:?}"))
}
