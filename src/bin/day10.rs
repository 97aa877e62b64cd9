use aoc2022::parser::read_from_stdin_and_parse;
use itertools::Itertools;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Instruction {
    Addx(i64),
    Noop,
}

// Yields the value of the X register during each successive cycle.
struct Cpu<I>
where
    I: Iterator<Item = Instruction>,
{
    x: i64,
    pending: Option<i64>,
    instructions: I,
}

impl<I> Cpu<I>
where
    I: Iterator<Item = Instruction>,
{
    fn new(instructions: I) -> Cpu<I> {
        Cpu {
            x: 1,
            pending: None,
            instructions,
        }
    }
}

impl<I> Iterator for Cpu<I>
where
    I: Iterator<Item = Instruction>,
{
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(n) = self.pending.take() {
            // Second cycle of an addx. The add only lands after the cycle.
            let during = self.x;
            self.x += n;
            return Some(during);
        }

        match self.instructions.next()? {
            Instruction::Noop => Some(self.x),
            Instruction::Addx(n) => {
                self.pending = Some(n);
                Some(self.x)
            }
        }
    }
}

// Signal strength is sampled during cycles 20, 60, 100, 140, 180 and 220.
fn signal_strength_sum(instructions: &[Instruction]) -> i64 {
    Cpu::new(instructions.iter().copied())
        .enumerate()
        .skip(19)
        .step_by(40)
        .take(6)
        .map(|(i, x)| (i as i64 + 1) * x)
        .sum()
}

fn render(instructions: &[Instruction]) -> String {
    Cpu::new(instructions.iter().copied())
        .enumerate()
        .map(|(i, x)| {
            let column = (i % 40) as i64;
            // The sprite is three pixels wide, centred on X.
            if (x - column).abs() <= 1 {
                '#'
            } else {
                '.'
            }
        })
        .chunks(40)
        .into_iter()
        .map(|row| row.collect::<String>())
        .join("\n")
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let instructions = read_from_stdin_and_parse(parser::parse_input)?;

    println!("{}", signal_strength_sum(&instructions));
    println!("{}", render(&instructions));

    Ok(())
}

mod parser {
    use super::*;

    use aoc2022::parser::base10_numeric;

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::{line_ending, space1};
    use nom::combinator::eof;
    use nom::multi::{many0, separated_list1};
    use nom::sequence::{preceded, terminated, tuple};
    use nom::{IResult, Parser};

    fn addx_instruction(input: &str) -> IResult<&str, Instruction> {
        preceded(tuple((tag("addx"), space1)), base10_numeric)
            .map(Instruction::Addx)
            .parse(input)
    }

    fn noop_instruction(input: &str) -> IResult<&str, Instruction> {
        tag("noop").map(|_| Instruction::Noop).parse(input)
    }

    fn instruction(input: &str) -> IResult<&str, Instruction> {
        alt((addx_instruction, noop_instruction)).parse(input)
    }

    pub(super) fn parse_input(input: &str) -> IResult<&str, Vec<Instruction>> {
        terminated(
            separated_list1(line_ending, instruction),
            tuple((many0(line_ending), eof)),
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_value_during_each_cycle() {
        let input = "\
            noop\n\
            addx 3\n\
            addx -5\n\
        ";

        let (_, instructions) = parser::parse_input(input).unwrap();
        let cycles = Cpu::new(instructions.into_iter()).collect::<Vec<i64>>();

        assert_eq!(cycles, vec![1, 1, 1, 4, 4]);
    }

    #[test]
    fn test_signal_strength_samples() {
        // With the register pinned at 1, the sum is just the sampled cycle
        // numbers: 20 + 60 + 100 + 140 + 180 + 220.
        let instructions = vec![Instruction::Noop; 240];
        assert_eq!(signal_strength_sum(&instructions), 720);
    }

    #[test]
    fn test_render_lights_pixels_under_the_sprite() {
        let instructions = vec![Instruction::Noop; 240];
        let screen = render(&instructions);

        let row = format!("###{}", ".".repeat(37));
        assert_eq!(screen.lines().count(), 6);
        for line in screen.lines() {
            assert_eq!(line, row);
        }
    }

    #[test]
    fn test_render_follows_the_register() {
        // Move the sprite to columns 4..=6. During cycles 1 and 2 the
        // register still reads 1, so the first two pixels light up too.
        let mut instructions = vec![Instruction::Addx(4)];
        instructions.resize(7, Instruction::Noop);
        let screen = render(&instructions);

        assert_eq!(screen, "##..###.");
    }
}
