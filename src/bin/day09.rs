use std::io::Read;

use aoc2022::rope::{Move, Rope, TailRecorder};

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    // Refuse the whole run on the first malformed line.
    let moves = buffer
        .lines()
        .map(Move::from_line)
        .collect::<Result<Vec<_>, _>>()?;

    for knots in [2, 10] {
        let mut rope = Rope::new(knots)?;
        let mut recorder = TailRecorder::default();

        // The cell the tail starts on counts, before any command runs.
        recorder.record(rope.tail());

        for &Move { direction, count } in &moves {
            for _ in 0..count {
                recorder.record(rope.step(direction));
            }
        }

        println!("{}", recorder.count());
    }

    Ok(())
}
