use rayon::prelude::*;

struct Forest {
    // Row-major byte values. Comparing raw ASCII digits works fine, and 0 is
    // definitely lower than all of them.
    heights: Vec<u8>,
    width: usize,
}

impl Forest {
    fn parse<I>(lines: I) -> Forest
    where
        I: IntoIterator<Item = String>,
    {
        let mut heights = Vec::new();
        let mut width = 0;

        for line in lines {
            assert!(width == 0 || width == line.len(), "ragged grid line");
            width = line.len();
            heights.extend(line.bytes());
        }

        Forest { heights, width }
    }

    fn height(&self) -> usize {
        self.heights.len() / self.width
    }

    // A tree is visible when everything between it and one edge is shorter.
    // Sweep every row and column from both ends, marking the running maxima.
    fn count_visible(&self) -> usize {
        let mut visible = vec![false; self.heights.len()];

        for y in 0..self.height() {
            let row = (y * self.width)..((y + 1) * self.width);
            self.mark_visible(&mut visible, row.clone());
            self.mark_visible(&mut visible, row.rev());
        }

        for x in 0..self.width {
            let column = (x..self.heights.len()).step_by(self.width);
            self.mark_visible(&mut visible, column.clone());
            self.mark_visible(&mut visible, column.rev());
        }

        visible.into_iter().filter(|&v| v).count()
    }

    fn mark_visible<I>(&self, visible: &mut [bool], line: I)
    where
        I: Iterator<Item = usize>,
    {
        let mut tallest = None;

        for i in line {
            let height = self.heights[i];
            if tallest.map_or(true, |t| height > t) {
                visible[i] = true;
                tallest = Some(height);
            }
        }
    }

    // Trees up to and including the first one at least as tall as the
    // viewpoint.
    fn viewing_distance<I>(&self, from: u8, line: I) -> usize
    where
        I: Iterator<Item = usize>,
    {
        let mut distance = 0;

        for i in line {
            distance += 1;
            if self.heights[i] >= from {
                break;
            }
        }

        distance
    }

    fn scenic_score(&self, i: usize) -> usize {
        let (x, y) = (i % self.width, i / self.width);
        let from = self.heights[i];

        let up = self.viewing_distance(from, (0..y).rev().map(|yp| yp * self.width + x));
        let down = self.viewing_distance(from, (y + 1..self.height()).map(|yp| yp * self.width + x));
        let left = self.viewing_distance(from, (0..x).rev().map(|xp| y * self.width + xp));
        let right = self.viewing_distance(from, (x + 1..self.width).map(|xp| y * self.width + xp));

        up * down * left * right
    }

    fn best_scenic_score(&self) -> usize {
        self.heights
            .par_iter()
            .enumerate()
            .map(|(i, _)| self.scenic_score(i))
            .max()
            .unwrap_or(0)
    }
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let lines = std::io::stdin().lines().collect::<Result<Vec<_>, _>>()?;
    let forest = Forest::parse(lines);

    println!("{}", forest.count_visible());
    println!("{}", forest.best_scenic_score());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Forest {
        let grid = ["30373", "25512", "65332", "33549", "35390"];
        Forest::parse(grid.into_iter().map(String::from))
    }

    #[test]
    fn test_visible_from_outside_the_grid() {
        assert_eq!(forest().count_visible(), 21);
    }

    #[test]
    fn test_scenic_score_looks_all_four_ways() {
        let forest = forest();

        // The height 5 tree in the second row, third column.
        assert_eq!(forest.scenic_score(7), 4);
        // The height 5 tree in the fourth row, third column.
        assert_eq!(forest.scenic_score(17), 8);
    }

    #[test]
    fn test_best_scenic_score() {
        assert_eq!(forest().best_scenic_score(), 8);
    }

    #[test]
    fn test_edge_trees_score_zero() {
        assert_eq!(forest().scenic_score(0), 0);
    }
}
