use std::collections::BTreeMap;
use std::io::Read;

use id_arena::{Arena, Id};

const TOTAL_SPACE: usize = 70_000_000;
const SPACE_NEEDED: usize = 30_000_000;

// Zero-copy where it counts. The 'p lifetime stands for parsed - directory
// names are slices of the input buffer in `main`, not owned copies.

#[derive(Debug, Eq, PartialEq)]
enum CdTarget<'p> {
    Root,
    Parent,
    Child(&'p str),
}

#[derive(Debug, Eq, PartialEq)]
enum Line<'p> {
    Cd(CdTarget<'p>),
    Ls,
    Dir(&'p str),
    File { size: usize },
}

#[derive(Default)]
struct Directory<'p> {
    parent: Option<Id<Directory<'p>>>,
    subdirs: BTreeMap<&'p str, Id<Directory<'p>>>,
    // Combined size of the plain files listed directly in this directory.
    file_sizes: usize,
}

struct Filesystem<'p> {
    arena: Arena<Directory<'p>>,
    root: Id<Directory<'p>>,
    cwd: Id<Directory<'p>>,
}

impl<'p> Filesystem<'p> {
    fn new() -> Filesystem<'p> {
        let mut arena = Arena::new();
        let root = arena.alloc(Directory::default());

        Filesystem {
            arena,
            root,
            cwd: root,
        }
    }

    fn replay(&mut self, line: Line<'p>) {
        match line {
            Line::Cd(CdTarget::Root) => self.cwd = self.root,
            Line::Cd(CdTarget::Parent) => {
                self.cwd = self.arena[self.cwd].parent.expect("cd .. above the root")
            }
            Line::Cd(CdTarget::Child(name)) => self.cwd = self.subdir(name),
            Line::Ls => {}
            Line::Dir(name) => {
                self.subdir(name);
            }
            Line::File { size } => self.arena[self.cwd].file_sizes += size,
        }
    }

    // Find or create: `cd` must work even into a directory no listing has
    // mentioned yet.
    fn subdir(&mut self, name: &'p str) -> Id<Directory<'p>> {
        if let Some(&id) = self.arena[self.cwd].subdirs.get(name) {
            return id;
        }

        let id = self.arena.alloc(Directory {
            parent: Some(self.cwd),
            ..Directory::default()
        });
        self.arena[self.cwd].subdirs.insert(name, id);
        id
    }

    // Returns the space used overall plus the total size of every directory,
    // in post-order.
    fn directory_sizes(&self) -> (usize, Vec<usize>) {
        let mut sizes = Vec::with_capacity(self.arena.len());
        let used = self.total_size(self.root, &mut sizes);
        (used, sizes)
    }

    fn total_size(&self, id: Id<Directory<'p>>, sizes: &mut Vec<usize>) -> usize {
        let dir = &self.arena[id];
        let size = dir.file_sizes
            + dir
                .subdirs
                .values()
                .map(|&child| self.total_size(child, sizes))
                .sum::<usize>();

        sizes.push(size);
        size
    }
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    let (_remaining, lines) =
        parser::session_parser(&buffer).map_err(|e| e.map_input(str::to_owned))?;

    let mut fs = Filesystem::new();
    for line in lines {
        fs.replay(line);
    }

    let (used, sizes) = fs.directory_sizes();

    let small: usize = sizes.iter().filter(|&&size| size <= 100_000).sum();
    println!("{}", small);

    let shortfall = SPACE_NEEDED.saturating_sub(TOTAL_SPACE - used);
    let freed = sizes
        .iter()
        .filter(|&&size| size >= shortfall)
        .min()
        .expect("expected a directory big enough to free");
    println!("{}", freed);

    Ok(())
}

mod parser {
    use super::*;

    use aoc2022::parser::base10_numeric;

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::{line_ending, not_line_ending, space1};
    use nom::combinator::eof;
    use nom::multi::{many0, separated_list1};
    use nom::sequence::{preceded, separated_pair, terminated, tuple};
    use nom::{IResult, Parser};

    fn entry_name(input: &str) -> IResult<&str, &str> {
        not_line_ending.map(str::trim_end).parse(input)
    }

    fn cd_line(input: &str) -> IResult<&str, Line> {
        preceded(tuple((tag("$"), space1, tag("cd"), space1)), entry_name)
            .map(|target| match target {
                "/" => Line::Cd(CdTarget::Root),
                ".." => Line::Cd(CdTarget::Parent),
                child => Line::Cd(CdTarget::Child(child)),
            })
            .parse(input)
    }

    fn ls_line(input: &str) -> IResult<&str, Line> {
        tuple((tag("$"), space1, tag("ls")))
            .map(|_| Line::Ls)
            .parse(input)
    }

    fn dir_line(input: &str) -> IResult<&str, Line> {
        preceded(tuple((tag("dir"), space1)), entry_name)
            .map(Line::Dir)
            .parse(input)
    }

    fn file_line(input: &str) -> IResult<&str, Line> {
        separated_pair(base10_numeric, space1, entry_name)
            .map(|(size, _name)| Line::File { size })
            .parse(input)
    }

    fn line(input: &str) -> IResult<&str, Line> {
        alt((cd_line, ls_line, dir_line, file_line)).parse(input)
    }

    pub(super) fn session_parser(input: &str) -> IResult<&str, Vec<Line>> {
        terminated(
            separated_list1(line_ending, line),
            tuple((many0(line_ending), eof)),
        )
        .parse(input)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parser() {
            let r = session_parser(
                "$ cd /\n\
                 $ ls\n\
                 dir a\n\
                 1234 b\n\
                 $ cd a\n\
                 $ ls\n\
                 4321 c\n\
                 $ cd ..\n",
            );
            let (tail, parsed) = r.unwrap();
            assert_eq!("", tail);
            assert_eq!(
                vec![
                    Line::Cd(CdTarget::Root),
                    Line::Ls,
                    Line::Dir("a"),
                    Line::File { size: 1234 },
                    Line::Cd(CdTarget::Child("a")),
                    Line::Ls,
                    Line::File { size: 4321 },
                    Line::Cd(CdTarget::Parent),
                ],
                parsed
            );
        }
    }
}
