use std::io::Read;
use std::str::FromStr;

use nom::character::complete::{char, digit1};
use nom::combinator::{map_res, opt, recognize};
use nom::sequence::pair;
use nom::{Finish, IResult, Parser};

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    // Accepts a leading '-'; `from_str` rejects it for the unsigned types.
    map_res(recognize(pair(opt(char('-')), digit1)), N::from_str).parse(input)
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// A borrowed nom error ties the Result to the input buffer's lifetime, which
// makes the `?` operator miserable in callers. Reparent the error onto an
// owned copy of the input instead.
pub fn nom_parse_to_owned<I, O, P>(
    mut parser: P,
    input: &I,
) -> Result<O, nom::error::Error<I::Owned>>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
    P: for<'i> Parser<&'i I, O, nom::error::Error<&'i I>>,
{
    match parser.parse(input).finish() {
        Ok((_i, o)) => Ok(o),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}

pub fn read_from_stdin_and_parse<O, P>(parser: P) -> Result<O, Box<dyn std::error::Error>>
where
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;

    Ok(nom_parse_to_owned(parser, buffer.as_str())?)
}
