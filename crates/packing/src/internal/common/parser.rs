use std::fmt::{Debug, Display, Formatter};

use nom::branch::alt;
use nom::bytes::complete::tag_no_case;
use nom::character::complete::{char, digit1, multispace0, satisfy};
use nom::combinator::{all_consuming, map, map_res, opt, value};
use nom::error::{ErrorKind, FromExternalError, ParseError};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, preceded, tuple};
use nom::{AsChar, IResult};

use crate::internal::common::error::PackingError;
use crate::internal::common::resources::{ByteAmount, ResourceVector};

pub enum ParserError<I> {
    Custom(anyhow::Error),
    Nom(I, ErrorKind),
}

impl<I: Debug> Debug for ParserError<I> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Custom(error) => f.write_fmt(format_args!("Semantic error at {}", error)),
            Self::Nom(input, error) => f.write_fmt(format_args!(
                "Parser error at '{:?}': expecting {:?}",
                input, error
            )),
        }
    }
}

impl<I> ParseError<I> for ParserError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        ParserError::Nom(input, kind)
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I: Display, E: Into<anyhow::Error>> FromExternalError<I, E> for ParserError<I> {
    fn from_external_error(input: I, _: ErrorKind, error: E) -> Self {
        ParserError::Custom(anyhow::anyhow!("'{}': {}", input, error.into()))
    }
}

pub(crate) fn format_parse_error<I: Debug>(error: nom::Err<ParserError<I>>) -> anyhow::Error {
    match error {
        nom::Err::Error(e) | nom::Err::Failure(e) => anyhow::anyhow!("{:?}", e),
        _ => anyhow::anyhow!(error.to_string()),
    }
}

pub type NomResult<'a, Ret> = IResult<&'a str, Ret, ParserError<&'a str>>;

/// Runs the parser over the whole input, any trailing characters are an error.
pub(crate) fn consume_all<'a, O>(
    parser: impl FnMut(&'a str) -> NomResult<'a, O>,
    input: &'a str,
) -> crate::Result<O> {
    all_consuming(parser)(input)
        .map(|(_, output)| output)
        .map_err(|e| PackingError::ParseError(format_parse_error(e).to_string()))
}

fn p_integer_string(input: &str) -> NomResult<String> {
    let parser = tuple((
        satisfy(|c| c.is_dec_digit()),
        many0(satisfy(|c| c.is_dec_digit() || c == '_')),
    ));
    map(parser, |(first, rest)| {
        let mut number = first.to_string();
        number.extend(rest.into_iter().filter(|c| c.is_dec_digit()));
        number
    })(input)
}

pub fn p_u32(input: &str) -> NomResult<u32> {
    map_res(p_integer_string, |number| number.parse::<u32>())(input)
}

pub fn p_u64(input: &str) -> NomResult<u64> {
    map_res(p_integer_string, |number| number.parse::<u64>())(input)
}

pub fn p_f64(input: &str) -> NomResult<f64> {
    map_res(
        tuple((p_integer_string, opt(preceded(char('.'), digit1)))),
        |(integer, fraction): (String, Option<&str>)| match fraction {
            Some(fraction) => format!("{integer}.{fraction}").parse::<f64>(),
            None => integer.parse::<f64>(),
        },
    )(input)
}

/// Multiplier of a size unit. Units are binary, `1 KB == 1 KiB == 1024 B`.
fn p_byte_unit(input: &str) -> NomResult<u64> {
    alt((
        value(1024, alt((tag_no_case("KiB"), tag_no_case("KB"), tag_no_case("K")))),
        value(
            1024 * 1024,
            alt((tag_no_case("MiB"), tag_no_case("MB"), tag_no_case("M"))),
        ),
        value(
            1024 * 1024 * 1024,
            alt((tag_no_case("GiB"), tag_no_case("GB"), tag_no_case("G"))),
        ),
        value(1, tag_no_case("B")),
    ))(input)
}

pub fn p_byte_amount(input: &str) -> NomResult<ByteAmount> {
    map_res(
        tuple((p_u64, multispace0, opt(p_byte_unit))),
        |(count, _, unit)| {
            count
                .checked_mul(unit.unwrap_or(1))
                .map(ByteAmount::from_bytes)
                .ok_or_else(|| anyhow::anyhow!("Byte amount does not fit into 64 bits"))
        },
    )(input)
}

#[derive(Clone, Copy)]
enum VectorEntry {
    Cpu(f64),
    Ram(ByteAmount),
    Disk(ByteAmount),
    Gpu(u32),
}

impl VectorEntry {
    fn key(&self) -> &'static str {
        match self {
            VectorEntry::Cpu(_) => "cpu",
            VectorEntry::Ram(_) => "ram",
            VectorEntry::Disk(_) => "disk",
            VectorEntry::Gpu(_) => "gpu",
        }
    }
}

fn p_assign(input: &str) -> NomResult<char> {
    delimited(multispace0, char('='), multispace0)(input)
}

fn p_vector_entry(input: &str) -> NomResult<VectorEntry> {
    alt((
        map(preceded(tuple((tag_no_case("cpu"), p_assign)), p_f64), VectorEntry::Cpu),
        map(
            preceded(tuple((tag_no_case("ram"), p_assign)), p_byte_amount),
            VectorEntry::Ram,
        ),
        map(
            preceded(tuple((tag_no_case("disk"), p_assign)), p_byte_amount),
            VectorEntry::Disk,
        ),
        map(preceded(tuple((tag_no_case("gpu"), p_assign)), p_u32), VectorEntry::Gpu),
    ))(input)
}

pub fn p_resource_vector(input: &str) -> NomResult<ResourceVector> {
    map_res(
        delimited(
            multispace0,
            separated_list1(delimited(multispace0, char(','), multispace0), p_vector_entry),
            multispace0,
        ),
        |entries| {
            let mut seen: Vec<&'static str> = Vec::with_capacity(entries.len());
            let mut result = ResourceVector::EMPTY;
            for entry in entries {
                if seen.contains(&entry.key()) {
                    return Err(anyhow::anyhow!("Resource '{}' defined twice", entry.key()));
                }
                seen.push(entry.key());
                result = match entry {
                    VectorEntry::Cpu(cpu) => result.with_cpu(cpu),
                    VectorEntry::Ram(ram) => result.with_ram(ram),
                    VectorEntry::Disk(disk) => result.with_disk(disk),
                    VectorEntry::Gpu(gpu) => result.with_gpu(gpu),
                };
            }
            Ok(result)
        },
    )(input)
}

pub fn parse_byte_amount(input: &str) -> crate::Result<ByteAmount> {
    consume_all(delimited(multispace0, p_byte_amount, multispace0), input)
}

pub fn parse_resource_vector(input: &str) -> crate::Result<ResourceVector> {
    consume_all(p_resource_vector, input)
}
