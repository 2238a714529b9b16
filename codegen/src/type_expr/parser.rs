//! Parser for textual type expressions with nested generic arguments
//!
//! This module uses nom to parse type expressions like:
//! - `Int`
//! - `Int?`
//! - `Map<Int, String>`
//! - `List<Map<Int,String?>>?`
//!
//! Identifiers are runs of word characters. Whitespace is only accepted around the
//! commas separating type arguments. Every `Type` production, including each type
//! argument, may carry its own trailing `?`.

use nom::IResult;
use nom::Parser;
use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::character::complete::multispace0;
use nom::combinator::all_consuming;
use nom::combinator::cut;
use nom::combinator::opt;
use nom::multi::separated_list1;
use nom::sequence::delimited;
use nom::sequence::preceded;
use nom::sequence::terminated;

use super::TypeExpr;
use crate::error::Error;
use crate::error::Result;

/// Word characters, the ASCII set `\w` matches
const fn is_word_char(c: char) -> bool { c.is_ascii_alphanumeric() || c == '_' }

/// Parse an identifier
fn identifier(input: &str) -> IResult<&str, &str> { take_while1(is_word_char).parse(input) }

/// Parse the comma between type arguments, with optional surrounding whitespace
fn comma(input: &str) -> IResult<&str, char> {
    delimited(multispace0, char(','), multispace0).parse(input)
}

/// Parse `<Type (, Type)*>`; once `<` is seen the list must be well formed
fn type_args(input: &str) -> IResult<&str, Vec<TypeExpr>> {
    preceded(
        char('<'),
        cut(terminated(separated_list1(comma, type_expr), char('>'))),
    )
    .parse(input)
}

/// Parse `Identifier ('<' TypeList '>')? '?'?`
fn type_expr(input: &str) -> IResult<&str, TypeExpr> {
    let (input, (name, args, nullable)) =
        (identifier, opt(type_args), opt(char('?'))).parse(input)?;

    Ok((
        input,
        TypeExpr {
            name:      name.to_string(),
            type_args: args.unwrap_or_default(),
            nullable:  nullable.is_some(),
        },
    ))
}

/// Parse a complete type expression; any trailing input is a failure
pub fn parse_type_expr(text: &str) -> Result<TypeExpr> {
    match all_consuming(type_expr).parse(text) {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => {
            let offset = text.len() - e.input.len();
            Err(error_stack::Report::new(Error::malformed(text, offset))
                .attach(format!("Parser stopped at: {:?}", e.code)))
        }
        Err(nom::Err::Incomplete(_)) => Err(error_stack::Report::new(Error::malformed(
            text,
            text.len(),
        ))
        .attach("Unexpected end of input")),
    }
}
