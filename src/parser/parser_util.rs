//! Field-level parsing shared by every command parser.
//!
//! Each function trims its input, validates it, and returns the matching value
//! object. Failures carry the value type's fixed constraint message and never
//! echo the input back.

use crate::domain::{
    is_non_zero_unsigned_integer, Address, CcaName, Cid, Email, Index, Name, NamedValue, Phone,
    Pid, ReminderName, ReminderStartDate, Tag,
};
use crate::error::{ParseError, ParseResult};
use std::collections::BTreeSet;

/// Parse a one-based index token.
///
/// # Errors
///
/// Returns `ParseError::InvalidIndex` unless the trimmed token is all digits
/// and represents an `i32` of at least 1.
pub fn parse_index(one_based_index: &str) -> ParseResult<Index> {
    let trimmed = one_based_index.trim();
    if !is_non_zero_unsigned_integer(trimmed) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

/// Parse any name-family value.
///
/// The same rule applies whichever type is requested; only the produced type
/// differs.
pub fn parse_named<T: NamedValue>(name: &str) -> ParseResult<T> {
    Ok(T::new(name.trim())?)
}

/// Parse a person's name.
pub fn parse_name(name: &str) -> ParseResult<Name> {
    parse_named(name)
}

/// Parse a CCA name.
pub fn parse_cca_name(name: &str) -> ParseResult<CcaName> {
    parse_named(name)
}

/// Parse a reminder name.
pub fn parse_reminder_name(name: &str) -> ParseResult<ReminderName> {
    parse_named(name)
}

/// Parse a reminder start date in `dd/MM/yyyy` form.
///
/// # Errors
///
/// - `ParseError::InvalidFormat` if the text does not have the date shape
/// - `ParseError::UnparsableDate` if it has the shape but is not a real date
pub fn parse_reminder_start_date(date: &str) -> ParseResult<ReminderStartDate> {
    Ok(ReminderStartDate::parse(date.trim())?)
}

pub fn parse_phone(phone: &str) -> ParseResult<Phone> {
    Ok(Phone::new(phone.trim())?)
}

pub fn parse_address(address: &str) -> ParseResult<Address> {
    Ok(Address::new(address.trim())?)
}

pub fn parse_email(email: &str) -> ParseResult<Email> {
    Ok(Email::new(email.trim())?)
}

pub fn parse_tag(tag: &str) -> ParseResult<Tag> {
    Ok(Tag::new(tag.trim())?)
}

/// Parse every tag, collapsing duplicates.
///
/// Stops at the first invalid tag and returns its error; no partial set is
/// returned.
pub fn parse_tags<I, S>(tags: I) -> ParseResult<BTreeSet<Tag>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter().map(|tag| parse_tag(tag.as_ref())).collect()
}

/// Parse a CCA id.
///
/// # Errors
///
/// Returns `ParseError::NotANumber` unless the trimmed text is a
/// non-negative `i32`.
pub fn parse_cid(cid: &str) -> ParseResult<Cid> {
    Cid::parse(cid.trim()).ok_or(ParseError::NotANumber { field: Cid::FIELD })
}

/// Parse a person id.
///
/// # Errors
///
/// Returns `ParseError::NotANumber` unless the trimmed text is a
/// non-negative `i32`.
pub fn parse_pid(pid: &str) -> ParseResult<Pid> {
    Pid::parse(pid.trim()).ok_or(ParseError::NotANumber { field: Pid::FIELD })
}
