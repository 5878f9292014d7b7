//! A small CSS selector subset.
//!
//! Supports exactly what the page behaviors query with: tag, `#id`,
//! `.class`, attribute presence/equality/prefix (`[href^="#"]`), compound
//! selectors, the descendant combinator, and comma-separated groups.
//! No child/sibling combinators, no pseudo-classes.


use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

use crate::document::{Document, NodeId};

/// Errors from parsing a selector string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectorError {
	/// The selector (or one comma group) was empty.
	#[error("empty selector")]
	Empty,
	/// A character that cannot start a simple selector.
	#[error("unexpected character `{0}` in selector")]
	UnexpectedChar(char),
	/// An attribute selector was not closed with `]`.
	#[error("unterminated attribute selector")]
	UnterminatedAttribute,
	/// An attribute selector had no attribute name.
	#[error("attribute selector is missing a name")]
	EmptyAttributeName,
}

/// A parsed selector, reusable across queries.
#[derive(Debug, Clone)]
pub struct Selector {
	alternatives: Vec<Complex>,
}

/// One comma group: compounds joined by descendant combinators.
#[derive(Debug, Clone)]
struct Complex {
	compounds: Vec<Compound>,
}

#[derive(Debug, Clone, Default)]
struct Compound {
	tag: Option<String>,
	parts: Vec<Part>,
}

#[derive(Debug, Clone)]
enum Part {
	Id(String),
	Class(String),
	Attr { name: String, op: AttrOp },
}

#[derive(Debug, Clone)]
enum AttrOp {
	Present,
	Equals(String),
	Prefix(String),
}

impl Selector {
	/// Parses a selector string.
	pub fn parse(input: &str) -> Result<Self, SelectorError> {
		let mut alternatives = Vec::new();
		for group in input.split(',') {
			let group = group.trim();
			if group.is_empty() {
				return Err(SelectorError::Empty);
			}
			let compounds = group
				.split_whitespace()
				.map(parse_compound)
				.collect::<Result<Vec<_>, _>>()?;
			alternatives.push(Complex { compounds });
		}
		Ok(Self { alternatives })
	}

	/// Whether `node` matches any of the selector's comma groups.
	pub fn matches(&self, doc: &Document, node: NodeId) -> bool {
		self.alternatives
			.iter()
			.any(|complex| complex_matches(doc, node, complex))
	}
}

fn complex_matches(doc: &Document, node: NodeId, complex: &Complex) -> bool {
	let Some((last, ancestors)) = complex.compounds.split_last() else {
		return false;
	};
	if !compound_matches(doc, node, last) {
		return false;
	}
	// Each remaining compound, right to left, must match some strictly
	// higher ancestor.
	let mut current = node;
	for compound in ancestors.iter().rev() {
		loop {
			match doc.parent(current) {
				Some(parent) => {
					current = parent;
					if compound_matches(doc, parent, compound) {
						break;
					}
				}
				None => return false,
			}
		}
	}
	true
}

fn compound_matches(doc: &Document, node: NodeId, compound: &Compound) -> bool {
	if let Some(tag) = &compound.tag
		&& doc.tag(node) != tag
	{
		return false;
	}
	compound.parts.iter().all(|part| match part {
		Part::Id(id) => doc.element_id(node) == Some(id.as_str()),
		Part::Class(class) => doc.has_class(node, class),
		Part::Attr { name, op } => match (doc.attr(node, name), op) {
			(Some(_), AttrOp::Present) => true,
			(Some(value), AttrOp::Equals(want)) => value == want,
			(Some(value), AttrOp::Prefix(prefix)) => value.starts_with(prefix.as_str()),
			(None, _) => false,
		},
	})
}

fn parse_compound(token: &str) -> Result<Compound, SelectorError> {
	let mut chars = token.chars().peekable();
	let mut compound = Compound::default();

	let tag = take_ident(&mut chars);
	if !tag.is_empty() {
		compound.tag = Some(tag);
	}

	while let Some(&ch) = chars.peek() {
		match ch {
			'#' => {
				chars.next();
				let id = take_ident(&mut chars);
				if id.is_empty() {
					return Err(SelectorError::UnexpectedChar('#'));
				}
				compound.parts.push(Part::Id(id));
			}
			'.' => {
				chars.next();
				let class = take_ident(&mut chars);
				if class.is_empty() {
					return Err(SelectorError::UnexpectedChar('.'));
				}
				compound.parts.push(Part::Class(class));
			}
			'[' => {
				chars.next();
				compound.parts.push(parse_attr(&mut chars)?);
			}
			other => return Err(SelectorError::UnexpectedChar(other)),
		}
	}

	if compound.tag.is_none() && compound.parts.is_empty() {
		return Err(SelectorError::Empty);
	}
	Ok(compound)
}

fn take_ident(chars: &mut Peekable<Chars<'_>>) -> String {
	let mut ident = String::new();
	while let Some(&ch) = chars.peek() {
		if ch.is_alphanumeric() || ch == '-' || ch == '_' {
			ident.push(ch);
			chars.next();
		} else {
			break;
		}
	}
	ident
}

fn parse_attr(chars: &mut Peekable<Chars<'_>>) -> Result<Part, SelectorError> {
	let name = take_ident(chars);
	if name.is_empty() {
		return Err(SelectorError::EmptyAttributeName);
	}
	let op = match chars.next() {
		Some(']') => AttrOp::Present,
		Some('^') => {
			if chars.next() != Some('=') {
				return Err(SelectorError::UnexpectedChar('^'));
			}
			AttrOp::Prefix(take_attr_value(chars)?)
		}
		Some('=') => AttrOp::Equals(take_attr_value(chars)?),
		Some(other) => return Err(SelectorError::UnexpectedChar(other)),
		None => return Err(SelectorError::UnterminatedAttribute),
	};
	Ok(Part::Attr { name, op })
}

/// Reads an attribute value (optionally single- or double-quoted) up to and
/// including the closing `]`.
fn take_attr_value(chars: &mut Peekable<Chars<'_>>) -> Result<String, SelectorError> {
	let quote = match chars.peek() {
		Some(&q @ ('"' | '\'')) => {
			chars.next();
			Some(q)
		}
		_ => None,
	};
	let mut value = String::new();
	loop {
		match chars.next() {
			None => return Err(SelectorError::UnterminatedAttribute),
			Some(ch) if Some(ch) == quote => {
				return match chars.next() {
					Some(']') => Ok(value),
					_ => Err(SelectorError::UnterminatedAttribute),
				};
			}
			Some(']') if quote.is_none() => return Ok(value),
			Some(ch) => value.push(ch),
		}
	}
}
