// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Occurrence-normalizing XML codec.
//!
//! S3 bodies have no schema-driven notion of a list: an element that may
//! repeat simply appears once, many times, or not at all. This module turns
//! a document into an [`XmlNode`] tree where a name seen once under a parent
//! is a bare value and a name seen two or more times is an ordered
//! [`XmlValue::List`]. The shape is decided by the document instance alone.
//! Typed models read repeatable fields through [`XmlNode::all`], which
//! accepts both shapes.
//!
//! Text is kept as strings; numbers, booleans and dates are interpreted by
//! the typed models, never here. Attributes, comments and processing
//! instructions are dropped.

use crate::s3::error::{Error, Result};
use std::str::FromStr;
use xmltree::{Element, XMLNode};

/// Value held under an element name.
#[derive(Clone, Debug, PartialEq)]
pub enum XmlValue {
    /// Leaf element; empty elements hold an empty string.
    Text(String),
    /// Element with child elements.
    Node(XmlNode),
    /// Two or more same-named siblings, in document order.
    List(Vec<XmlValue>),
}

impl XmlValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            XmlValue::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<&XmlNode> {
        match self {
            XmlValue::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Occurrences held by this value: the list entries, or the value itself.
    pub fn occurrences(&self) -> &[XmlValue] {
        match self {
            XmlValue::List(items) => items,
            v => std::slice::from_ref(v),
        }
    }

    /// Decodes this value into a typed model. An element without children
    /// (`<CORSConfiguration/>`) decodes as an empty node; a leaf holding
    /// text is not element content and is rejected.
    pub fn decode<T: FromXml>(&self) -> Result<T> {
        match self {
            XmlValue::Node(n) => T::from_xml(n),
            XmlValue::Text(t) if t.is_empty() => T::from_xml(&XmlNode::default()),
            XmlValue::Text(_) => Err(Error::Xml("expected element content".into())),
            XmlValue::List(_) => Err(Error::Xml(
                "expected a single element, found a repeated sequence".into(),
            )),
        }
    }
}

impl From<String> for XmlValue {
    fn from(v: String) -> Self {
        XmlValue::Text(v)
    }
}

impl From<&str> for XmlValue {
    fn from(v: &str) -> Self {
        XmlValue::Text(v.to_string())
    }
}

impl From<XmlNode> for XmlValue {
    fn from(v: XmlNode) -> Self {
        XmlValue::Node(v)
    }
}

/// Ordered mapping from element name to value. Names are unique; repeated
/// elements live in a single [`XmlValue::List`] entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct XmlNode {
    entries: Vec<(String, XmlValue)>,
}

impl XmlNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &XmlValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, name: &str) -> Option<&XmlValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<XmlValue> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    /// Records one more occurrence of `name`. The second occurrence promotes
    /// the entry to a list; later ones are appended.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<XmlValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            None => self.entries.push((name, value)),
            Some((_, existing)) => match existing {
                XmlValue::List(items) => items.push(value),
                _ => {
                    let first = std::mem::replace(existing, XmlValue::List(Vec::new()));
                    *existing = XmlValue::List(vec![first, value]);
                }
            },
        }
    }

    /// All occurrences of `name`, whichever shape the document used.
    pub fn all(&self, name: &str) -> &[XmlValue] {
        self.get(name).map_or(&[], XmlValue::occurrences)
    }

    /// Child node named `name`; the first occurrence when repeated.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.all(name).first().and_then(XmlValue::as_node)
    }

    /// Text of the leaf named `name`; the first occurrence when repeated.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.all(name).first().and_then(XmlValue::as_text)
    }

    pub fn string(&self, name: &str) -> Option<String> {
        self.text(name).map(String::from)
    }

    /// Text of a leaf the model cannot do without.
    pub fn required(&self, name: &str) -> Result<String> {
        self.string(name)
            .ok_or_else(|| Error::Xml(format!("<{name}> tag not found")))
    }

    /// Every text occurrence of `name`.
    pub fn texts(&self, name: &str) -> Vec<String> {
        self.all(name)
            .iter()
            .filter_map(XmlValue::as_text)
            .map(String::from)
            .collect()
    }

    /// Parses the leaf named `name`. Missing or blank leaves yield `None`.
    pub fn parse<T: FromStr>(&self, name: &str) -> Result<Option<T>> {
        match self.text(name).map(str::trim) {
            None | Some("") => Ok(None),
            Some(v) => v
                .parse::<T>()
                .map(Some)
                .map_err(|_| Error::Xml(format!("<{name}> holds invalid value '{v}'"))),
        }
    }

    pub fn decode<T: FromXml>(&self, name: &str) -> Result<Option<T>> {
        self.all(name).first().map(XmlValue::decode).transpose()
    }

    pub fn decode_all<T: FromXml>(&self, name: &str) -> Result<Vec<T>> {
        self.all(name).iter().map(XmlValue::decode).collect()
    }

    pub fn with_text(mut self, name: &str, value: impl ToString) -> Self {
        self.push(name, XmlValue::Text(value.to_string()));
        self
    }

    pub fn with_opt_text<T: ToString>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.with_text(name, v),
            None => self,
        }
    }

    pub fn with_node(mut self, name: &str, node: XmlNode) -> Self {
        self.push(name, XmlValue::Node(node));
        self
    }

    pub fn with_opt_node(self, name: &str, node: Option<XmlNode>) -> Self {
        match node {
            Some(n) => self.with_node(name, n),
            None => self,
        }
    }

    /// Adds one occurrence of `name` per item.
    pub fn with_all<I, V>(mut self, name: &str, items: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<XmlValue>,
    {
        for item in items {
            self.push(name, item);
        }
        self
    }
}

/// Typed models decoded from a parsed node.
pub trait FromXml: Sized {
    fn from_xml(node: &XmlNode) -> Result<Self>;
}

/// Typed models encoded as the content of an envelope element.
pub trait ToXml {
    fn to_xml(&self) -> XmlNode;
}

/// Parses `text` into a tree holding the root element under its own name.
pub fn parse(text: &str) -> Result<XmlNode> {
    let root = Element::parse(text.as_bytes()).map_err(|source| Error::XmlParse {
        source,
        text: text.to_string(),
    })?;

    let mut doc = XmlNode::new();
    doc.push(root.name.clone(), element_value(&root));
    Ok(doc)
}

fn element_value(element: &Element) -> XmlValue {
    let mut node = XmlNode::new();
    let mut text = String::new();
    for child in &element.children {
        match child {
            XMLNode::Element(e) => node.push(e.name.clone(), element_value(e)),
            XMLNode::Text(t) | XMLNode::CData(t) => text.push_str(t),
            _ => {}
        }
    }

    // Whitespace-only runs never reach here; other text is kept verbatim.
    if node.is_empty() {
        XmlValue::Text(text)
    } else {
        XmlValue::Node(node)
    }
}

/// Serializes `node` as the content of an `envelope` element. List entries
/// become repeated siblings named after their field.
pub fn serialize(envelope: &str, node: &XmlNode) -> String {
    let mut out = String::new();
    write_node(&mut out, envelope, node);
    out
}

fn write_node(out: &mut String, name: &str, node: &XmlNode) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    for (k, v) in node.iter() {
        write_value(out, k, v);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

fn write_value(out: &mut String, name: &str, value: &XmlValue) {
    match value {
        XmlValue::Text(t) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
            out.push_str(&escape(t));
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        XmlValue::Node(n) => write_node(out, name, n),
        XmlValue::List(items) => {
            for item in items {
                write_value(out, name, item);
            }
        }
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    fn root<'a>(doc: &'a XmlNode, name: &str) -> &'a XmlNode {
        doc.child(name).expect("root element")
    }

    #[test]
    fn test_single_occurrence_is_scalar() {
        let doc = parse("<ListBucketResult><Contents><Key>a</Key></Contents></ListBucketResult>")
            .unwrap();
        let result = root(&doc, "ListBucketResult");
        let contents = result.get("Contents").unwrap();
        assert!(matches!(contents, XmlValue::Node(_)));
        assert_eq!(contents.as_node().unwrap().text("Key"), Some("a"));
    }

    #[test]
    fn test_repeated_occurrence_is_ordered_list() {
        let doc = parse(
            "<ListBucketResult>\
             <Contents><Key>a</Key></Contents>\
             <Contents><Key>b</Key></Contents>\
             </ListBucketResult>",
        )
        .unwrap();
        let result = root(&doc, "ListBucketResult");
        match result.get("Contents").unwrap() {
            XmlValue::List(items) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].as_node().unwrap().text("Key"), Some("a"));
                assert_eq!(items[1].as_node().unwrap().text("Key"), Some("b"));
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_all_accepts_both_shapes() {
        let one = parse("<R><Tag>x</Tag></R>").unwrap();
        let many = parse("<R><Tag>x</Tag><Tag>y</Tag><Tag>z</Tag></R>").unwrap();
        assert_eq!(root(&one, "R").texts("Tag"), vec!["x"]);
        assert_eq!(root(&many, "R").texts("Tag"), vec!["x", "y", "z"]);
        assert!(root(&one, "R").all("Missing").is_empty());
    }

    #[test]
    fn test_non_adjacent_repeats_still_collapse() {
        let doc = parse("<R><A>1</A><B>2</B><A>3</A></R>").unwrap();
        let r = root(&doc, "R");
        assert_eq!(r.texts("A"), vec!["1", "3"]);
        assert_eq!(r.text("B"), Some("2"));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn test_text_is_not_coerced() {
        let doc = parse("<R><Size>0042</Size><IsTruncated>true</IsTruncated></R>").unwrap();
        let r = root(&doc, "R");
        assert_eq!(r.text("Size"), Some("0042"));
        assert_eq!(r.text("IsTruncated"), Some("true"));
        assert_eq!(r.parse::<u64>("Size").unwrap(), Some(42));
        assert_eq!(r.parse::<bool>("IsTruncated").unwrap(), Some(true));
    }

    #[test]
    fn test_declaration_attributes_and_instructions_ignored() {
        let doc = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<LocationConstraint xmlns="http://s3.amazonaws.com/doc/2006-03-01/"><?hint keep?>eu-west-1</LocationConstraint>"#,
        )
        .unwrap();
        assert_eq!(doc.text("LocationConstraint"), Some("eu-west-1"));
    }

    #[test]
    fn test_empty_element_is_empty_text() {
        let doc = parse("<R><Prefix/><Delimiter></Delimiter></R>").unwrap();
        let r = root(&doc, "R");
        assert_eq!(r.text("Prefix"), Some(""));
        assert_eq!(r.text("Delimiter"), Some(""));
        assert_eq!(r.parse::<u32>("Prefix").unwrap(), None);
    }

    #[test]
    fn test_leaf_text_keeps_surrounding_spaces() {
        let doc = parse(
            "<ListBucketResult>\n  <Contents>\n    <Key> padded key </Key>\n  </Contents>\n</ListBucketResult>",
        )
        .unwrap();
        let contents = root(&doc, "ListBucketResult").child("Contents").unwrap();
        assert_eq!(contents.text("Key"), Some(" padded key "));
        assert_eq!(contents.len(), 1);
    }

    #[test]
    fn test_numbers_tolerate_padding() {
        let doc = parse("<R><MaxKeys> 1000 </MaxKeys></R>").unwrap();
        assert_eq!(root(&doc, "R").parse::<u32>("MaxKeys").unwrap(), Some(1000));
    }

    #[test]
    fn test_text_where_element_expected_is_an_error() {
        #[derive(Debug)]
        struct Empty;
        impl FromXml for Empty {
            fn from_xml(_: &XmlNode) -> Result<Self> {
                Ok(Empty)
            }
        }

        let doc = parse("<R><Contents>junk</Contents><Owner/></R>").unwrap();
        let r = root(&doc, "R");
        let err = r.decode::<Empty>("Contents").unwrap_err();
        assert!(err.to_string().contains("expected element content"));
        assert!(r.decode::<Empty>("Owner").unwrap().is_some());
    }

    #[test]
    fn test_malformed_xml_keeps_text() {
        let text = "<ListBucketResult><Contents></ListBucketResult>";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, Error::XmlParse { .. }));
        assert_eq!(err.xml_text(), Some(text));
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let doc = parse("<R><MaxKeys>lots</MaxKeys></R>").unwrap();
        let err = root(&doc, "R").parse::<u32>("MaxKeys").unwrap_err();
        assert!(err.to_string().contains("MaxKeys"));
    }

    #[test]
    fn test_serialize_repeats_field_name() {
        let node = XmlNode::new()
            .with_all("AllowedMethod", ["GET", "PUT"])
            .with_text("MaxAgeSeconds", 3000);
        let rule = XmlNode::new().with_node("CORSRule", node);
        assert_eq!(
            serialize("CORSConfiguration", &rule),
            "<CORSConfiguration><CORSRule>\
             <AllowedMethod>GET</AllowedMethod><AllowedMethod>PUT</AllowedMethod>\
             <MaxAgeSeconds>3000</MaxAgeSeconds>\
             </CORSRule></CORSConfiguration>"
        );
    }

    #[test]
    fn test_serialize_escapes_text() {
        let node = XmlNode::new().with_text("Key", "a&b<c>\"d'");
        assert_eq!(
            serialize("Object", &node),
            "<Object><Key>a&amp;b&lt;c&gt;&quot;d&apos;</Key></Object>"
        );
        let doc = parse(&serialize("Object", &node)).unwrap();
        assert_eq!(root(&doc, "Object").text("Key"), Some("a&b<c>\"d'"));
    }

    #[test]
    fn test_empty_list_emits_nothing() {
        let node = XmlNode::new()
            .with_all("Object", Vec::<XmlValue>::new())
            .with_text("Quiet", true);
        assert_eq!(serialize("Delete", &node), "<Delete><Quiet>true</Quiet></Delete>");
    }

    /// Drops the characters XML 1.0 cannot carry in element text.
    fn clean(values: Vec<String>) -> Vec<String> {
        values
            .into_iter()
            .map(|s| {
                s.chars()
                    .filter(|c| !c.is_control() && !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
                    .collect()
            })
            .collect()
    }

    /// Text the parser yields for `v`: space-only content is not character data.
    fn as_parsed(values: &[String]) -> Vec<String> {
        values
            .iter()
            .map(|v| if v.chars().all(|c| c == ' ') { String::new() } else { v.clone() })
            .collect()
    }

    quickcheck! {
        fn prop_shape_follows_cardinality(values: Vec<String>) -> TestResult {
            let values = clean(values);
            if values.is_empty() {
                return TestResult::discard();
            }
            let mut text = String::from("<R>");
            for v in &values {
                text.push_str(&format!("<Item>{}</Item>", escape(v)));
            }
            text.push_str("</R>");

            let expected = as_parsed(&values);
            let doc = parse(&text).unwrap();
            let r = root(&doc, "R");
            let shape_ok = match r.get("Item").unwrap() {
                XmlValue::Text(t) => values.len() == 1 && *t == expected[0],
                XmlValue::List(items) => items.len() == values.len() && values.len() >= 2,
                XmlValue::Node(_) => false,
            };
            TestResult::from_bool(shape_ok && r.texts("Item") == expected)
        }

        fn prop_repeated_fields_round_trip(values: Vec<String>) -> bool {
            let values = clean(values);
            let node = XmlNode::new()
                .with_text("Quiet", "false")
                .with_all("Item", values.iter().map(String::as_str));
            let doc = parse(&serialize("R", &node)).unwrap();
            let r = root(&doc, "R");
            r.texts("Item") == as_parsed(&values) && r.text("Quiet") == Some("false")
        }
    }
}
