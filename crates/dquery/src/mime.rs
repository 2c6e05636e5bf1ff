// ABOUTME: MIME type hint for document loading.
// ABOUTME: Provides the MimeType enum with Display and FromStr conversions.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// The parse mode a document string is loaded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MimeType {
    #[default]
    Html,
    Xml,
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MimeType::Html => "text/html",
            MimeType::Xml => "text/xml",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MimeType {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text/html" | "html" => Ok(MimeType::Html),
            "text/xml" | "application/xml" | "xml" => Ok(MimeType::Xml),
            other => Err(QueryError::Mime(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("text/html".parse::<MimeType>().unwrap(), MimeType::Html);
        assert_eq!("HTML".parse::<MimeType>().unwrap(), MimeType::Html);
        assert_eq!("text/xml".parse::<MimeType>().unwrap(), MimeType::Xml);
        assert_eq!(
            "application/xml".parse::<MimeType>().unwrap(),
            MimeType::Xml
        );
        assert_eq!("xml".parse::<MimeType>().unwrap(), MimeType::Xml);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let err = "application/pdf".parse::<MimeType>().unwrap_err();
        assert!(matches!(err, QueryError::Mime(_)));
    }

    #[test]
    fn test_display_round_trips() {
        for mime in [MimeType::Html, MimeType::Xml] {
            assert_eq!(mime.to_string().parse::<MimeType>().unwrap(), mime);
        }
    }

    #[test]
    fn test_default_is_html() {
        assert_eq!(MimeType::default(), MimeType::Html);
    }
}
