use super::CliFlags;
use crate::pass::charset::CharClass;

#[derive(Debug)]
pub enum ParseError {
    UnknownArg(String),
    UnknownFlag(char),
    InvalidLength(String),
    MissingLength,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::UnknownArg(s) => write!(f, "unknown argument: {}", s),
            ParseError::UnknownFlag(c) => write!(f, "unknown option: -{}", c),
            ParseError::InvalidLength(s) => write!(f, "invalid length: {}", s),
            ParseError::MissingLength => write!(f, "option -c requires a value"),
        }
    }
}

/// Parse argv into `CliFlags`. Short flags cluster getopt-style, so
/// `-ulc 30` and `-c30` both work; `c` consumes the rest of its cluster
/// or the following argument as the length value.
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let cluster = match args[i].strip_prefix('-') {
            Some(c) if !c.is_empty() => c,
            _ => return Err(ParseError::UnknownArg(args[i].clone())),
        };

        let mut chars = cluster.char_indices();
        while let Some((pos, c)) = chars.next() {
            match c {
                // -a matches selecting every class explicitly
                'a' => flags.classes.extend([
                    CharClass::Lower,
                    CharClass::Digit,
                    CharClass::Punctuation,
                    CharClass::Upper,
                ]),
                'u' => flags.classes.push(CharClass::Upper),
                'l' => flags.classes.push(CharClass::Lower),
                'n' => flags.classes.push(CharClass::Digit),
                'p' => flags.classes.push(CharClass::Punctuation),
                'c' => {
                    let rest = &cluster[pos + 1..];
                    let value = if !rest.is_empty() {
                        rest.to_string()
                    } else {
                        i += 1;
                        match args.get(i) {
                            Some(v) => v.clone(),
                            None => return Err(ParseError::MissingLength),
                        }
                    };
                    flags.length = Some(
                        value
                            .parse()
                            .map_err(|_| ParseError::InvalidLength(value))?,
                    );
                    break;
                }
                _ => return Err(ParseError::UnknownFlag(c)),
            }
        }
        i += 1;
    }

    Ok(flags)
}
