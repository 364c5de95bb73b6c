use passmatic::ClassSet;
use passmatic::presets;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    InvalidNumber(String),
    UnknownArg(String),
    MissingValue(String),
    UnknownPreset(String),
    InvalidClasses(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidNumber(s) => write!(f, "Invalid number: {}", s),
            ParseError::UnknownArg(s) => write!(f, "Unknown argument: {}", s),
            ParseError::MissingValue(s) => write!(f, "Missing value for {}", s),
            ParseError::UnknownPreset(s) => write!(
                f,
                "Unknown preset: {} (available: {})",
                s,
                presets::PRESETS
                    .iter()
                    .map(|p| p.name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            ParseError::InvalidClasses(s) => {
                write!(f, "Invalid classes: {} (use letters u, l, d, s)", s)
            }
        }
    }
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-d" | "--default" => flags.default = true,
            "-D" | "--details" => flags.details = true,
            "-b" | "--board" => flags.clipboard = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-i" | "--interactive" => flags.interactive = true,
            "--presets" => flags.list_presets = true,
            "--show-settings" => flags.show_settings = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "-l" | "--length" => flags.length = Some(number(value(args, &mut i)?)?),
            "-n" | "--number" => flags.number = Some(number(value(args, &mut i)?)?),
            "--seed" => flags.seed = Some(number(value(args, &mut i)?)?),
            "-a" | "--anchor" => flags.anchor = Some(value(args, &mut i)?.to_string()),
            "-c" | "--classes" => {
                let codes = value(args, &mut i)?;
                flags.classes = Some(
                    ClassSet::from_codes(codes)
                        .ok_or_else(|| ParseError::InvalidClasses(codes.to_string()))?,
                );
            }
            "-p" | "--preset" => {
                let name = value(args, &mut i)?;
                flags.preset = Some(
                    presets::find(name).ok_or_else(|| ParseError::UnknownPreset(name.to_string()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

/// Take the value following the flag at `args[*i]`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.trim()
        .replace('_', "")
        .parse()
        .map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use passmatic::CharClass;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passmatic")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_args_is_all_defaults() {
        let flags = parse(&args(&[])).unwrap();
        assert!(!flags.help && !flags.quiet && !flags.interactive);
        assert!(flags.length.is_none() && flags.preset.is_none());
    }

    #[test]
    fn values_are_parsed() {
        let flags = parse(&args(&[
            "-l", "20", "-n", "5", "-a", "horse", "--seed", "1_000", "-c", "ud",
        ]))
        .unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(5));
        assert_eq!(flags.anchor.as_deref(), Some("horse"));
        assert_eq!(flags.seed, Some(1000));
        let classes = flags.classes.unwrap();
        assert!(classes.contains(CharClass::Uppercase));
        assert!(classes.contains(CharClass::Digit));
        assert!(!classes.contains(CharClass::Symbol));
    }

    #[test]
    fn preset_is_resolved_while_parsing() {
        let flags = parse(&args(&["--preset", "amazon"])).unwrap();
        assert_eq!(flags.preset.map(|p| p.name), Some("Amazon"));
        assert_eq!(
            parse(&args(&["-p", "myspace"])).unwrap_err(),
            ParseError::UnknownPreset("myspace".into())
        );
    }

    #[test]
    fn errors_name_the_offender() {
        assert_eq!(
            parse(&args(&["-l", "twelve"])).unwrap_err(),
            ParseError::InvalidNumber("twelve".into())
        );
        assert_eq!(
            parse(&args(&["--length"])).unwrap_err(),
            ParseError::MissingValue("--length".into())
        );
        assert_eq!(
            parse(&args(&["--bogus"])).unwrap_err(),
            ParseError::UnknownArg("--bogus".into())
        );
        assert_eq!(
            parse(&args(&["-c", "uq"])).unwrap_err(),
            ParseError::InvalidClasses("uq".into())
        );
    }

    #[test]
    fn negative_length_is_not_a_number() {
        assert_eq!(
            parse(&args(&["-l", "-4"])).unwrap_err(),
            ParseError::InvalidNumber("-4".into())
        );
    }

    #[test]
    fn info_flags() {
        assert!(parse(&args(&["--presets"])).unwrap().is_info_only());
        assert!(parse(&args(&["-v"])).unwrap().is_info_only());
        assert!(!parse(&args(&["-D", "-q"])).unwrap().is_info_only());
    }
}
