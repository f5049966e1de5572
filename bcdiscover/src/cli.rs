use std::ffi::OsString;

pub static ABOUT: &str = "Queries the Bandcamp Discover API and prints album URLs.";

pub static EXAMPLES: &str = r"EXAMPLES:
    Top albums across all genres:
    bcdiscover

    Newest vinyl releases in a subgenre:
    bcdiscover -genre electronic/synthwave -ranking new -format vinyl

    Show the genres and subgenres the API knows about:
    bcdiscover -list-genres";

/// Long flags that take a value in the following argument unless written
/// as `-flag=value`.
const VALUE_FLAGS: &[&str] = &["genre", "ranking", "format"];
const SWITCH_FLAGS: &[&str] = &["list-genres", "help", "version"];

/// Rewrites single-dash long flags (`-genre`, `-genre=rock`) to their
/// double-dash form so clap can parse them. The argument after a value flag
/// is never touched, and flag handling stops at `--` or at the first
/// non-flag argument, the same way Go's `flag` package behaves.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expect_value = false;
    let mut flags_done = false;

    for arg in args {
        if flags_done || expect_value {
            expect_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            flags_done = true;
            normalized.push(arg);
            continue;
        };

        if s == "--" {
            flags_done = true;
            normalized.push(arg);
            continue;
        }

        let Some(flag) = s.strip_prefix("--").or_else(|| s.strip_prefix('-')) else {
            flags_done = true;
            normalized.push(arg);
            continue;
        };
        if flag.is_empty() {
            // A lone "-" is a positional argument.
            flags_done = true;
            normalized.push(arg);
            continue;
        }

        let (name, has_value) = match flag.split_once('=') {
            Some((name, _)) => (name, true),
            None => (flag, false),
        };
        let is_value_flag = VALUE_FLAGS.contains(&name);
        expect_value = is_value_flag && !has_value;

        if !s.starts_with("--") && (is_value_flag || SWITCH_FLAGS.contains(&name)) {
            normalized.push(OsString::from(format!("-{s}")));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}
