use std::path::PathBuf;

use anyhow::{Result, bail};

pub const USAGE: &str = "\
Usage: evcap <object> [--json] [--suffix <s>] [--extra <event>]... [--catalog <path>]
       evcap --list [--catalog <path>]";

#[derive(Debug, Default, PartialEq)]
pub struct Args {
    /// Object type to print signatures for. `None` with `list` set.
    pub object: Option<String>,
    pub list: bool,
    pub json: bool,
    pub suffix: Option<String>,
    pub extra: Vec<String>,
    /// Catalog file to use instead of the built-in one.
    pub catalog: Option<PathBuf>,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--list" => parsed.list = true,
                "--json" => parsed.json = true,
                "--suffix" => parsed.suffix = Some(value(&mut args, &arg)?),
                "--extra" => parsed.extra.push(value(&mut args, &arg)?),
                "--catalog" => parsed.catalog = Some(PathBuf::from(value(&mut args, &arg)?)),
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                _ if parsed.object.is_some() => bail!("unexpected argument {arg}\n{USAGE}"),
                _ => parsed.object = Some(arg),
            }
        }
        if parsed.object.is_none() && !parsed.list {
            bail!("{USAGE}");
        }
        Ok(parsed)
    }
}

fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    match args.next() {
        Some(v) => Ok(v),
        None => bail!("{flag} requires a value"),
    }
}
