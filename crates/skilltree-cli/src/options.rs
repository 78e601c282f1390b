//! Command line options.

use std::path::PathBuf;

use skilltree_graph::{CompletedSet, ExpansionSet, NodeFilter, NodeId};

use crate::error::{Error, Result};

pub const USAGE: &str = "\
usage: skilltree <dataset.json> [options]

options:
  --completed <id,id,...>   node ids the learner has completed
  --expanded <id,id,...>    parent ids whose subnodes are shown
  --domain <name>           only show this domain (repeatable)
  --search <term>           only show nodes whose name contains term
  --config <layout.json>    layout dimensions overriding the defaults
  --compact                 print JSON on one line";

/// Parsed invocation.
#[derive(Debug, Default, PartialEq)]
pub struct Options {
    pub dataset: PathBuf,
    pub config: Option<PathBuf>,
    pub completed: CompletedSet,
    pub expanded: ExpansionSet,
    pub domains: Vec<String>,
    pub search: String,
    pub compact: bool,
}

impl Options {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut options = Options::default();
        let mut dataset = None;
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| Error::Usage(format!("{flag} needs a value\n\n{USAGE}")))
            };
            match arg.as_str() {
                "--completed" => options.completed.extend(id_list(&value("--completed")?)),
                "--expanded" => options.expanded.extend(id_list(&value("--expanded")?)),
                "--domain" => options.domains.push(value("--domain")?),
                "--search" => options.search = value("--search")?,
                "--config" => options.config = Some(PathBuf::from(value("--config")?)),
                "--compact" => options.compact = true,
                "-h" | "--help" => return Err(Error::Usage(USAGE.to_owned())),
                flag if flag.starts_with("--") => {
                    return Err(Error::Usage(format!("unknown option {flag}\n\n{USAGE}")));
                }
                path if dataset.is_none() => dataset = Some(PathBuf::from(path)),
                extra => return Err(Error::Usage(format!("unexpected argument {extra}\n\n{USAGE}"))),
            }
        }

        options.dataset = dataset.ok_or_else(|| Error::Usage(USAGE.to_owned()))?;
        Ok(options)
    }

    /// Domain and search criteria as a filter.
    pub fn filter(&self) -> NodeFilter {
        NodeFilter::new()
            .with_domains(self.domains.iter().cloned())
            .with_search(self.search.clone())
    }
}

fn id_list(raw: &str) -> impl Iterator<Item = NodeId> + '_ {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(NodeId::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn dataset_only() {
        let options = parse(&["catalog.json"]).unwrap();
        assert_eq!(options.dataset, PathBuf::from("catalog.json"));
        assert!(options.completed.is_empty());
        assert!(options.filter().is_passthrough());
    }

    #[test]
    fn all_flags() {
        let options = parse(&[
            "--completed", "a, b,,c",
            "catalog.json",
            "--expanded", "p",
            "--domain", "math",
            "--domain", "cs",
            "--search", "alg",
            "--config", "layout.json",
            "--compact",
        ])
        .unwrap();

        assert_eq!(options.completed.len(), 3);
        assert!(options.completed.contains("b"));
        assert!(options.expanded.contains("p"));
        assert_eq!(options.domains, vec!["math", "cs"]);
        assert_eq!(options.search, "alg");
        assert_eq!(options.config, Some(PathBuf::from("layout.json")));
        assert!(options.compact);
    }

    #[test]
    fn missing_dataset_is_usage_error() {
        assert!(matches!(parse(&[]), Err(Error::Usage(_))));
        assert!(matches!(parse(&["--compact"]), Err(Error::Usage(_))));
    }

    #[test]
    fn flag_without_value() {
        let err = parse(&["catalog.json", "--search"]).unwrap_err();
        assert!(err.to_string().contains("--search needs a value"));
    }

    #[test]
    fn rejects_unknown_and_extra_arguments() {
        assert!(parse(&["catalog.json", "--frobnicate"]).is_err());
        assert!(parse(&["one.json", "two.json"]).is_err());
    }
}
