//! Split command implementation

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use blast_api::{BlastText, Blaster, Config, DelimiterRule, Input, Locale, LocalizedKey};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader, STDIN_MARKER};
use crate::output::{create_formatter, FormatOptions, OutputFormat};
use crate::progress::ProgressReporter;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files or patterns (supports glob); `-` reads stdin
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "key",
        conflicts_with = "key"
    )]
    pub input: Vec<String>,

    /// Localized key to resolve and blast instead of reading files
    #[arg(short, long, value_name = "KEY")]
    pub key: Option<String>,

    /// Built-in delimiter rule (all, character, word, sentence)
    #[arg(short, long, value_name = "RULE")]
    pub delimiter: Option<DelimiterRule>,

    /// Custom delimiter regex; capture group 1 selects the segment
    #[arg(short, long, value_name = "REGEX", conflicts_with = "delimiter")]
    pub pattern: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Show segment ids and byte offsets in text output
    #[arg(long)]
    pub offsets: bool,

    /// Locale for key lookups
    #[arg(long, value_name = "TAG", env = "BLAST_LOCALE")]
    pub locale: Option<String>,

    /// Directory of `<locale>.toml` translation tables
    #[arg(long, value_name = "DIR")]
    pub catalog: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// One blasted input, labelled for output
struct Blasted {
    source: String,
    text: BlastText,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting segmentation");
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load_or_default(self.config.as_deref())?;
        let blaster = Blaster::with_config(self.build_config(&file_config)?).map_err(CliError::from)?;
        log::debug!("Using {:?}", blaster.config());

        let blasted = match &self.key {
            Some(key) => vec![Blasted {
                source: key.clone(),
                text: blaster
                    .blast_key(&LocalizedKey::from(key.as_str()))
                    .map_err(CliError::from)?,
            }],
            None => self.blast_inputs(&blaster)?,
        };

        self.write_output(&file_config, &blasted)?;

        log::info!(
            "Blasted {} input(s) into {} segment(s)",
            blasted.len(),
            blasted.iter().map(|b| b.text.len()).sum::<usize>()
        );
        Ok(())
    }

    /// Merge flags over the configuration file.
    ///
    /// Flags win over the file, the file wins over built-in defaults.
    fn build_config(&self, file_config: &CliConfig) -> Result<Config> {
        let segmentation = &file_config.segmentation;

        let rule = if let Some(pattern) = &self.pattern {
            DelimiterRule::custom(pattern.as_str())
        } else if let Some(rule) = &self.delimiter {
            rule.clone()
        } else if let Some(pattern) = &segmentation.custom_pattern {
            DelimiterRule::custom(pattern.as_str())
        } else {
            segmentation
                .default_delimiter
                .parse()
                .map_err(|e| CliError::ConfigError(format!("{e}")))?
        };

        let locale = self
            .locale
            .clone()
            .or_else(|| file_config.localization.locale.clone())
            .map(Locale::new)
            .or_else(Locale::from_env)
            .unwrap_or_default();

        let mut builder = Config::builder().delimiter(rule).locale(locale.tag());
        if let Some(dir) = self
            .catalog
            .as_ref()
            .or(file_config.localization.catalog_dir.as_ref())
        {
            builder = builder.catalog_dir(dir);
        }

        builder.build().map_err(|e| CliError::from(e).into())
    }

    /// Blast stdin and every file the patterns resolve to, in input order
    fn blast_inputs(&self, blaster: &Blaster) -> Result<Vec<Blasted>> {
        let mut blasted = Vec::new();

        if self.input.iter().any(|input| input == STDIN_MARKER) {
            let text = FileReader::read_stdin()?;
            blasted.push(Blasted {
                source: "<stdin>".to_string(),
                text: blaster.blast(Input::from_text(text)).map_err(CliError::from)?,
            });
        }

        let patterns: Vec<String> = self
            .input
            .iter()
            .filter(|input| *input != STDIN_MARKER)
            .cloned()
            .collect();
        if patterns.is_empty() {
            return Ok(blasted);
        }

        let files = resolve_patterns(&patterns)?;
        log::info!("Found {} file(s) to process", files.len());

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64);

        let results = files
            .par_iter()
            .map(|path| {
                let result = blast_file(blaster, path);
                progress.file_completed(&path.display().to_string());
                result
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        blasted.extend(results?);
        Ok(blasted)
    }

    fn write_output(&self, file_config: &CliConfig, blasted: &[Blasted]) -> Result<()> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&file_config.output.default_format).ok_or_else(|| {
                CliError::ConfigError(format!(
                    "unknown output format: {}",
                    file_config.output.default_format
                ))
            })?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        let options = FormatOptions {
            pretty_json: file_config.output.pretty_json,
            show_offsets: self.offsets || file_config.output.show_offsets,
        };
        let mut formatter = create_formatter(format, writer, options);

        let labelled = blasted.len() > 1;
        for item in blasted {
            if labelled {
                formatter.begin_source(&item.source)?;
            }
            for segment in &item.text {
                formatter.format_segment(segment)?;
            }
        }
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}

fn blast_file(blaster: &Blaster, path: &Path) -> Result<Blasted> {
    let content = FileReader::read_text(path)?;
    let text = blaster
        .blast(Input::from_text(content))
        .map_err(CliError::from)
        .with_context(|| format!("Failed to blast {}", path.display()))?;

    log::debug!("{}: {} segment(s)", path.display(), text.len());
    Ok(Blasted {
        source: path.display().to_string(),
        text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: SplitArgs,
    }

    fn parse(args: &[&str]) -> SplitArgs {
        TestCli::try_parse_from(std::iter::once("split").chain(args.iter().copied()))
            .unwrap()
            .args
    }

    #[test]
    fn test_flags_override_config_file() {
        let file_config = CliConfig::from_toml_str(
            "[segmentation]\ndefault_delimiter = \"character\"\n",
        )
        .unwrap();

        let args = parse(&["-i", "a.txt", "-d", "sentence"]);
        let config = args.build_config(&file_config).unwrap();
        assert_eq!(config.delimiter(), &DelimiterRule::Sentence);

        let args = parse(&["-i", "a.txt"]);
        let config = args.build_config(&file_config).unwrap();
        assert_eq!(config.delimiter(), &DelimiterRule::Character);
    }

    #[test]
    fn test_pattern_flag_becomes_custom_rule() {
        let args = parse(&["-i", "a.txt", "-p", "(um)"]);
        let config = args.build_config(&CliConfig::default()).unwrap();
        assert_eq!(config.delimiter(), &DelimiterRule::custom("(um)"));
    }

    #[test]
    fn test_pattern_conflicts_with_delimiter() {
        let result = TestCli::try_parse_from(["split", "-i", "a.txt", "-d", "word", "-p", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_key_conflicts_with_input() {
        let result = TestCli::try_parse_from(["split", "-i", "a.txt", "-k", "title"]);
        assert!(result.is_err());
        assert!(TestCli::try_parse_from(["split", "-k", "title"]).is_ok());
    }

    #[test]
    fn test_unknown_delimiter_rejected_by_parser() {
        let result = TestCli::try_parse_from(["split", "-i", "a.txt", "-d", "paragraph"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_default_delimiter_in_config() {
        let file_config =
            CliConfig::from_toml_str("[segmentation]\ndefault_delimiter = \"lines\"\n").unwrap();
        let err = parse(&["-i", "a.txt"]).build_config(&file_config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_invalid_pattern_maps_to_invalid_delimiter() {
        let err = parse(&["-i", "a.txt", "-p", "(um"])
            .build_config(&CliConfig::default())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidDelimiter(_))
        ));
    }
}
