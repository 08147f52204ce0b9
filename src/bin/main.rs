use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use roots_core::config::ForgeConfig;
use roots_core::core::splitter::split;
use roots_core::core::tone::ToneTable;
use roots_core::persistence::{
    load_corpus, load_inventory, load_prime_roots, save_dataset, save_snapshot, DataLayout,
};
use roots_core::validate::validate;
use roots_core::{ForgeError, RootEngine, Tone};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Igbo monosyllabic verb-root dataset tools.
#[derive(Parser)]
#[command(name = "roots_engine", version, about = "Generate and validate the verb-root dataset")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, default_value = "roots.toml")]
    config: PathBuf,

    /// Override the language data directory from the config
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate roots, merge with existing ones and write every collection
    Generate {
        /// Also write a binary snapshot of the dataset
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Check the collections on disk and print a report
    Validate,
    /// Show tone variants and the phoneme split of syllables
    Inspect {
        /// Toneless syllables, e.g. "ma" "gbọ"
        syllables: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let code = match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            1
        }
    };
    process::exit(code);
}

fn run(cli: Cli) -> Result<i32, ForgeError> {
    let mut config = ForgeConfig::load(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    let layout = DataLayout::new(&config.data_dir);

    match cli.command {
        Commands::Generate { snapshot } => {
            let engine = RootEngine::new(
                load_inventory(&layout, &ToneTable::standard())?,
                config.pattern_catalog(),
            );
            let existing = load_prime_roots(&layout.prime_roots())?;
            let dataset = engine.build(existing);
            save_dataset(&dataset, &layout)?;
            if let Some(path) = snapshot.or(config.snapshot_path) {
                save_snapshot(&dataset, &path)?;
                println!("Snapshot written to '{}'", path.display());
            }

            println!("{}", "Generation summary".bold());
            println!("---------------------------------------------------------------");
            println!("Prime roots:           {}", dataset.prime_roots.len());
            println!("Dialectal roots:       {}", dataset.dialectal_roots.len());
            println!("Infinitives:           {}", dataset.infinitives.len());
            println!("Dialectal infinitives: {}", dataset.dialectal_infinitives.len());
            for pair in dataset.dialectal_infinitives.iter().take(5) {
                println!("  {}", pair.infinitive_form);
            }
            println!("{} Saved to '{}'", "✓".green(), layout.root().display());
            Ok(0)
        }
        Commands::Validate => {
            let tones = ToneTable::standard();
            let inventory = load_inventory(&layout, &tones)?;
            let corpus = load_corpus(&layout);
            let report = validate(
                &corpus,
                &inventory,
                &config.pattern_catalog(),
                &config.expected_counts,
            );

            for finding in &report.findings {
                let mark = if finding.passed { "✓".green() } else { "✗".red() };
                println!("{mark} [{}] {}: {}", finding.check, finding.subject, finding.detail);
            }
            let failures = report.failures().count();
            println!("---------------------------------------------------------------");
            if failures == 0 {
                println!("{}", "All validations passed!".green());
                Ok(0)
            } else {
                println!("{}", format!("✗ Errors: {failures}").red());
                Ok(1)
            }
        }
        Commands::Inspect { syllables } => {
            let tones = ToneTable::standard();
            let inventory = load_inventory(&layout, &tones)?;
            for syllable in &syllables {
                let main_vowel = tones.find_main_vowel(syllable);
                let group = main_vowel.and_then(|v| inventory.vowel_group(&v.to_string()));
                println!(
                    "{} (main vowel: {}, group: {})",
                    syllable.as_str().bold(),
                    main_vowel.map(String::from).unwrap_or_else(|| "-".into()),
                    group.map(|g| g.to_string()).unwrap_or_else(|| "-".into()),
                );
                for tone in Tone::ALL {
                    let form = tones.apply_tone(syllable, tone);
                    let (consonant, vowel) = split(&inventory, &form, syllable);
                    println!("  {tone:>4} => {form}  [{consonant} | {vowel}]");
                }
            }
            Ok(0)
        }
    }
}
